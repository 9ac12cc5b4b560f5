//! Game setup configuration.
//!
//! The setup file carries the game constants and both deck lists. Parsing
//! happens once at startup; any defect in the file is fatal (the binary
//! reports it and exits non-zero). The core never sees a partially valid
//! setup.
//!
//! File format:
//!
//! ```text
//! GAME
//! <PLAYER_HEALTH>
//! <MAX_ROUNDS>
//! <DECK_SIZE>
//! <MANA_POOL_SIZE>
//!
//! ID1;ID2;...          (Player 1 deck)
//! ID1;ID2;...          (Player 2 deck)
//! ```
//!
//! The only other file interaction is `append_result`, which appends the
//! final result line to the same file when a game ends.

use std::fs;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use super::player::{PlayerId, PlayerPair};
use super::state::GameOutcome;

/// Errors raised while loading any of the configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config header: expected {expected:?}, found {found:?}")]
    BadHeader { expected: &'static str, found: String },

    #[error("malformed config line: {0:?}")]
    Malformed(String),

    #[error("invalid number in config: {0:?}")]
    BadNumber(String),

    #[error("deck has {found} cards, expected {expected}")]
    DeckSize { expected: usize, found: usize },

    #[error("unknown card id {0:?}")]
    UnknownCard(String),

    #[error("unknown keyword {0:?}")]
    UnknownKeyword(String),

    #[error("no spell effect is defined for id {0:?}")]
    UnknownSpell(String),

    #[error("spell {code:?} is declared {declared:?} but its effect is {actual:?}")]
    SpellCategoryMismatch {
        code: String,
        declared: String,
        actual: String,
    },
}

/// Parsed game constants and deck lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSetup {
    /// Starting health for both players.
    pub player_health: i32,

    /// Round limit; exceeding it ends the game on health comparison.
    pub max_rounds: u32,

    /// Required number of cards per deck list.
    pub deck_size: usize,

    /// Starting mana pool size for both players.
    pub mana_pool_start: u32,

    /// Card codes per player, in draw order.
    pub decks: PlayerPair<Vec<String>>,
}

impl GameSetup {
    /// Parse a setup file's contents.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut lines = text.lines().map(str::trim_end);

        let header = lines.next().unwrap_or("").trim();
        if header != "GAME" {
            return Err(ConfigError::BadHeader {
                expected: "GAME",
                found: header.to_string(),
            });
        }

        let mut read_int = || -> Result<i64, ConfigError> {
            let line = lines
                .next()
                .ok_or_else(|| ConfigError::Malformed("unexpected end of file".to_string()))?
                .trim();
            line.parse::<i64>()
                .map_err(|_| ConfigError::BadNumber(line.to_string()))
        };

        let player_health = read_int()?;
        let max_rounds = read_int()?;
        let deck_size = read_int()?;
        let mana_pool = read_int()?;

        if player_health < 1 || max_rounds < 1 || deck_size < 1 || mana_pool < 0 {
            return Err(ConfigError::BadNumber(format!(
                "{};{};{};{}",
                player_health, max_rounds, deck_size, mana_pool
            )));
        }

        // Skip the blank separator line.
        let _ = lines.next();

        let deck_line_1 = lines
            .next()
            .ok_or_else(|| ConfigError::Malformed("missing player 1 deck line".to_string()))?;
        let deck_line_2 = lines
            .next()
            .ok_or_else(|| ConfigError::Malformed("missing player 2 deck line".to_string()))?;

        let deck_size = deck_size as usize;
        let deck_1 = split_ids(deck_line_1);
        let deck_2 = split_ids(deck_line_2);
        for deck in [&deck_1, &deck_2] {
            if deck.len() != deck_size {
                return Err(ConfigError::DeckSize {
                    expected: deck_size,
                    found: deck.len(),
                });
            }
        }

        Ok(Self {
            player_health: player_health as i32,
            max_rounds: max_rounds as u32,
            deck_size,
            // Round 1 is the first odd round; its pool growth is applied
            // here rather than by the round controller.
            mana_pool_start: mana_pool as u32 + 1,
            decks: {
                let mut decks = PlayerPair::with_value(Vec::new());
                decks[PlayerId::One] = deck_1;
                decks[PlayerId::Two] = deck_2;
                decks
            },
        })
    }

    /// Load and parse a setup file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// Append the game's result line to the setup file.
///
/// The only state persisted across runs.
pub fn append_result(path: impl AsRef<Path>, outcome: GameOutcome) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new().append(true).open(path)?;
    writeln!(file, "\n{}", outcome.result_line())
}

fn split_ids(line: &str) -> Vec<String> {
    line.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_uppercase())
        .collect()
}
