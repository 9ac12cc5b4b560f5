//! Message-table lookup for the presentation layer.
//!
//! The core never formats user-facing text; it emits `GameEvent`s. This
//! module loads the message configuration (`MESSAGE` header, `KEY:TEXT`
//! lines) and maps events to message keys. Keys starting with `I_` and
//! `E_` get `[INFO] ` / `[ERROR] ` prefixes.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::core::config::ConfigError;
use crate::events::GameEvent;

/// Parsed message configuration.
#[derive(Clone, Debug, Default)]
pub struct MessageTable {
    messages: FxHashMap<String, String>,
}

impl MessageTable {
    /// Parse a message file's contents.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut lines = text.lines().map(str::trim_end);

        let header = lines.next().unwrap_or("").trim();
        if header != "MESSAGE" {
            return Err(ConfigError::BadHeader {
                expected: "MESSAGE",
                found: header.to_string(),
            });
        }

        let mut messages = FxHashMap::default();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            // Malformed lines are skipped, not fatal; the file mixes
            // prose and key lines.
            if let Some((key, text)) = line.split_once(':') {
                messages.insert(key.to_string(), text.to_string());
            }
        }

        Ok(Self { messages })
    }

    /// Load and parse a message file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Raw text for a key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Full formatted message: prefix, text, trailing newline.
    ///
    /// Unknown keys render as a `<KEY>` placeholder so a missing entry
    /// is visible instead of silently blank.
    #[must_use]
    pub fn format(&self, key: &str) -> String {
        match self.raw(key) {
            Some(text) => format!("{}{}\n", prefix_for(key), text),
            None => format!("<{}>\n", key),
        }
    }

    /// Formatted message for an event.
    #[must_use]
    pub fn event_text(&self, event: &GameEvent) -> String {
        match event {
            GameEvent::CreatureSummoned { code } | GameEvent::SpellCast { code } => {
                self.format(&format!("I_{}", code))
            }
            _ => self.format(event_key(event)),
        }
    }
}

/// The message key an event maps to.
///
/// `CreatureSummoned` and `SpellCast` use dynamic `I_<CODE>` keys and
/// are handled by `MessageTable::event_text`.
#[must_use]
pub fn event_key(event: &GameEvent) -> &'static str {
    match event {
        GameEvent::BattleBegan => "D_BORDER_BATTLE_PHASE",
        GameEvent::LaneStart { .. } => "D_SLOT",
        GameEvent::Fight { .. } => "I_FIGHT",
        GameEvent::FirstStrike => "I_FIRST_STRIKE",
        GameEvent::DirectHit { .. } => "I_DIRECT",
        GameEvent::Trample { .. } => "I_BRUTAL_OVERKILL",
        GameEvent::Brutal { .. } => "I_BRUTAL",
        GameEvent::Lifesteal { .. } => "I_LIFESTEAL",
        GameEvent::PoisonSpread { .. } | GameEvent::PoisonTick { .. } => "I_POISONED",
        GameEvent::VenomApplied { .. } => "I_VENOMOUS",
        GameEvent::BattleEnded => "D_BORDER_BATTLE_END",
        GameEvent::Regenerated { .. } => "I_REGENERATE",
        GameEvent::Resurrected { .. } => "I_UNDYING",
        GameEvent::TemporaryExpired { .. } => "I_TEMPORARY",
        GameEvent::HasteUsed { .. } => "I_HASTE",
        GameEvent::ChallengerDragged { .. } => "I_CHALLENGER",
        GameEvent::CreatureSummoned { .. } | GameEvent::SpellCast { .. } => "I_CARD",
        GameEvent::DeckExhausted { .. } => "D_END_DRAW_CARD",
        GameEvent::RoundLimit => "D_END_MAX_ROUNDS",
        GameEvent::PlayerDefeated { .. } => "D_END_PLAYER_DEFEATED",
        GameEvent::Tie => "D_TIE",
    }
}

fn prefix_for(key: &str) -> &'static str {
    if key.starts_with("I_") {
        "[INFO] "
    } else if key.starts_with("E_") {
        "[ERROR] "
    } else {
        ""
    }
}
