//! ASCII rendering of cards, zones, the board, and hands.
//!
//! Pure string builders over read-only state; nothing here mutates or
//! prints. Card cells are 9 characters wide and 4 lines tall:
//!
//! ```text
//!  _____M02
//! | WOLFF |
//! | FH    |
//! A02___H01
//! ```

use crate::cards::{CardDefinition, CardRegistry, CreatureState, KeywordSet, ManaCost};
use crate::core::{EntityId, GameState, PlayerId};
use crate::zones::{Zone, SLOT_COUNT};

const CELL_WIDTH: usize = 9;
const GAP: &str = "   ";

/// Four-line art for one card.
///
/// Creature lines show current stats when `creature` is given, base
/// stats otherwise (hand and info views pass the live state too).
#[must_use]
pub fn card_art(def: &CardDefinition, creature: Option<&CreatureState>) -> [String; 4] {
    let mana = match def.cost {
        ManaCost::Fixed(n) => pad2(n as i32),
        ManaCost::Variable => "XX".to_string(),
    };

    match def.as_creature() {
        Some(stats) => {
            let (attack, health, keywords) = match creature {
                Some(c) => (c.attack, c.health, c.keywords),
                None => (stats.attack, stats.health, stats.keywords),
            };
            [
                format!(" _____M{}", mana),
                format!("| {:<5} |", def.code),
                format!("| {:<5} |", keyword_letters(keywords)),
                format!("A{}___H{}", pad2(attack), pad2(health)),
            ]
        }
        None => [
            format!(" _____M{}", mana),
            format!("| {:<5} |", def.code),
            "|       |".to_string(),
            " _______ ".to_string(),
        ],
    }
}

/// Keyword letters for card art: alphabetical, at most five characters,
/// the fifth becoming `+` when more keywords exist than fit.
#[must_use]
pub fn keyword_letters(keywords: KeywordSet) -> String {
    let letters: Vec<char> = keywords.iter().map(|k| k.letter()).collect();
    if letters.len() > 5 {
        let mut out: String = letters[..4].iter().collect();
        out.push('+');
        out
    } else {
        letters.into_iter().collect()
    }
}

/// Render one zone as four lines, seven cells wide, framed by its
/// marker character.
#[must_use]
pub fn render_zone(state: &GameState, registry: &CardRegistry, zone: &Zone, marker: char) -> String {
    let blank = " ".repeat(CELL_WIDTH);
    let mut cells: Vec<[String; 4]> = Vec::with_capacity(SLOT_COUNT);
    for slot in 0..SLOT_COUNT {
        cells.push(match zone.get(slot) {
            Some(entity) => entity_art(state, registry, entity),
            None => [blank.clone(), blank.clone(), blank.clone(), blank.clone()],
        });
    }

    let mut out = String::new();
    for row in 0..4 {
        out.push(marker);
        for cell in &cells {
            out.push_str(GAP);
            out.push_str(&pad_cell(&cell[row]));
        }
        out.push_str(GAP);
        out.push(marker);
        out.push('\n');
    }
    out
}

/// Render the full board, defender on top, with role banners.
#[must_use]
pub fn render_board(state: &GameState, registry: &CardRegistry) -> String {
    let roles = state.roles();
    let divider = "===[---------]=[---------]=[---------]=[---------]\
=[---------]=[---------]=[---------]===\n";
    let lane_markers = "~~~[~~~ 1 ~~~]~[~~~ 2 ~~~]~[~~~ 3 ~~~]\
~[~~~ 4 ~~~]~[~~~ 5 ~~~]~[~~~ 6 ~~~]~[~~~ 7 ~~~]~~~\n";

    let mut out = String::new();
    out.push_str(&format!(
        "================================== DEFENDER: PLAYER {} \
===================================\n",
        roles.defender.number()
    ));
    out.push_str(&render_zone(state, registry, state.board.field(roles.defender), 'F'));
    out.push_str(divider);
    out.push_str(&render_zone(state, registry, state.board.battle(roles.defender), 'B'));
    out.push_str(lane_markers);
    out.push_str(&render_zone(state, registry, state.board.battle(roles.attacker), 'B'));
    out.push_str(divider);
    out.push_str(&render_zone(state, registry, state.board.field(roles.attacker), 'F'));
    out.push_str(&format!(
        "================================== ATTACKER: PLAYER {} \
===================================\n",
        roles.attacker.number()
    ));
    out
}

/// Render a player's hand in rows of up to seven cards.
#[must_use]
pub fn render_hand(state: &GameState, registry: &CardRegistry, player: PlayerId) -> String {
    let hand = state.player(player).hand();
    let mut out = String::new();

    for chunk in hand.chunks(SLOT_COUNT) {
        let cells: Vec<[String; 4]> = chunk
            .iter()
            .map(|&entity| entity_art(state, registry, entity))
            .collect();
        for row in 0..4 {
            out.push_str("    ");
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    out.push_str(GAP);
                }
                out.push_str(&pad_cell(&cell[row]));
            }
            out.push('\n');
        }
    }
    out
}

fn entity_art(state: &GameState, registry: &CardRegistry, entity: EntityId) -> [String; 4] {
    let blank = " ".repeat(CELL_WIDTH);
    let Some(card) = state.card(entity) else {
        return [blank.clone(), blank.clone(), blank.clone(), blank];
    };
    match registry.get(card.def) {
        Some(def) => card_art(def, card.as_creature()),
        None => [blank.clone(), blank.clone(), blank.clone(), blank],
    }
}

fn pad_cell(line: &str) -> String {
    format!("{:<width$}", line, width = CELL_WIDTH)
}

fn pad2(value: i32) -> String {
    if value < 0 {
        "XX".to_string()
    } else if value > 99 {
        "**".to_string()
    } else {
        format!("{:02}", value)
    }
}
