//! The command layer: user text in, validated engine calls out.
//!
//! All user-input validation lives here. The core's operations are only
//! reached with arguments this module has already checked, so the core
//! itself carries no error paths. Responses are built as strings; the
//! binary decides where they go.

use smallvec::SmallVec;

use crate::battle;
use crate::cards::{CardKind, CardRegistry, Keyword, ManaCost, SpellCategory};
use crate::core::{ConfigError, EntityId, GameOutcome, GameSetup, GameState, PlayerId};
use crate::effects::{self, SpellTargetRef};
use crate::events::GameEvent;
use crate::messages::MessageTable;
use crate::render;
use crate::zones::ZoneKind;

/// Whether the session accepts further input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Ended,
}

/// A parsed slot label like `F3` or `B7` (0-based index).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SlotRef {
    kind: ZoneKind,
    index: usize,
}

fn parse_slot(token: &str) -> Option<SlotRef> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let kind = match bytes[0] {
        b'F' => ZoneKind::Field,
        b'B' => ZoneKind::Battle,
        _ => return None,
    };
    if !(b'1'..=b'7').contains(&bytes[1]) {
        return None;
    }
    Some(SlotRef {
        kind,
        index: (bytes[1] - b'1') as usize,
    })
}

/// A spell target label: `O?(F|B)[1-7]`.
fn parse_target_slot(token: &str) -> Option<(bool, SlotRef)> {
    let (opponent, rest) = match token.strip_prefix('O') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    parse_slot(rest).map(|slot| (opponent, slot))
}

/// One interactive game: state, registry, setup, messages, and the
/// board-printing toggle.
pub struct Session {
    state: GameState,
    registry: CardRegistry,
    setup: GameSetup,
    messages: MessageTable,
    board_printing: bool,
}

impl Session {
    /// Build the starting session.
    pub fn new(
        setup: GameSetup,
        registry: CardRegistry,
        messages: MessageTable,
    ) -> Result<Self, ConfigError> {
        let state = GameState::new(&setup, &registry)?;
        Ok(Self {
            state,
            registry,
            setup,
            messages,
            board_printing: true,
        })
    }

    /// Read-only access to the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The final outcome, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The input prompt for the current player.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("\nP{}> ", self.state.active_player().number())
    }

    /// The opening banner: welcome, round header, board, and the
    /// initial deck-exhaustion check (which may end the game at once).
    pub fn opening(&mut self) -> String {
        let mut out = String::new();
        out.push_str(&self.messages.format("D_BORDER_D"));
        out.push_str(&self.messages.format("D_WELCOME"));
        out.push_str(&self.messages.format("D_BORDER_D"));
        out.push_str(&self.round_header());
        out.push_str(&self.board_text());

        let mut events = Vec::new();
        battle::check_initial_decks(&mut self.state, &mut events);
        if self.state.is_over() {
            self.game_end_block(&events, &mut out);
        }
        out
    }

    /// Process one input line.
    pub fn process(&mut self, input: &str) -> (String, SessionStatus) {
        let mut out = String::new();
        let tokens: SmallVec<[&str; 3]> = input.split_whitespace().collect();

        let Some(&first) = tokens.first() else {
            out.push_str(&self.messages.format("E_UNKNOWN_COMMAND"));
            return (out, SessionStatus::Continue);
        };

        let status = match first.to_lowercase().as_str() {
            "quit" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    SessionStatus::Ended
                } else {
                    SessionStatus::Continue
                }
            }
            "done" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.cmd_done(&mut out)
                } else {
                    SessionStatus::Continue
                }
            }
            "help" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    out.push_str(HELP_TEXT);
                }
                SessionStatus::Continue
            }
            "board" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.board_printing = !self.board_printing;
                    if self.board_printing {
                        out.push_str(&self.board_text());
                    }
                }
                SessionStatus::Continue
            }
            "status" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.cmd_status(&mut out);
                }
                SessionStatus::Continue
            }
            "hand" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.cmd_hand(&mut out);
                }
                SessionStatus::Continue
            }
            "graveyard" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.cmd_graveyard(&mut out);
                }
                SessionStatus::Continue
            }
            "redraw" => {
                if self.check_arity(&tokens, 1, &mut out) {
                    self.cmd_redraw(&mut out);
                }
                SessionStatus::Continue
            }
            "info" => {
                if self.check_arity(&tokens, 2, &mut out) {
                    self.cmd_info(&tokens[1].to_uppercase(), &mut out);
                }
                SessionStatus::Continue
            }
            "creature" => {
                if self.check_arity(&tokens, 3, &mut out) {
                    self.cmd_creature(
                        &tokens[1].to_uppercase(),
                        &tokens[2].to_uppercase(),
                        &mut out,
                    );
                }
                SessionStatus::Continue
            }
            "battle" => {
                if self.check_arity(&tokens, 3, &mut out) {
                    self.cmd_battle(
                        &tokens[1].to_uppercase(),
                        &tokens[2].to_uppercase(),
                        &mut out,
                    );
                }
                SessionStatus::Continue
            }
            "spell" => self.cmd_spell(&tokens, &mut out),
            _ => {
                out.push_str(&self.messages.format("E_UNKNOWN_COMMAND"));
                SessionStatus::Continue
            }
        };

        if self.state.is_over() {
            (out, SessionStatus::Ended)
        } else {
            (out, status)
        }
    }

    // === Commands ===

    fn cmd_done(&mut self, out: &mut String) -> SessionStatus {
        let mut events = Vec::new();
        battle::end_turn(&mut self.state, &self.setup, &mut events);
        self.render_events(&events, out);

        if self.state.is_over() {
            self.game_end_block(&events, out);
            return SessionStatus::Ended;
        }
        if events.iter().any(|e| matches!(e, GameEvent::BattleBegan)) {
            // A new round just started.
            out.push_str(&self.round_header());
            out.push_str(&self.board_text());
        }
        SessionStatus::Continue
    }

    fn cmd_creature(&mut self, code: &str, slot_label: &str, out: &mut String) {
        if !self.registry.contains_code(code) {
            out.push_str(&self.messages.format("E_INVALID_CARD"));
            return;
        }
        let Some(slot) = parse_slot(slot_label) else {
            out.push_str(&self.messages.format("E_INVALID_SLOT"));
            return;
        };

        let player = self.state.active_player();
        let Some(entity) = self.find_in_hand(player, code) else {
            out.push_str(&self.messages.format("E_NOT_IN_HAND"));
            return;
        };
        let Some(def) = self
            .state
            .card(entity)
            .and_then(|card| self.registry.get(card.def))
        else {
            out.push_str(&self.messages.format("E_INVALID_CARD"));
            return;
        };
        if !def.is_creature() {
            out.push_str(&self.messages.format("E_NOT_CREATURE"));
            return;
        }
        if slot.kind != ZoneKind::Field {
            out.push_str(&self.messages.format("E_NOT_IN_FIELD"));
            return;
        }
        if self.state.board.field(player).is_occupied(slot.index) {
            out.push_str(&self.messages.format("E_FIELD_OCCUPIED"));
            return;
        }
        let cost = def.cost.fixed().unwrap_or(0);
        if cost > self.state.player(player).mana() {
            out.push_str(&self.messages.format("E_NOT_ENOUGH_MANA"));
            return;
        }
        let code = def.code.clone();

        let round = self.state.round();
        self.state.players[player].disable_redraw();
        self.state.players[player].spend_mana(cost);
        self.state.players[player].remove_from_hand(entity);
        if let Some(creature) = self.state.creature_mut(entity) {
            creature.reset();
            creature.summoned_round = Some(round);
            creature.last_field_owner = Some(player);
        }
        self.state.board.field_mut(player).place(slot.index, entity);

        out.push_str(
            &self
                .messages
                .event_text(&GameEvent::CreatureSummoned { code }),
        );
    }

    fn cmd_battle(&mut self, from_label: &str, to_label: &str, out: &mut String) {
        let (from, to) = match (parse_slot(from_label), parse_slot(to_label)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                out.push_str(&self.messages.format("E_INVALID_SLOT"));
                return;
            }
        };
        if from.kind != ZoneKind::Field {
            out.push_str(&self.messages.format("E_NOT_IN_FIELD"));
            return;
        }

        let player = self.state.active_player();
        let Some(entity) = self.state.board.field(player).get(from.index) else {
            out.push_str(&self.messages.format("E_FIELD_EMPTY"));
            return;
        };

        let round = self.state.round();
        let (summoned_this_round, has_haste, has_challenger) = match self.state.creature(entity) {
            Some(creature) => (
                creature.summoned_round == Some(round),
                creature.has(Keyword::Haste),
                creature.has(Keyword::Challenger),
            ),
            None => (false, false, false),
        };
        if summoned_this_round && !has_haste {
            out.push_str(&self.messages.format("E_CREATURE_CANNOT_BATTLE"));
            return;
        }
        if to.kind != ZoneKind::Battle {
            out.push_str(&self.messages.format("E_NOT_IN_BATTLE"));
            return;
        }
        if self.state.board.battle(player).is_occupied(to.index) {
            out.push_str(&self.messages.format("E_BATTLE_OCCUPIED"));
            return;
        }

        self.state.players[player].disable_redraw();
        self.state.board.field_mut(player).take(from.index);
        if let Some(creature) = self.state.creature_mut(entity) {
            creature.last_field_owner = Some(player);
        }
        self.state.board.battle_mut(player).place(to.index, entity);

        // A Challenger drags the opposing parked creature into its lane.
        if has_challenger {
            let opponent = player.opponent();
            let lane = to.index;
            let parked = self
                .state
                .board
                .field(opponent)
                .get(lane)
                .filter(|&e| self.state.creature(e).is_some());
            if let Some(dragged) = parked {
                if !self.state.board.battle(opponent).is_occupied(lane) {
                    self.state.board.field_mut(opponent).take(lane);
                    self.state.board.battle_mut(opponent).place(lane, dragged);
                    out.push_str(
                        &self
                            .messages
                            .event_text(&GameEvent::ChallengerDragged { creature: dragged }),
                    );
                }
            }
        }

        if summoned_this_round && has_haste {
            out.push_str(
                &self
                    .messages
                    .event_text(&GameEvent::HasteUsed { creature: entity }),
            );
        }
    }

    fn cmd_spell(&mut self, tokens: &[&str], out: &mut String) -> SessionStatus {
        if tokens.len() < 2 {
            out.push_str(&self.messages.format("E_MISSING_CARD"));
            return SessionStatus::Continue;
        }
        let code = tokens[1].to_uppercase();
        if !self.registry.contains_code(&code) {
            out.push_str(&self.messages.format("E_INVALID_CARD"));
            return SessionStatus::Continue;
        }

        let player = self.state.active_player();
        let Some(entity) = self.find_in_hand(player, &code) else {
            out.push_str(&self.messages.format("E_NOT_IN_HAND"));
            return SessionStatus::Continue;
        };
        let Some(def) = self
            .state
            .card(entity)
            .and_then(|card| self.registry.get(card.def))
        else {
            out.push_str(&self.messages.format("E_INVALID_CARD"));
            return SessionStatus::Continue;
        };
        let CardKind::Spell(effect) = def.kind else {
            out.push_str(&self.messages.format("E_NOT_SPELL"));
            return SessionStatus::Continue;
        };
        let base_cost = def.cost;

        let category = effect.category();
        let expected_tokens = if category == SpellCategory::General { 2 } else { 3 };
        if tokens.len() != expected_tokens {
            out.push_str(&self.messages.format("E_INVALID_PARAM_COUNT_SPELL"));
            return SessionStatus::Continue;
        }
        if let ManaCost::Fixed(cost) = base_cost {
            if cost > self.state.player(player).mana() {
                out.push_str(&self.messages.format("E_NOT_ENOUGH_MANA"));
                return SessionStatus::Continue;
            }
        }

        let target = match category {
            SpellCategory::General => None,
            SpellCategory::Target => {
                let label = tokens[2].to_uppercase();
                let Some((on_opponent, slot)) = parse_target_slot(&label) else {
                    out.push_str(&self.messages.format("E_INVALID_SLOT_SPELL"));
                    return SessionStatus::Continue;
                };
                let target_player = if on_opponent { player.opponent() } else { player };
                let target = SpellTargetRef::Slot {
                    player: target_player,
                    kind: slot.kind,
                    slot: slot.index,
                };
                if effects::resolve_target(&self.state, target).is_none() {
                    out.push_str(&self.messages.format("E_TARGET_EMPTY"));
                    return SessionStatus::Continue;
                }
                Some(target)
            }
            SpellCategory::Graveyard => {
                let grave_code = tokens[2].to_uppercase();
                let Some(grave_entity) = self.find_in_graveyard(player, &grave_code) else {
                    out.push_str(&self.messages.format("E_NOT_IN_GRAVEYARD"));
                    return SessionStatus::Continue;
                };
                Some(SpellTargetRef::Graveyard {
                    player,
                    entity: grave_entity,
                })
            }
        };

        let cost = effects::spell_cost(&self.state, &self.registry, effect, base_cost, target);
        if cost > self.state.player(player).mana() {
            out.push_str(&self.messages.format("E_NOT_ENOUGH_MANA"));
            return SessionStatus::Continue;
        }

        let mut events = Vec::new();
        effects::cast(
            &mut self.state,
            &self.registry,
            player,
            entity,
            effect,
            cost,
            target,
            &mut events,
        );
        self.render_events(&events, out);
        SessionStatus::Continue
    }

    fn cmd_redraw(&mut self, out: &mut String) {
        let player = self.state.active_player();
        if !self.state.player(player).can_redraw() {
            let key = if self.state.player(player).hand().len() < 2 {
                "E_REDRAW_NOT_ENOUGH_CARDS"
            } else {
                "E_REDRAW_DISABLED"
            };
            out.push_str(&self.messages.format(key));
            return;
        }
        self.state.players[player].perform_redraw();
    }

    fn cmd_status(&mut self, out: &mut String) {
        let roles = self.state.roles();
        out.push_str(&self.messages.format("D_BORDER_STATUS"));
        for (i, player) in PlayerId::BOTH.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.messages.format("D_BORDER_C"));
            }
            let p = self.state.player(player);
            out.push_str(&format!(
                "{}\nRole: {}\nHealth: {}\nMana: {} / {}\nRemaining Deck: {} card(s)\n\
Graveyard Size: {} card(s)\n",
                player,
                roles.role_of(player),
                p.health(),
                p.mana(),
                p.mana_pool(),
                p.deck_remaining(),
                p.graveyard().len(),
            ));
        }
        out.push_str(&self.messages.format("D_BORDER_D"));
    }

    fn cmd_hand(&mut self, out: &mut String) {
        let player = self.state.active_player();
        out.push_str(&self.messages.format("D_BORDER_HAND"));
        out.push_str(&render::render_hand(&self.state, &self.registry, player));
        out.push_str(&self.messages.format("D_BORDER_D"));
    }

    fn cmd_graveyard(&mut self, out: &mut String) {
        let player = self.state.active_player();
        out.push_str(&self.messages.format("D_BORDER_GRAVEYARD"));
        for &entity in self.state.player(player).graveyard().iter().rev() {
            if let Some(def) = self
                .state
                .card(entity)
                .and_then(|card| self.registry.get(card.def))
            {
                out.push_str(&format!("{} | {}\n", def.code, def.name));
            }
        }
        out.push_str(&self.messages.format("D_BORDER_D"));
    }

    fn cmd_info(&mut self, code: &str, out: &mut String) {
        let Some(def) = self.registry.get_by_code(code) else {
            out.push_str(&self.messages.format("E_INVALID_CARD"));
            return;
        };
        out.push_str(&self.messages.format("D_BORDER_INFO"));
        match &def.kind {
            CardKind::Creature(stats) => {
                out.push_str(&format!(
                    "{} [{}] ({} mana)\nType: Creature\nBase Attack: {}\nBase Health: {}\n",
                    def.name, def.code, def.cost, stats.attack, stats.health
                ));
                let keywords: Vec<&str> = stats
                    .keywords
                    .iter()
                    .map(|k| k.display_name())
                    .collect();
                if keywords.is_empty() {
                    out.push_str("Base Traits: -\n");
                } else {
                    out.push_str(&format!("Base Traits: {}\n", keywords.join(", ")));
                }
            }
            CardKind::Spell(_) => {
                out.push_str(&format!(
                    "{} [{}] ({} mana)\nType: Spell\nEffect: {}",
                    def.name,
                    def.code,
                    def.cost,
                    self.messages.format(&format!("D_{}", def.code))
                ));
            }
        }
        out.push_str(&self.messages.format("D_BORDER_D"));
    }

    // === Helpers ===

    fn check_arity(&self, tokens: &[&str], expected: usize, out: &mut String) -> bool {
        if tokens.len() == expected {
            true
        } else {
            out.push_str(&self.messages.format("E_INVALID_PARAM_COUNT"));
            false
        }
    }

    fn find_in_hand(&self, player: PlayerId, code: &str) -> Option<EntityId> {
        self.state
            .player(player)
            .hand()
            .iter()
            .copied()
            .find(|&e| self.card_code(e) == Some(code))
    }

    /// Newest graveyard entry with the given code.
    fn find_in_graveyard(&self, player: PlayerId, code: &str) -> Option<EntityId> {
        self.state
            .player(player)
            .graveyard()
            .iter()
            .rev()
            .copied()
            .find(|&e| self.card_code(e) == Some(code))
    }

    fn card_code(&self, entity: EntityId) -> Option<&str> {
        self.state
            .card(entity)
            .and_then(|card| self.registry.get(card.def))
            .map(|def| def.code.as_str())
    }

    fn board_text(&self) -> String {
        if self.board_printing {
            render::render_board(&self.state, &self.registry)
        } else {
            String::new()
        }
    }

    fn round_header(&self) -> String {
        format!(
            "\n{}                                         ROUND {}\n{}",
            self.messages.format("D_BORDER_D"),
            self.state.round(),
            self.messages.format("D_BORDER_D"),
        )
    }

    /// Render an event stream, weaving in the board before the battle
    /// border and the literal lane headers. Terminal events are left to
    /// `game_end_block`.
    fn render_events(&self, events: &[GameEvent], out: &mut String) {
        for event in events {
            match event {
                GameEvent::BattleBegan => {
                    out.push_str(&self.board_text());
                    out.push('\n');
                    out.push_str(&self.messages.format("D_BORDER_BATTLE_PHASE"));
                }
                GameEvent::LaneStart { lane } => {
                    out.push_str(&format!(
                        "---------------------------------------- SLOT {} \
-----------------------------------------\n",
                        lane + 1
                    ));
                }
                GameEvent::DeckExhausted { .. }
                | GameEvent::RoundLimit
                | GameEvent::PlayerDefeated { .. }
                | GameEvent::Tie => {}
                other => out.push_str(&self.messages.event_text(other)),
            }
        }
    }

    /// The game-over banner: border, reason, winner or tie line, border.
    fn game_end_block(&self, events: &[GameEvent], out: &mut String) {
        let reason = if events.iter().any(|e| matches!(e, GameEvent::RoundLimit)) {
            "D_END_MAX_ROUNDS"
        } else if events
            .iter()
            .any(|e| matches!(e, GameEvent::DeckExhausted { .. }))
        {
            "D_END_DRAW_CARD"
        } else {
            "D_END_PLAYER_DEFEATED"
        };

        out.push('\n');
        out.push_str(&self.messages.format("D_BORDER_GAME_END"));
        out.push_str(&self.messages.format(reason));
        match self.state.outcome() {
            Some(GameOutcome::Winner(winner)) => {
                out.push_str(&GameOutcome::Winner(winner).result_line());
                out.push('\n');
            }
            Some(GameOutcome::Tie) => out.push_str(&self.messages.format("D_TIE")),
            None => {}
        }
        out.push_str(&self.messages.format("D_BORDER_D"));
    }
}

const HELP_TEXT: &str = "\
=== Commands ============================================================================
- help
    Prints this help text.

- quit
    Terminates the game.

- battle <FIELD_SLOT> <BATTLE_SLOT>
    Moves a creature from a Field Zone slot into a Battle Zone slot.
    <FIELD_SLOT>: Current slot of the creature (F1, ..., F7)
    <BATTLE_SLOT>: Battle slot for the creature (B1, ..., B7)

- board
    Toggles the board printing.

- creature <HAND_CARD_ID> <FIELD_SLOT>
    Places a creature from your hand into a Field Zone slot.
    <HAND_CARD_ID>: The ID of the creature card in your hand
    <FIELD_SLOT>: The Field Zone slot to place the creature in

- done
    Ends your turn for this round.

- graveyard
    Prints all the cards in your graveyard.

- hand
    Prints your hand cards.

- info <CARD_ID>
    Prints card information.
    <CARD_ID>: The ID of the card to be inspected

- redraw
    Discards all hand cards and draws the same amount minus one from your deck.

- spell <HAND_CARD_ID> [<TARGET_SLOT>|<GRAVEYARD_CARD_ID>]
    Casts a spell from your hand.
    <HAND_CARD_ID>: The ID of the spell in your hand
    <TARGET_SLOT>: The slot to target with a target spell
    <GRAVEYARD_CARD_ID>: The ID of a card in the graveyard to cast a graveyard spell on

- status
    Prints general information about both players.

=========================================================================================
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot() {
        assert_eq!(
            parse_slot("F1"),
            Some(SlotRef {
                kind: ZoneKind::Field,
                index: 0
            })
        );
        assert_eq!(
            parse_slot("B7"),
            Some(SlotRef {
                kind: ZoneKind::Battle,
                index: 6
            })
        );
        assert_eq!(parse_slot("F8"), None);
        assert_eq!(parse_slot("F0"), None);
        assert_eq!(parse_slot("X3"), None);
        assert_eq!(parse_slot("F12"), None);
        assert_eq!(parse_slot(""), None);
    }

    #[test]
    fn test_parse_target_slot() {
        let (opp, slot) = parse_target_slot("OF3").unwrap();
        assert!(opp);
        assert_eq!(slot.kind, ZoneKind::Field);
        assert_eq!(slot.index, 2);

        let (own, slot) = parse_target_slot("B2").unwrap();
        assert!(!own);
        assert_eq!(slot.kind, ZoneKind::Battle);
        assert_eq!(slot.index, 1);

        assert_eq!(parse_target_slot("OO1"), None);
        assert_eq!(parse_target_slot("OF8"), None);
    }
}
