//! Round and turn control.
//!
//! The round lifecycle: both players take a turn (in role order,
//! attacker first) and signal "done". The first "done" hands the turn
//! over; the second triggers battle resolution, the round increment with
//! its terminal checks, the draw/mana economy, and the role swap.
//!
//! Each "done" also runs the upkeep sweep over the departing player's
//! battle zone: Regenerate healing on odd rounds, then poison ticks.

use crate::cards::Keyword;
use crate::core::{GameOutcome, GameSetup, GameState, PlayerId};
use crate::events::GameEvent;
use crate::zones::SLOT_COUNT;

use super::engine::resolve_battle;

/// Handle one "done" from the active player.
pub fn end_turn(state: &mut GameState, setup: &GameSetup, events: &mut Vec<GameEvent>) {
    upkeep_sweep(state, state.active_player(), events);

    if state.record_done() < 2 {
        state.switch_active();
        return;
    }

    resolve_battle(state, events);
    if state.is_over() {
        return;
    }

    advance_round(state, setup, events);
    if state.is_over() {
        return;
    }

    state.reset_done();
    state.set_active(state.roles().attacker);
}

/// Deck-exhaustion check at game start, before any command runs.
///
/// A player with an empty deck at prompt entry has already lost.
pub fn check_initial_decks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for player in PlayerId::BOTH {
        if state.player(player).deck_remaining() == 0 {
            let winner = player.opponent();
            state.set_outcome(GameOutcome::Winner(winner));
            events.push(GameEvent::DeckExhausted { player });
            events.push(GameEvent::PlayerDefeated { winner });
            return;
        }
    }
}

/// Regenerate (odd rounds only) and poison ticks over one player's
/// battle zone. Poison deaths go straight to that player's graveyard.
fn upkeep_sweep(state: &mut GameState, player: PlayerId, events: &mut Vec<GameEvent>) {
    if state.round() % 2 == 1 {
        for lane in 0..SLOT_COUNT {
            let Some(entity) = state.board.battle(player).get(lane) else {
                continue;
            };
            let Some(creature) = state.creature_mut(entity) else {
                continue;
            };
            if creature.has(Keyword::Regenerate) && creature.health < creature.base().health {
                let base_health = creature.base().health;
                creature.health = base_health;
                events.push(GameEvent::Regenerated { creature: entity });
            }
        }
    }

    for lane in 0..SLOT_COUNT {
        let Some(entity) = state.board.battle(player).get(lane) else {
            continue;
        };
        let died = {
            let Some(creature) = state.creature_mut(entity) else {
                continue;
            };
            if !creature.has(Keyword::Poisoned) {
                continue;
            }
            creature.take_damage(1);
            events.push(GameEvent::PoisonTick { creature: entity });
            creature.is_dead()
        };
        if died {
            state.board.battle_mut(player).take(lane);
            state.players[player].add_to_graveyard(entity);
        }
    }
}

/// Increment the round and apply its economy and terminal checks.
fn advance_round(state: &mut GameState, setup: &GameSetup, events: &mut Vec<GameEvent>) {
    state.advance_round();

    if state.round() > setup.max_rounds {
        events.push(GameEvent::RoundLimit);
        let hp1 = state.player(PlayerId::One).health();
        let hp2 = state.player(PlayerId::Two).health();
        if hp1 == hp2 {
            state.set_outcome(GameOutcome::Tie);
            events.push(GameEvent::Tie);
        } else {
            let winner = if hp1 > hp2 { PlayerId::One } else { PlayerId::Two };
            state.set_outcome(GameOutcome::Winner(winner));
            events.push(GameEvent::PlayerDefeated { winner });
        }
        return;
    }

    for player in PlayerId::BOTH {
        if state.player(player).deck_remaining() == 0 {
            let winner = player.opponent();
            state.set_outcome(GameOutcome::Winner(winner));
            events.push(GameEvent::DeckExhausted { player });
            events.push(GameEvent::PlayerDefeated { winner });
            return;
        }
    }

    for player in PlayerId::BOTH {
        state.players[player].draw();
    }

    if state.round() % 2 == 1 {
        for player in PlayerId::BOTH {
            state.players[player].grow_mana_pool();
            state.players[player].refill_mana();
        }
    }
}
