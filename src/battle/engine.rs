//! Battle resolution.
//!
//! Runs exactly once per round, after both players have ended their
//! turn. Walks the seven lanes in index order, resolves creature combat
//! and direct hits, then performs post-battle zone migration.
//!
//! ## Blow resolution
//!
//! Every blow follows the same sequence: apply damage (creature health
//! clamps at 0); a Brutal striker tramples its overkill (damage beyond
//! the target's health at the time of the strike) onto the opposing
//! player, and grows its snapshot damage by 1 for any later blow in the
//! same lane; a Poisoned or Venomous striker poisons a *surviving*
//! target (both checks fire independently, the set is idempotent); a
//! Lifesteal striker heals its controller by the possibly-grown damage
//! whether or not the target survived.
//!
//! ## Ordering
//!
//! With exactly one first striker, its blow resolves alone and a killed
//! target never retaliates. Otherwise the exchange is simultaneous: the
//! attacker's blow fully resolves first, then the defender's blow lands
//! even if the defender just died, using the defender's pre-combat
//! attack snapshot.
//!
//! Any damage to a player is followed immediately by a terminal check;
//! a decided game stops the pass before the remaining lanes and skips
//! cleanup entirely.

use crate::cards::Keyword;
use crate::core::{EntityId, GameOutcome, GameState, PlayerId, RoleAssignment};
use crate::events::GameEvent;
use crate::zones::SLOT_COUNT;

/// Resolve the battle phase for the current round.
pub fn resolve_battle(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let roles = state.roles();
    events.push(GameEvent::BattleBegan);

    for lane in 0..SLOT_COUNT {
        if state.player(PlayerId::One).is_defeated() && state.player(PlayerId::Two).is_defeated() {
            state.set_outcome(GameOutcome::Tie);
            events.push(GameEvent::Tie);
            return;
        }
        if state.is_over() {
            return;
        }

        events.push(GameEvent::LaneStart { lane });

        let atk = state
            .board
            .battle(roles.attacker)
            .get(lane)
            .filter(|&e| state.creature(e).is_some());
        let def = state
            .board
            .battle(roles.defender)
            .get(lane)
            .filter(|&e| state.creature(e).is_some());

        match (atk, def) {
            (None, def) => {
                // A creature parked on the attacker's field never
                // auto-participates; its lane resolves with no effect.
                if state.board.field(roles.attacker).is_occupied(lane) {
                    continue;
                }
                if let Some(d) = def {
                    let amount = state.creature(d).map_or(0, |c| c.attack);
                    if hit_player(state, roles.attacker, amount, PlayerHit::Direct, events) {
                        return;
                    }
                }
            }
            (Some(a), None) => {
                let amount = state.creature(a).map_or(0, |c| c.attack);
                if hit_player(state, roles.defender, amount, PlayerHit::Direct, events) {
                    return;
                }
            }
            (Some(a), Some(d)) => {
                if resolve_exchange(state, lane, roles, a, d, events) {
                    return;
                }
            }
        }
    }

    events.push(GameEvent::BattleEnded);
    cleanup(state, roles, events);
}

/// What one blow did to its target.
enum BlowOutcome {
    TargetSurvived,
    TargetDied,
    GameOver,
}

enum PlayerHit {
    Direct,
    Trample,
}

/// Damage a player and evaluate the terminal conditions.
///
/// Returns true if the game just ended (resolution must stop).
fn hit_player(
    state: &mut GameState,
    target: PlayerId,
    amount: i32,
    kind: PlayerHit,
    events: &mut Vec<GameEvent>,
) -> bool {
    state.players[target].take_damage(amount);
    events.push(match kind {
        PlayerHit::Direct => GameEvent::DirectHit { target, amount },
        PlayerHit::Trample => GameEvent::Trample { target, amount },
    });

    let target_down = state.player(target).is_defeated();
    let opponent_down = state.player(target.opponent()).is_defeated();
    if target_down && opponent_down {
        state.set_outcome(GameOutcome::Tie);
        events.push(GameEvent::Tie);
        true
    } else if target_down {
        let winner = target.opponent();
        state.set_outcome(GameOutcome::Winner(winner));
        events.push(GameEvent::PlayerDefeated { winner });
        true
    } else {
        false
    }
}

/// Resolve one blow from `striker` onto `target`.
///
/// `damage` is the striker's snapshot for this lane; Brutal grows it in
/// place so only a *later* blow by the same creature sees the increase.
fn strike(
    state: &mut GameState,
    striker: EntityId,
    target: EntityId,
    damage: &mut i32,
    striker_owner: PlayerId,
    target_owner: PlayerId,
    events: &mut Vec<GameEvent>,
) -> BlowOutcome {
    let Some(striker_keywords) = state.creature(striker).map(|c| c.keywords) else {
        return BlowOutcome::TargetSurvived;
    };
    let (hp_before, died) = match state.creature_mut(target) {
        Some(t) => {
            let hp = t.health;
            t.take_damage(*damage);
            (hp, t.is_dead())
        }
        None => return BlowOutcome::TargetSurvived,
    };

    if striker_keywords.contains(Keyword::Brutal) {
        if died {
            let overkill = *damage - hp_before;
            if overkill > 0
                && hit_player(state, target_owner, overkill, PlayerHit::Trample, events)
            {
                return BlowOutcome::GameOver;
            }
        }
        *damage += 1;
        events.push(GameEvent::Brutal { creature: striker });
    }

    if !died {
        if striker_keywords.contains(Keyword::Poisoned) {
            if let Some(t) = state.creature_mut(target) {
                t.grant(Keyword::Poisoned);
            }
            events.push(GameEvent::PoisonSpread { target });
        }
        if striker_keywords.contains(Keyword::Venomous) {
            if let Some(t) = state.creature_mut(target) {
                t.grant(Keyword::Poisoned);
            }
            events.push(GameEvent::VenomApplied { target });
        }
    }

    if striker_keywords.contains(Keyword::Lifesteal) {
        state.players[striker_owner].heal(*damage);
        events.push(GameEvent::Lifesteal {
            player: striker_owner,
            amount: *damage,
        });
    }

    if died {
        BlowOutcome::TargetDied
    } else {
        BlowOutcome::TargetSurvived
    }
}

/// Creature-vs-creature combat in one lane.
///
/// Returns true if the game ended mid-exchange.
fn resolve_exchange(
    state: &mut GameState,
    lane: usize,
    roles: RoleAssignment,
    atk_entity: EntityId,
    def_entity: EntityId,
    events: &mut Vec<GameEvent>,
) -> bool {
    let (mut atk_dmg, atk_first) = match state.creature(atk_entity) {
        Some(c) => (c.attack, c.has(Keyword::FirstStrike)),
        None => return false,
    };
    let (mut def_dmg, def_first) = match state.creature(def_entity) {
        Some(c) => (c.attack, c.has(Keyword::FirstStrike)),
        None => return false,
    };

    events.push(GameEvent::Fight { lane });

    if atk_first != def_first {
        events.push(GameEvent::FirstStrike);

        let outcome = if atk_first {
            strike(
                state, atk_entity, def_entity, &mut atk_dmg, roles.attacker, roles.defender, events,
            )
        } else {
            strike(
                state, def_entity, atk_entity, &mut def_dmg, roles.defender, roles.attacker, events,
            )
        };
        match outcome {
            BlowOutcome::GameOver => return true,
            // A killed target never strikes back.
            BlowOutcome::TargetDied => return false,
            BlowOutcome::TargetSurvived => {}
        }

        let retaliation = if atk_first {
            strike(
                state, def_entity, atk_entity, &mut def_dmg, roles.defender, roles.attacker, events,
            )
        } else {
            strike(
                state, atk_entity, def_entity, &mut atk_dmg, roles.attacker, roles.defender, events,
            )
        };
        matches!(retaliation, BlowOutcome::GameOver)
    } else {
        // Simultaneous exchange: the defender's blow lands even if the
        // attacker's blow just killed it.
        if matches!(
            strike(
                state, atk_entity, def_entity, &mut atk_dmg, roles.attacker, roles.defender, events,
            ),
            BlowOutcome::GameOver
        ) {
            return true;
        }
        matches!(
            strike(
                state, def_entity, atk_entity, &mut def_dmg, roles.defender, roles.attacker, events,
            ),
            BlowOutcome::GameOver
        )
    }
}

/// Where a battle-zone creature goes after the lanes resolve.
enum Fate {
    ReturnToField,
    Graveyard,
}

/// Post-battle zone migration: battle rows empty out, Temporary
/// creatures expire, Undying creatures climb out of the graveyard.
fn cleanup(state: &mut GameState, roles: RoleAssignment, events: &mut Vec<GameEvent>) {
    for side in [roles.attacker, roles.defender] {
        for lane in 0..SLOT_COUNT {
            let Some(entity) = state.board.battle(side).get(lane) else {
                continue;
            };
            if state.creature(entity).is_none() {
                continue;
            }
            state.board.battle_mut(side).take(lane);

            let fate = {
                let Some(creature) = state.creature_mut(entity) else {
                    continue;
                };
                if creature.is_dead() {
                    if creature.has(Keyword::Regenerate) {
                        let base_health = creature.base().health;
                        creature.health = base_health;
                        events.push(GameEvent::Regenerated { creature: entity });
                        Fate::ReturnToField
                    } else if creature.has(Keyword::Undying) {
                        creature.reset();
                        creature.strip(Keyword::Undying);
                        creature.resurrected = true;
                        events.push(GameEvent::Resurrected { creature: entity });
                        Fate::ReturnToField
                    } else {
                        Fate::Graveyard
                    }
                } else {
                    Fate::ReturnToField
                }
            };

            match fate {
                Fate::ReturnToField => place_or_bury(state, side, entity),
                Fate::Graveyard => state.players[side].add_to_graveyard(entity),
            }
        }
    }

    // Temporary buffs, clones, and revivals last a single round.
    for side in [roles.attacker, roles.defender] {
        for lane in 0..SLOT_COUNT {
            let Some(entity) = state.board.field(side).get(lane) else {
                continue;
            };
            if state.creature(entity).is_some_and(|c| c.has(Keyword::Temporary)) {
                state.board.field_mut(side).take(lane);
                state.players[side].add_to_graveyard(entity);
                events.push(GameEvent::TemporaryExpired { creature: entity });
            }
        }
    }

    // Undying creatures in the graveyard: reset and strip all of them
    // first, then place as many as the field can hold. The ones that do
    // not fit stay buried with the keyword already gone.
    for side in [roles.attacker, roles.defender] {
        let undying: Vec<EntityId> = state.players[side]
            .graveyard()
            .iter()
            .copied()
            .filter(|&e| state.creature(e).is_some_and(|c| c.has(Keyword::Undying)))
            .collect();

        for &entity in &undying {
            if let Some(creature) = state.creature_mut(entity) {
                creature.reset();
                creature.strip(Keyword::Undying);
                creature.resurrected = true;
            }
            events.push(GameEvent::Resurrected { creature: entity });
        }
        for &entity in &undying {
            if let Some(slot) = state.board.field(side).first_empty() {
                state.board.field_mut(side).place(slot, entity);
                state.players[side].remove_from_graveyard(entity);
                if let Some(creature) = state.creature_mut(entity) {
                    creature.last_field_owner = Some(side);
                }
            }
        }
    }
}

/// Return a creature to its owner's field at the first empty slot, or
/// bury it if the field is full.
fn place_or_bury(state: &mut GameState, owner: PlayerId, entity: EntityId) {
    match state.board.field(owner).first_empty() {
        Some(slot) => {
            state.board.field_mut(owner).place(slot, entity);
            if let Some(creature) = state.creature_mut(entity) {
                creature.last_field_owner = Some(owner);
            }
        }
        None => state.players[owner].add_to_graveyard(entity),
    }
}
