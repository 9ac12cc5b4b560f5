//! Spell effect resolution.
//!
//! The command layer validates everything (hand ownership, argument
//! shape, target occupancy, affordability) and then calls `cast` with a
//! resolved `SpellEffect` tag and the final cost. Dispatch is a single
//! match on the tag; no string comparison happens at cast time.
//!
//! Creatures killed by spell damage go to the graveyard of the player
//! whose zone they were in.

use crate::cards::{CardRegistry, Keyword, ManaCost, SpellEffect};
use crate::core::{EntityId, GameState, PlayerId};
use crate::events::GameEvent;
use crate::zones::{ZoneKind, SLOT_COUNT};

/// A validated spell target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellTargetRef {
    /// A board slot (own or opponent, field or battle).
    Slot {
        player: PlayerId,
        kind: ZoneKind,
        slot: usize,
    },
    /// A creature in a graveyard.
    Graveyard { player: PlayerId, entity: EntityId },
}

/// The creature a target refers to, if the slot is occupied.
#[must_use]
pub fn resolve_target(state: &GameState, target: SpellTargetRef) -> Option<EntityId> {
    match target {
        SpellTargetRef::Slot { player, kind, slot } => state
            .board
            .zone(player, kind)
            .get(slot)
            .filter(|&e| state.creature(e).is_some()),
        SpellTargetRef::Graveyard { entity, .. } => Some(entity),
    }
}

/// The mana cost of casting, with X costs computed from the target.
#[must_use]
pub fn spell_cost(
    state: &GameState,
    registry: &CardRegistry,
    effect: SpellEffect,
    base: ManaCost,
    target: Option<SpellTargetRef>,
) -> u32 {
    if let ManaCost::Fixed(cost) = base {
        return cost;
    }
    let target_cost = target
        .and_then(|t| resolve_target(state, t))
        .and_then(|e| state.card(e))
        .and_then(|card| registry.get(card.def))
        .and_then(|def| def.cost.fixed())
        .unwrap_or(0);
    match effect {
        SpellEffect::Curse => target_cost + 1,
        SpellEffect::CloneTarget | SpellEffect::Memory => (target_cost + 1) / 2,
        _ => 0,
    }
}

/// Apply a validated spell and consume it.
///
/// Removes the spell from the caster's hand, despawns it, spends the
/// mana, and permanently disables the caster's redraw.
pub fn cast(
    state: &mut GameState,
    registry: &CardRegistry,
    caster: PlayerId,
    spell_entity: EntityId,
    effect: SpellEffect,
    cost: u32,
    target: Option<SpellTargetRef>,
    events: &mut Vec<GameEvent>,
) {
    let code = state
        .card(spell_entity)
        .and_then(|card| registry.get(card.def))
        .map(|def| def.code.clone())
        .unwrap_or_default();

    match effect {
        SpellEffect::Battlecry => battlecry(state, caster),
        SpellEffect::Meteor => sweep_damage(state, PlayerId::BOTH.as_slice(), 3),
        SpellEffect::Fireball => sweep_damage(state, &[caster.opponent()], 2),
        SpellEffect::Shock => {
            if let Some(SpellTargetRef::Slot { player, kind, slot }) = target {
                damage_slot(state, player, kind, slot, 1);
            }
        }
        SpellEffect::Mobilize => {
            modify_target(state, target, |c| {
                c.grant(Keyword::Haste);
                c.attack += 1;
            });
        }
        SpellEffect::RapidRush => {
            modify_target(state, target, |c| {
                c.grant(Keyword::FirstStrike);
                c.grant(Keyword::Temporary);
                c.attack += 2;
            });
        }
        SpellEffect::Shield => {
            modify_target(state, target, |c| c.heal(2));
        }
        SpellEffect::Amputate => {
            modify_target(state, target, |c| {
                if let Some(first) = c.keywords.first() {
                    c.strip(first);
                }
            });
        }
        SpellEffect::FinalPush => {
            modify_target(state, target, |c| {
                c.grant(Keyword::Brutal);
                c.grant(Keyword::Haste);
                c.grant(Keyword::Temporary);
                c.attack += 3;
            });
        }
        SpellEffect::Loyalty => {
            modify_target(state, target, |c| {
                c.grant(Keyword::Haste);
                c.heal(1);
            });
        }
        SpellEffect::Zombify => {
            modify_target(state, target, |c| {
                c.grant(Keyword::Venomous);
                c.grant(Keyword::Undying);
            });
        }
        SpellEffect::BloodPact => {
            modify_target(state, target, |c| {
                c.grant(Keyword::Brutal);
                c.grant(Keyword::Lifesteal);
                // Health halves, rounding up.
                c.health = (c.health + 1) / 2;
            });
        }
        SpellEffect::Curse => {
            modify_target(state, target, |c| c.grant(Keyword::Temporary));
        }
        SpellEffect::CloneTarget => clone_target(state, registry, caster, target),
        SpellEffect::Memory => memory(state, registry, caster, target),
        SpellEffect::Revive => revive(state, registry, caster, target),
    }

    state.players[caster].remove_from_hand(spell_entity);
    state.despawn_card(spell_entity);
    state.players[caster].spend_mana(cost);
    state.players[caster].disable_redraw();
    events.push(GameEvent::SpellCast { code });
}

/// Own creatures in battle and field rows gain Haste, Temporary, and
/// +3 attack.
fn battlecry(state: &mut GameState, caster: PlayerId) {
    for kind in [ZoneKind::Battle, ZoneKind::Field] {
        for slot in 0..SLOT_COUNT {
            let Some(entity) = state.board.zone(caster, kind).get(slot) else {
                continue;
            };
            if let Some(creature) = state.creature_mut(entity) {
                creature.grant(Keyword::Haste);
                creature.grant(Keyword::Temporary);
                creature.attack += 3;
            }
        }
    }
}

/// Damage every creature in both zones of each listed player.
fn sweep_damage(state: &mut GameState, players: &[PlayerId], amount: i32) {
    for &player in players {
        for kind in [ZoneKind::Battle, ZoneKind::Field] {
            for slot in 0..SLOT_COUNT {
                damage_slot(state, player, kind, slot, amount);
            }
        }
    }
}

/// Damage one slot's creature; a death empties the slot and buries the
/// creature in the zone owner's graveyard.
fn damage_slot(state: &mut GameState, player: PlayerId, kind: ZoneKind, slot: usize, amount: i32) {
    let Some(entity) = state.board.zone(player, kind).get(slot) else {
        return;
    };
    let died = match state.creature_mut(entity) {
        Some(creature) => {
            creature.take_damage(amount);
            creature.is_dead()
        }
        None => return,
    };
    if died {
        state.board.zone_mut(player, kind).take(slot);
        state.players[player].add_to_graveyard(entity);
    }
}

/// Apply a mutation to the targeted creature.
fn modify_target(
    state: &mut GameState,
    target: Option<SpellTargetRef>,
    mutate: impl FnOnce(&mut crate::cards::CreatureState),
) {
    let Some(entity) = target.and_then(|t| resolve_target(state, t)) else {
        return;
    };
    if let Some(creature) = state.creature_mut(entity) {
        mutate(creature);
    }
}

/// A fresh copy of the target's prototype at the caster's first empty
/// field slot: current stats copied, base keywords plus Haste and
/// Temporary, summoned this round. Fizzles (without refund) if the
/// field is full.
fn clone_target(
    state: &mut GameState,
    registry: &CardRegistry,
    caster: PlayerId,
    target: Option<SpellTargetRef>,
) {
    let Some(entity) = target.and_then(|t| resolve_target(state, t)) else {
        return;
    };
    let Some(slot) = state.board.field(caster).first_empty() else {
        return;
    };
    let Some(def) = state.card(entity).and_then(|card| registry.get(card.def)) else {
        return;
    };
    let (attack, health) = match state.creature(entity) {
        Some(c) => (c.attack, c.health),
        None => return,
    };

    let round = state.round();
    let clone = state.spawn_card(def);
    if let Some(creature) = state.creature_mut(clone) {
        creature.attack = attack;
        creature.health = health;
        creature.summoned_round = Some(round);
        creature.grant(Keyword::Haste);
        creature.grant(Keyword::Temporary);
        creature.last_field_owner = Some(caster);
    }
    state.board.field_mut(caster).place(slot, clone);
}

/// A fresh, reset copy of a graveyard creature with Haste and Temporary
/// at the caster's first empty field slot. The graveyard keeps the
/// original; no summoning round is stamped, so the copy can battle
/// immediately.
fn memory(
    state: &mut GameState,
    registry: &CardRegistry,
    caster: PlayerId,
    target: Option<SpellTargetRef>,
) {
    let Some(entity) = target.and_then(|t| resolve_target(state, t)) else {
        return;
    };
    let Some(slot) = state.board.field(caster).first_empty() else {
        return;
    };
    let Some(def) = state.card(entity).and_then(|card| registry.get(card.def)) else {
        return;
    };

    let revived = state.spawn_card(def);
    if let Some(creature) = state.creature_mut(revived) {
        creature.grant(Keyword::Haste);
        creature.grant(Keyword::Temporary);
        creature.last_field_owner = Some(caster);
    }
    state.board.field_mut(caster).place(slot, revived);
}

/// Remove a creature from the caster's graveyard and put a fresh, reset
/// copy of it into the caster's hand.
fn revive(
    state: &mut GameState,
    registry: &CardRegistry,
    caster: PlayerId,
    target: Option<SpellTargetRef>,
) {
    let Some(SpellTargetRef::Graveyard { entity, .. }) = target else {
        return;
    };
    let Some(def) = state.card(entity).and_then(|card| registry.get(card.def)) else {
        return;
    };

    state.players[caster].remove_from_graveyard(entity);
    state.despawn_card(entity);

    let fresh = state.spawn_card(def);
    state.players[caster].add_to_hand(fresh);
}
