//! Battle resolution engine tests.
//!
//! All games start at round 1, so Player One attacks and Player Two
//! defends unless a test advances the round.

mod common;

use common::{new_game, place, put_in_graveyard, standard_registry};
use lanecast::{
    resolve_battle, GameEvent, GameOutcome, Keyword, PlayerId, ZoneKind, SLOT_COUNT,
};

#[test]
fn direct_hit_damages_defender_by_current_attack() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let grunt = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "GRUNT");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::Two).health(), 28);
    assert_eq!(state.player(PlayerId::One).health(), 30);
    assert!(events.contains(&GameEvent::DirectHit {
        target: PlayerId::Two,
        amount: 2
    }));
    // The creature is unchanged and returns to its owner's field.
    let creature = state.creature(grunt).unwrap();
    assert_eq!(creature.health, 2);
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(grunt));
    assert!(state.board.battle(PlayerId::One).is_empty());
}

#[test]
fn unopposed_defender_hits_attacker() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 3, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::One).health(), 20);
    assert!(events.contains(&GameEvent::DirectHit {
        target: PlayerId::One,
        amount: 10
    }));
}

#[test]
fn parked_field_creature_blocks_defender_direct_hit() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    // The attacker left a creature on the field without moving it to
    // battle; the lane resolves with no effect at all.
    place(&mut state, &registry, PlayerId::One, ZoneKind::Field, 2, "GRUNT");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 2, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::One).health(), 30);
    assert_eq!(state.player(PlayerId::Two).health(), 30);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::DirectHit { .. })));
}

#[test]
fn brutal_overkill_tramples_the_player() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    // 5 attack, Brutal, into a 3-health creature: 2 trample damage.
    let brute = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "BRUTE");
    let victim = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "VICTM");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::Two).health(), 28);
    assert!(events.contains(&GameEvent::Trample {
        target: PlayerId::Two,
        amount: 2
    }));
    assert_eq!(state.player(PlayerId::Two).graveyard(), &[victim]);
    // The brute took the 0-attack retaliation and returned to the field.
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(brute));
}

#[test]
fn brutal_increment_feeds_lifesteal() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    // Brutal + Lifesteal, 5 attack, killing a 3-health target: the
    // blow's damage grows to 6 before Lifesteal applies.
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "REAPR");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "VICTM");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::Two).health(), 28);
    assert_eq!(state.player(PlayerId::One).health(), 36);
    assert!(events.contains(&GameEvent::Lifesteal {
        player: PlayerId::One,
        amount: 6
    }));
}

#[test]
fn first_strike_kill_suppresses_retaliation() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let first = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "FIRST");
    let heavy = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(events.contains(&GameEvent::FirstStrike));
    // The first striker is untouched; the 10-attack target never swung.
    assert_eq!(state.creature(first).unwrap().health, 5);
    assert!(state.creature(heavy).unwrap().is_dead());
    assert_eq!(state.player(PlayerId::Two).graveyard(), &[heavy]);
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(first));
}

#[test]
fn first_strike_survivor_retaliates_with_snapshot() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let first = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "FIRST");
    let wall = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "WALLL");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    // 20-health wall survives the 10-damage first strike and hits back.
    assert_eq!(state.creature(wall).unwrap().health, 10);
    assert_eq!(state.creature(first).unwrap().health, 3);
}

#[test]
fn defending_first_striker_with_brutal_tramples() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    // Defender's BLADE (5 attack, Brutal, First Strike) kills the
    // attacking 2-health BRUTE outright: 3 overkill, no retaliation.
    let brute = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "BRUTE");
    let blade = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "BLADE");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::One).health(), 27);
    assert!(events.contains(&GameEvent::Trample {
        target: PlayerId::One,
        amount: 3
    }));
    assert_eq!(state.creature(blade).unwrap().health, 3);
    assert_eq!(state.player(PlayerId::One).graveyard(), &[brute]);
}

#[test]
fn simultaneous_exchange_lets_dying_defender_retaliate() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let heavy = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "HEAVY");
    let grunt = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "GRUNT");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    // The grunt dies but its pre-combat 2 attack still lands.
    assert!(state.creature(grunt).unwrap().is_dead());
    assert_eq!(state.creature(heavy).unwrap().health, 3);
    assert_eq!(state.player(PlayerId::Two).graveyard(), &[grunt]);
}

#[test]
fn lifesteal_applies_on_killing_blow() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let leech = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "LEECH");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "FLEET");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.player(PlayerId::One).health(), 33);
    // The dying 2-attack target still retaliated in the exchange.
    assert_eq!(state.creature(leech).unwrap().health, 1);
}

#[test]
fn venomous_and_poisoned_strikers_poison_survivors() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "SNAKE");
    let wall_a = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "WALLL");
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 1, "TOXIC");
    let wall_b = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 1, "WALLL");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(state.creature(wall_a).unwrap().has(Keyword::Poisoned));
    // A striker that merely carries Poisoned spreads it too.
    assert!(state.creature(wall_b).unwrap().has(Keyword::Poisoned));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::VenomApplied { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::PoisonSpread { .. })));
}

#[test]
fn dead_creature_is_not_poisoned() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    // A first striker kills the venomous snake before it ever swings.
    let blade = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "BLADE");
    let snake = place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "SNAKE");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    // BLADE first-strikes the 3-health snake dead; no poison lands.
    assert!(state.creature(snake).unwrap().is_dead());
    assert!(!state.creature(blade).unwrap().has(Keyword::Poisoned));
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::VenomApplied { .. })));
}

#[test]
fn undying_creature_returns_reset_and_stripped() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let phoenix = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "PHOEN");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::Resurrected { .. })));
    let creature = state.creature(phoenix).unwrap();
    assert_eq!(creature.health, 2);
    assert_eq!(creature.attack, 2);
    assert!(!creature.has(Keyword::Undying));
    assert!(creature.resurrected);
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(phoenix));
    assert!(state.player(PlayerId::One).graveyard().is_empty());
}

#[test]
fn undying_with_full_field_goes_to_graveyard_stripped() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    for slot in 0..SLOT_COUNT {
        place(&mut state, &registry, PlayerId::One, ZoneKind::Field, slot, "GRUNT");
    }
    let phoenix = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "PHOEN");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(state.player(PlayerId::One).graveyard().contains(&phoenix));
    assert!(!state.creature(phoenix).unwrap().has(Keyword::Undying));
}

#[test]
fn undying_in_graveyard_climbs_back_to_the_field() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let buried = put_in_graveyard(&mut state, &registry, PlayerId::One, "PHOEN");
    state.creature_mut(buried).unwrap().take_damage(5);

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(state.player(PlayerId::One).graveyard().is_empty());
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(buried));
    let creature = state.creature(buried).unwrap();
    assert_eq!(creature.health, 2);
    assert!(!creature.has(Keyword::Undying));
}

#[test]
fn graveyard_undying_without_room_stays_buried_but_stripped() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    for slot in 0..SLOT_COUNT {
        place(&mut state, &registry, PlayerId::One, ZoneKind::Field, slot, "GRUNT");
    }
    let buried = put_in_graveyard(&mut state, &registry, PlayerId::One, "PHOEN");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(state.player(PlayerId::One).graveyard().contains(&buried));
    assert!(!state.creature(buried).unwrap().has(Keyword::Undying));
}

#[test]
fn regenerate_heals_to_base_and_survives() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let troll = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "TROLL");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::Regenerated { .. })));
    let creature = state.creature(troll).unwrap();
    assert_eq!(creature.health, 5);
    assert!(creature.has(Keyword::Regenerate));
    assert_eq!(state.board.field(PlayerId::One).get(0), Some(troll));
    assert!(state.player(PlayerId::One).graveyard().is_empty());
}

#[test]
fn temporary_creatures_are_swept_from_the_field() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    let ghost = place(&mut state, &registry, PlayerId::Two, ZoneKind::Field, 4, "GHOST");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert!(events.contains(&GameEvent::TemporaryExpired { creature: ghost }));
    assert!(state.board.field(PlayerId::Two).is_empty());
    assert_eq!(state.player(PlayerId::Two).graveyard(), &[ghost]);
}

#[test]
fn lethal_direct_hit_stops_the_pass() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    state.players[PlayerId::Two].take_damage(28); // 2 health left
    let grunt = place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "GRUNT");
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 1, "HEAVY");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.outcome(), Some(GameOutcome::Winner(PlayerId::One)));
    assert!(events.contains(&GameEvent::PlayerDefeated {
        winner: PlayerId::One
    }));
    // Only lane 0 was processed, and cleanup never ran.
    let hits = events
        .iter()
        .filter(|e| matches!(e, GameEvent::DirectHit { .. }))
        .count();
    assert_eq!(hits, 1);
    assert!(!events.contains(&GameEvent::BattleEnded));
    assert_eq!(state.board.battle(PlayerId::One).get(0), Some(grunt));
}

#[test]
fn lethal_trample_stops_the_pass() {
    let registry = standard_registry();
    let mut state = new_game(&registry);
    state.players[PlayerId::Two].take_damage(29); // 1 health left
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 0, "BRUTE");
    place(&mut state, &registry, PlayerId::Two, ZoneKind::Battle, 0, "VICTM");
    place(&mut state, &registry, PlayerId::One, ZoneKind::Battle, 1, "GRUNT");

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(state.outcome(), Some(GameOutcome::Winner(PlayerId::One)));
    assert_eq!(state.player(PlayerId::Two).health(), 0);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::DirectHit { .. })));
}

#[test]
fn empty_board_still_emits_battle_frame() {
    let registry = standard_registry();
    let mut state = new_game(&registry);

    let mut events = Vec::new();
    resolve_battle(&mut state, &mut events);

    assert_eq!(events.first(), Some(&GameEvent::BattleBegan));
    assert!(events.contains(&GameEvent::BattleEnded));
    let lanes = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LaneStart { .. }))
        .count();
    assert_eq!(lanes, SLOT_COUNT);
    assert!(state.outcome().is_none());
}
