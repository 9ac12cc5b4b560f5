//! Shared fixtures for integration tests.

#![allow(dead_code)]

use lanecast::{
    CardKind, CardRegistry, CreatureStats, EntityId, GameSetup, GameState, Keyword, ManaCost,
    PlayerId, PlayerPair, SpellEffect, ZoneKind,
};

/// A registry covering every keyword and spell the tests need.
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();

    let mut creature = |code: &str, cost: u32, attack: i32, health: i32, keywords: &[Keyword]| {
        registry.register(
            code,
            code,
            ManaCost::Fixed(cost),
            CardKind::Creature(CreatureStats {
                attack,
                health,
                keywords: keywords.iter().copied().collect(),
            }),
        );
    };

    creature("GRUNT", 1, 2, 2, &[]);
    creature("VICTM", 1, 0, 3, &[]);
    creature("HEAVY", 4, 10, 5, &[]);
    creature("WALLL", 5, 2, 20, &[]);
    creature("TANKK", 3, 1, 8, &[]);
    creature("BRUTE", 4, 5, 2, &[Keyword::Brutal]);
    creature("FIRST", 3, 10, 5, &[Keyword::FirstStrike]);
    creature("BLADE", 5, 5, 3, &[Keyword::Brutal, Keyword::FirstStrike]);
    creature("REAPR", 5, 5, 4, &[Keyword::Brutal, Keyword::Lifesteal]);
    creature("SNAKE", 2, 1, 3, &[Keyword::Venomous]);
    creature("TOXIC", 2, 1, 3, &[Keyword::Poisoned]);
    creature("LEECH", 3, 3, 3, &[Keyword::Lifesteal]);
    creature("PHOEN", 3, 2, 2, &[Keyword::Undying]);
    creature("TROLL", 4, 2, 5, &[Keyword::Regenerate]);
    creature("FLEET", 1, 2, 1, &[Keyword::Haste]);
    creature("DARER", 2, 2, 3, &[Keyword::Challenger]);
    creature("GHOST", 2, 1, 1, &[Keyword::Temporary]);

    let spells: &[(&str, ManaCost, SpellEffect)] = &[
        ("BTLCY", ManaCost::Fixed(4), SpellEffect::Battlecry),
        ("METOR", ManaCost::Fixed(6), SpellEffect::Meteor),
        ("FIRBL", ManaCost::Fixed(4), SpellEffect::Fireball),
        ("SHOCK", ManaCost::Fixed(1), SpellEffect::Shock),
        ("MOBLZ", ManaCost::Fixed(1), SpellEffect::Mobilize),
        ("RRUSH", ManaCost::Fixed(2), SpellEffect::RapidRush),
        ("SHILD", ManaCost::Fixed(1), SpellEffect::Shield),
        ("AMPUT", ManaCost::Fixed(2), SpellEffect::Amputate),
        ("FINAL", ManaCost::Fixed(4), SpellEffect::FinalPush),
        ("LYLTY", ManaCost::Fixed(2), SpellEffect::Loyalty),
        ("ZMBFY", ManaCost::Fixed(3), SpellEffect::Zombify),
        ("BLOOD", ManaCost::Fixed(2), SpellEffect::BloodPact),
        ("CURSE", ManaCost::Variable, SpellEffect::Curse),
        ("CLONE", ManaCost::Variable, SpellEffect::CloneTarget),
        ("MEMRY", ManaCost::Variable, SpellEffect::Memory),
        ("REVIV", ManaCost::Fixed(2), SpellEffect::Revive),
    ];
    for &(code, cost, effect) in spells {
        registry.register(code, code, cost, CardKind::Spell(effect));
    }

    registry
}

/// A setup with identical decks for both players.
pub fn setup_with_deck(deck: &[&str], max_rounds: u32) -> GameSetup {
    GameSetup {
        player_health: 30,
        max_rounds,
        deck_size: deck.len(),
        mana_pool_start: 3,
        decks: PlayerPair::with_value(deck.iter().map(|s| s.to_string()).collect()),
    }
}

/// A fresh round-1 game with comfortable decks.
pub fn new_game(registry: &CardRegistry) -> GameState {
    let setup = setup_with_deck(&["GRUNT"; 20], 12);
    GameState::new(&setup, registry).expect("fixture decks are valid")
}

/// Spawn a card and put it straight into a board slot.
pub fn place(
    state: &mut GameState,
    registry: &CardRegistry,
    player: PlayerId,
    kind: ZoneKind,
    slot: usize,
    code: &str,
) -> EntityId {
    let def = registry.get_by_code(code).expect("fixture card exists");
    let entity = state.spawn_card(def);
    if let Some(creature) = state.creature_mut(entity) {
        creature.last_field_owner = Some(player);
    }
    state.board.zone_mut(player, kind).place(slot, entity);
    entity
}

/// Spawn a card into a player's hand.
pub fn put_in_hand(
    state: &mut GameState,
    registry: &CardRegistry,
    player: PlayerId,
    code: &str,
) -> EntityId {
    let def = registry.get_by_code(code).expect("fixture card exists");
    let entity = state.spawn_card(def);
    state.players[player].add_to_hand(entity);
    entity
}

/// Spawn a creature straight into a player's graveyard.
pub fn put_in_graveyard(
    state: &mut GameState,
    registry: &CardRegistry,
    player: PlayerId,
    code: &str,
) -> EntityId {
    let def = registry.get_by_code(code).expect("fixture card exists");
    let entity = state.spawn_card(def);
    state.players[player].add_to_graveyard(entity);
    entity
}
