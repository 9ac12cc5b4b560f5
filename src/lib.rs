//! # lanecast
//!
//! A two-player, lane-based card duel engine.
//!
//! Players summon creatures onto a 7-slot field, move them into battle
//! lanes, cast spells, and end their turns; when both have, the battle
//! resolution engine walks the lanes, resolves creature combat with its
//! keyword interactions, applies direct hits, and migrates creatures
//! between zones. Win conditions: health, deck exhaustion, or the round
//! limit.
//!
//! ## Design
//!
//! - **Arena storage**: card instances live in one flat table keyed by
//!   `EntityId`; zones, hands, decks, and graveyards hold keys, so a
//!   card "moves" by re-keying and is only ever duplicated when a
//!   prototype is deep-copied into play.
//! - **Closed card union**: `CardKind::Creature | Spell`, dispatched by
//!   pattern matching; spell behavior is an enum tag resolved from the
//!   card code at load time.
//! - **Explicit roles**: attacker/defender are a pure function of the
//!   round number (`RoleAssignment::for_round`), recomputed wherever
//!   needed.
//! - **Events out, no I/O in**: the core emits `GameEvent`s; the
//!   command layer and message table turn them into text.
//!
//! ## Modules
//!
//! - `core`: entity ids, players, roles, setup config, game state
//! - `cards`: keywords, definitions, instances, registry, file loading
//! - `zones`: the 7-slot `Zone` and the `Board`
//! - `battle`: battle resolution engine and round/turn controller
//! - `effects`: spell effect resolution
//! - `commands`: the command layer (all user-input validation)
//! - `events`, `messages`, `render`: the presentation boundary

pub mod battle;
pub mod cards;
pub mod commands;
pub mod core;
pub mod effects;
pub mod events;
pub mod messages;
pub mod render;
pub mod zones;

pub use crate::core::{
    append_result, ConfigError, EntityId, GameOutcome, GameSetup, GameState, PlayerId, PlayerPair,
    PlayerState, Role, RoleAssignment, OPENING_HAND,
};

pub use crate::cards::{
    load_registry, CardDefinition, CardForm, CardId, CardInstance, CardKind, CardRegistry,
    CreatureState, CreatureStats, Keyword, KeywordSet, ManaCost, SpellCategory, SpellEffect,
};

pub use crate::zones::{Board, Zone, ZoneKind, SLOT_COUNT};

pub use crate::battle::{check_initial_decks, end_turn, resolve_battle};

pub use crate::effects::{cast, resolve_target, spell_cost, SpellTargetRef};

pub use crate::events::GameEvent;

pub use crate::messages::{event_key, MessageTable};

pub use crate::commands::{Session, SessionStatus};
