//! Discrete named events emitted by the core.
//!
//! The engine and controller never format or print text; they append
//! `GameEvent`s to a log, and the presentation layer maps each event to
//! a message key (`messages::event_key`) or richer output. Event order
//! is the order things happened.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Something observable that happened in the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Battle resolution ===
    /// The battle phase started.
    BattleBegan,
    /// Lane processing reached this index.
    LaneStart { lane: usize },
    /// Two creatures met in a lane.
    Fight { lane: usize },
    /// A lone first striker got its blow in before the exchange.
    FirstStrike,
    /// An unopposed creature hit a player directly.
    DirectHit { target: PlayerId, amount: i32 },
    /// Brutal overkill damage spilled onto a player.
    Trample { target: PlayerId, amount: i32 },
    /// A Brutal creature's attack grew after its blow.
    Brutal { creature: EntityId },
    /// A Lifesteal strike healed its controller.
    Lifesteal { player: PlayerId, amount: i32 },
    /// A Poisoned striker spread Poisoned to its target.
    PoisonSpread { target: EntityId },
    /// A Venomous striker applied Poisoned to its target.
    VenomApplied { target: EntityId },
    /// All lanes resolved; cleanup follows.
    BattleEnded,

    // === Cleanup and upkeep ===
    /// A Regenerate creature healed back to base health.
    Regenerated { creature: EntityId },
    /// An Undying creature came back, reset and stripped.
    Resurrected { creature: EntityId },
    /// A Temporary creature was swept to the graveyard.
    TemporaryExpired { creature: EntityId },
    /// Poison ticked 1 damage at a turn-end boundary.
    PoisonTick { creature: EntityId },

    // === Commands ===
    /// A creature entered the field from the hand.
    CreatureSummoned { code: String },
    /// A creature used Haste to battle in its summoning round.
    HasteUsed { creature: EntityId },
    /// A Challenger dragged an opposing parked creature into the lane.
    ChallengerDragged { creature: EntityId },
    /// A spell resolved.
    SpellCast { code: String },

    // === Terminal ===
    /// A player's deck was empty at a draw.
    DeckExhausted { player: PlayerId },
    /// The round limit was exceeded.
    RoundLimit,
    /// The game ended with a winner.
    PlayerDefeated { winner: PlayerId },
    /// The game ended in a tie.
    Tie,
}
