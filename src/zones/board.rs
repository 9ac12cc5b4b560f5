//! The board: four zones, two per player.
//!
//! Each player owns a field row (where creatures are summoned and parked)
//! and a battle row (where they fight). Attacker/defender views are not
//! stored here; role-relative access goes through `RoleAssignment`, which
//! is recomputed per round.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerPair};

use super::zone::Zone;

/// Which of a player's two zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Field,
    Battle,
}

impl ZoneKind {
    /// The marker letter used in slot labels and board art.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            ZoneKind::Field => 'F',
            ZoneKind::Battle => 'B',
        }
    }
}

/// One player's half of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub field: Zone,
    pub battle: Zone,
}

/// All four zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    sides: PlayerPair<Side>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sides: PlayerPair::new(|_| Side::default()),
        }
    }

    /// A player's field zone.
    #[must_use]
    pub fn field(&self, player: PlayerId) -> &Zone {
        &self.sides[player].field
    }

    /// A player's field zone, mutably.
    pub fn field_mut(&mut self, player: PlayerId) -> &mut Zone {
        &mut self.sides[player].field
    }

    /// A player's battle zone.
    #[must_use]
    pub fn battle(&self, player: PlayerId) -> &Zone {
        &self.sides[player].battle
    }

    /// A player's battle zone, mutably.
    pub fn battle_mut(&mut self, player: PlayerId) -> &mut Zone {
        &mut self.sides[player].battle
    }

    /// A player's zone by kind.
    #[must_use]
    pub fn zone(&self, player: PlayerId, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Field => self.field(player),
            ZoneKind::Battle => self.battle(player),
        }
    }

    /// A player's zone by kind, mutably.
    pub fn zone_mut(&mut self, player: PlayerId, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Field => self.field_mut(player),
            ZoneKind::Battle => self.battle_mut(player),
        }
    }
}
