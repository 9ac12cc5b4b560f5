//! Entity identification.
//!
//! Every card instance in a game has a unique `EntityId`. Containers
//! (zone slots, hands, decks, graveyards) never hold card data directly;
//! they hold `EntityId` keys into the game state's instance table, so
//! moving a card between containers is re-keying, never copying.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Allocated sequentially by `GameState::spawn_card`. An id stays valid
/// for the lifetime of the instance, across any number of zone moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
