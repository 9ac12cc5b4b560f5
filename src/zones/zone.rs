//! A fixed 7-slot zone.
//!
//! Each of the four board zones addresses its cards by slot index 0..7.
//! A zone exclusively owns the entity keys placed in it until they are
//! taken out; the same key never sits in two containers at once.
//!
//! Out-of-range indices are treated as permanently empty slots: reads
//! return `None`, writes do nothing. Callers are expected to stay in
//! range, so there is no error path.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;

/// Slots per zone; field and battle lanes line up by index.
pub const SLOT_COUNT: usize = 7;

/// One 7-slot zone (a field or battle row).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    slots: [Option<EntityId>; SLOT_COUNT],
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card in a slot, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<EntityId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Whether a slot holds a card.
    #[must_use]
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Place a card into an empty slot.
    ///
    /// Returns false (without placing) if the slot is out of range or
    /// already occupied.
    pub fn place(&mut self, slot: usize, entity: EntityId) -> bool {
        match self.slots.get_mut(slot) {
            Some(cell) if cell.is_none() => {
                *cell = Some(entity);
                true
            }
            _ => false,
        }
    }

    /// Take the card out of a slot, leaving it empty.
    pub fn take(&mut self, slot: usize) -> Option<EntityId> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// First empty slot index, scanning 0 to 6.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Iterate over occupied slots as (index, entity) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, EntityId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i, e)))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|e| e.is_some()).count()
    }

    /// Whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}
