//! Zones: the 7-slot rows and the board that aggregates them.

pub mod board;
pub mod zone;

pub use board::{Board, Side, ZoneKind};
pub use zone::{Zone, SLOT_COUNT};
