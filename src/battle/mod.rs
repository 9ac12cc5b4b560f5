//! Battle resolution and round control.

pub mod engine;
pub mod round;

pub use engine::resolve_battle;
pub use round::{check_initial_decks, end_turn};
