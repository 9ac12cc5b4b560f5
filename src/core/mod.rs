//! Core types: entities, players, roles, setup, and game state.

pub mod config;
pub mod entity;
pub mod player;
pub mod roles;
pub mod state;

pub use config::{append_result, ConfigError, GameSetup};
pub use entity::EntityId;
pub use player::{PlayerId, PlayerPair, PlayerState};
pub use roles::{Role, RoleAssignment};
pub use state::{GameOutcome, GameState, OPENING_HAND};
