//! Spell effect application.

pub mod spells;

pub use spells::{cast, resolve_target, spell_cost, SpellTargetRef};
