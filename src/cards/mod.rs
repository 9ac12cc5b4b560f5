//! Cards: keywords, prototypes, live instances, registry, file loading.

pub mod definition;
pub mod instance;
pub mod keywords;
pub mod loader;
pub mod registry;

pub use definition::{
    CardDefinition, CardId, CardKind, CreatureStats, ManaCost, SpellCategory, SpellEffect,
};
pub use instance::{CardForm, CardInstance, CreatureState};
pub use keywords::{Keyword, KeywordSet};
pub use loader::{load_registry, parse_creature_cards, parse_spell_cards};
pub use registry::CardRegistry;
