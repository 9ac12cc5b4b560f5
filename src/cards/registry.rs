//! Card registry for prototype lookup.
//!
//! The `CardRegistry` owns every card definition and indexes them by
//! uppercase code. Lookups are case-insensitive. Definitions are never
//! handed out mutably: play always goes through a deep copy
//! (`GameState::spawn_card`).

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind, ManaCost};

/// Registry of card definitions.
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    defs: Vec<CardDefinition>,
    by_code: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition and return its assigned id.
    ///
    /// The code is case-normalized. Panics if the code is already
    /// registered.
    pub fn register(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        cost: ManaCost,
        kind: CardKind,
    ) -> CardId {
        let code = code.into().to_uppercase();
        if self.by_code.contains_key(&code) {
            panic!("Card code {:?} already registered", code);
        }

        let id = CardId::new(self.defs.len() as u32);
        self.by_code.insert(code.clone(), id);
        self.defs.push(CardDefinition {
            id,
            code,
            name: name.into(),
            cost,
            kind,
        });
        id
    }

    /// Resolve a code (case-insensitive) to an id.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<CardId> {
        self.by_code.get(&code.to_uppercase()).copied()
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.defs.get(id.raw() as usize)
    }

    /// Get a definition by code (case-insensitive).
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&CardDefinition> {
        self.lookup(code).and_then(|id| self.get(id))
    }

    /// Whether a code is registered.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(&code.to_uppercase())
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.defs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::{CreatureStats, SpellEffect};
    use crate::cards::keywords::KeywordSet;

    fn creature_kind() -> CardKind {
        CardKind::Creature(CreatureStats {
            attack: 1,
            health: 1,
            keywords: KeywordSet::empty(),
        })
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        let id = registry.register("WOLFF", "Wolf", ManaCost::Fixed(2), creature_kind());

        let def = registry.get(id).unwrap();
        assert_eq!(def.code, "WOLFF");
        assert_eq!(def.name, "Wolf");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = CardRegistry::new();
        let id = registry.register("wolff", "Wolf", ManaCost::Fixed(2), creature_kind());

        assert_eq!(registry.lookup("WOLFF"), Some(id));
        assert_eq!(registry.lookup("wolff"), Some(id));
        assert_eq!(registry.lookup("WoLfF"), Some(id));
        assert!(registry.contains_code("wolff"));
        assert_eq!(registry.lookup("OTHER"), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_code_panics() {
        let mut registry = CardRegistry::new();
        registry.register("WOLFF", "Wolf", ManaCost::Fixed(2), creature_kind());
        registry.register("wolff", "Other Wolf", ManaCost::Fixed(3), creature_kind());
    }

    #[test]
    fn test_get_by_code() {
        let mut registry = CardRegistry::new();
        registry.register("SHOCK", "Shock", ManaCost::Fixed(1), CardKind::Spell(SpellEffect::Shock));

        let def = registry.get_by_code("shock").unwrap();
        assert_eq!(def.as_spell(), Some(SpellEffect::Shock));
        assert!(registry.get_by_code("MISSING").is_none());
    }

    #[test]
    fn test_iteration_order() {
        let mut registry = CardRegistry::new();
        registry.register("AAAAA", "A", ManaCost::Fixed(0), creature_kind());
        registry.register("BBBBB", "B", ManaCost::Fixed(0), creature_kind());

        let codes: Vec<_> = registry.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["AAAAA", "BBBBB"]);
    }
}
