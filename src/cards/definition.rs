//! Card definitions - static card data.
//!
//! A `CardDefinition` is a prototype: immutable, owned by the registry,
//! and only ever used as the source of a deep copy when a card enters
//! the game. Creatures and spells are a closed tagged union dispatched
//! by pattern matching.
//!
//! Spell behavior is an enumerated `SpellEffect` resolved once from the
//! card's code at load time, so no string comparison happens at cast
//! time.

use serde::{Deserialize, Serialize};

use super::keywords::KeywordSet;

/// Unique identifier for a card definition.
///
/// Identifies the card "type" (the prototype), not an instance in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card's mana cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaCost {
    /// A fixed cost.
    Fixed(u32),
    /// "X" cost, computed from the target at cast time.
    Variable,
}

impl ManaCost {
    /// The fixed cost, if this is not an X cost.
    #[must_use]
    pub const fn fixed(self) -> Option<u32> {
        match self {
            ManaCost::Fixed(n) => Some(n),
            ManaCost::Variable => None,
        }
    }
}

impl std::fmt::Display for ManaCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManaCost::Fixed(n) => write!(f, "{}", n),
            ManaCost::Variable => write!(f, "XX"),
        }
    }
}

/// How a spell acquires its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellCategory {
    /// One-time effect, no argument.
    General,
    /// Requires a board-slot argument (own or opponent, field or battle).
    Target,
    /// Requires a graveyard card argument.
    Graveyard,
}

impl SpellCategory {
    /// Name as used in spell definition files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpellCategory::General => "General",
            SpellCategory::Target => "Target",
            SpellCategory::Graveyard => "Graveyard",
        }
    }

    /// Parse a definition-file name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "General" => Some(SpellCategory::General),
            "Target" => Some(SpellCategory::Target),
            "Graveyard" => Some(SpellCategory::Graveyard),
            _ => None,
        }
    }
}

/// Enumerated spell behavior, resolved from the card code at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellEffect {
    /// Own creatures gain Haste and Temporary, +3 attack.
    Battlecry,
    /// 3 damage to every creature on the board.
    Meteor,
    /// 2 damage to every opposing creature.
    Fireball,
    /// 1 damage to the target.
    Shock,
    /// Target gains Haste, +1 attack.
    Mobilize,
    /// Target gains First Strike and Temporary, +2 attack.
    RapidRush,
    /// Target gains +2 health.
    Shield,
    /// Remove the target's alphabetically first keyword.
    Amputate,
    /// Target gains Brutal, Haste, Temporary, +3 attack.
    FinalPush,
    /// Target gains Haste, +1 health.
    Loyalty,
    /// Target gains Venomous and Undying.
    Zombify,
    /// Target gains Brutal and Lifesteal; its health halves, rounding up.
    BloodPact,
    /// Target gains Temporary. X cost: target's cost + 1.
    Curse,
    /// Summon a copy of the target with Haste and Temporary.
    /// X cost: (target's cost + 1) / 2.
    CloneTarget,
    /// Summon a reset copy of a graveyard creature with Haste and
    /// Temporary; the graveyard keeps the original.
    /// X cost: (card's cost + 1) / 2.
    Memory,
    /// Move a graveyard creature back to the hand, reset.
    Revive,
}

impl SpellEffect {
    /// Resolve the effect for a (case-normalized) card code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BTLCY" => Some(SpellEffect::Battlecry),
            "METOR" => Some(SpellEffect::Meteor),
            "FIRBL" => Some(SpellEffect::Fireball),
            "SHOCK" => Some(SpellEffect::Shock),
            "MOBLZ" => Some(SpellEffect::Mobilize),
            "RRUSH" => Some(SpellEffect::RapidRush),
            "SHILD" => Some(SpellEffect::Shield),
            "AMPUT" => Some(SpellEffect::Amputate),
            "FINAL" => Some(SpellEffect::FinalPush),
            "LYLTY" => Some(SpellEffect::Loyalty),
            "ZMBFY" => Some(SpellEffect::Zombify),
            "BLOOD" => Some(SpellEffect::BloodPact),
            "CURSE" => Some(SpellEffect::Curse),
            "CLONE" => Some(SpellEffect::CloneTarget),
            "MEMRY" => Some(SpellEffect::Memory),
            "REVIV" => Some(SpellEffect::Revive),
            _ => None,
        }
    }

    /// The category this effect belongs to.
    #[must_use]
    pub const fn category(self) -> SpellCategory {
        match self {
            SpellEffect::Battlecry | SpellEffect::Meteor | SpellEffect::Fireball => {
                SpellCategory::General
            }
            SpellEffect::Shock
            | SpellEffect::Mobilize
            | SpellEffect::RapidRush
            | SpellEffect::Shield
            | SpellEffect::Amputate
            | SpellEffect::FinalPush
            | SpellEffect::Loyalty
            | SpellEffect::Zombify
            | SpellEffect::BloodPact
            | SpellEffect::Curse
            | SpellEffect::CloneTarget => SpellCategory::Target,
            SpellEffect::Memory | SpellEffect::Revive => SpellCategory::Graveyard,
        }
    }
}

/// Base stats of a creature prototype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    /// Base attack, never negative.
    pub attack: i32,

    /// Base health, never negative.
    pub health: i32,

    /// Keywords printed on the card.
    pub keywords: KeywordSet,
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Creature(CreatureStats),
    Spell(SpellEffect),
}

/// Static card definition: the prototype for deep-copy instantiation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier.
    pub id: CardId,

    /// Uppercase 5-character code, the id used in config files and
    /// commands.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Mana cost.
    pub cost: ManaCost,

    /// Creature or spell payload.
    pub kind: CardKind,
}

impl CardDefinition {
    /// Whether this defines a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        matches!(self.kind, CardKind::Creature(_))
    }

    /// Creature stats, if this is a creature.
    #[must_use]
    pub fn as_creature(&self) -> Option<&CreatureStats> {
        match &self.kind {
            CardKind::Creature(stats) => Some(stats),
            CardKind::Spell(_) => None,
        }
    }

    /// Spell effect, if this is a spell.
    #[must_use]
    pub fn as_spell(&self) -> Option<SpellEffect> {
        match self.kind {
            CardKind::Spell(effect) => Some(effect),
            CardKind::Creature(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Keyword;

    #[test]
    fn test_mana_cost() {
        assert_eq!(ManaCost::Fixed(3).fixed(), Some(3));
        assert_eq!(ManaCost::Variable.fixed(), None);
        assert_eq!(format!("{}", ManaCost::Variable), "XX");
        assert_eq!(format!("{}", ManaCost::Fixed(7)), "7");
    }

    #[test]
    fn test_effect_codes_round_trip() {
        let codes = [
            "BTLCY", "METOR", "FIRBL", "SHOCK", "MOBLZ", "RRUSH", "SHILD", "AMPUT", "FINAL",
            "LYLTY", "ZMBFY", "BLOOD", "CURSE", "CLONE", "MEMRY", "REVIV",
        ];
        for code in codes {
            assert!(SpellEffect::from_code(code).is_some(), "{}", code);
        }
        assert_eq!(SpellEffect::from_code("NOPE"), None);
    }

    #[test]
    fn test_effect_categories() {
        assert_eq!(SpellEffect::Meteor.category(), SpellCategory::General);
        assert_eq!(SpellEffect::Shock.category(), SpellCategory::Target);
        assert_eq!(SpellEffect::Revive.category(), SpellCategory::Graveyard);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(SpellCategory::parse("General"), Some(SpellCategory::General));
        assert_eq!(SpellCategory::parse("Target"), Some(SpellCategory::Target));
        assert_eq!(SpellCategory::parse("graveyard"), None);
        for category in [
            SpellCategory::General,
            SpellCategory::Target,
            SpellCategory::Graveyard,
        ] {
            assert_eq!(SpellCategory::parse(category.name()), Some(category));
        }
    }

    #[test]
    fn test_definition_accessors() {
        let creature = CardDefinition {
            id: CardId::new(0),
            code: "WOLFF".to_string(),
            name: "Wolf".to_string(),
            cost: ManaCost::Fixed(2),
            kind: CardKind::Creature(CreatureStats {
                attack: 2,
                health: 1,
                keywords: [Keyword::Haste].into_iter().collect(),
            }),
        };

        assert!(creature.is_creature());
        assert_eq!(creature.as_creature().unwrap().attack, 2);
        assert_eq!(creature.as_spell(), None);

        let spell = CardDefinition {
            id: CardId::new(1),
            code: "SHOCK".to_string(),
            name: "Shock".to_string(),
            cost: ManaCost::Fixed(1),
            kind: CardKind::Spell(SpellEffect::Shock),
        };

        assert!(!spell.is_creature());
        assert_eq!(spell.as_spell(), Some(SpellEffect::Shock));
    }

    #[test]
    fn test_serialization() {
        let def = CardDefinition {
            id: CardId::new(3),
            code: "CURSE".to_string(),
            name: "Curse".to_string(),
            cost: ManaCost::Variable,
            kind: CardKind::Spell(SpellEffect::Curse),
        };
        let json = serde_json::to_string(&def).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, deserialized);
    }
}
