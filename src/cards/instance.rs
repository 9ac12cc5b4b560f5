//! Card instances - runtime card state.
//!
//! A `CardInstance` is one live copy of a prototype. Creatures carry
//! mutable battle state; spells carry nothing beyond their definition.
//! The base stats are copied in at spawn time so a reset never needs the
//! registry.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

use super::definition::{CardDefinition, CardId, CardKind, CreatureStats};
use super::keywords::{Keyword, KeywordSet};

/// Live state of a creature in play (or in a hand/deck/graveyard).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureState {
    base: CreatureStats,

    /// Current attack.
    pub attack: i32,

    /// Current health. Clamped at 0 by `take_damage`.
    pub health: i32,

    /// Working keyword set. Reset restores the base set.
    pub keywords: KeywordSet,

    /// Round this creature was summoned to the field, if ever.
    pub summoned_round: Option<u32>,

    /// The player whose field last held this creature.
    pub last_field_owner: Option<PlayerId>,

    /// Set when Undying brings the creature back, so one resolution pass
    /// never processes it twice.
    pub resurrected: bool,
}

impl CreatureState {
    /// Fresh state from base stats.
    #[must_use]
    pub fn new(base: CreatureStats) -> Self {
        Self {
            base,
            attack: base.attack,
            health: base.health,
            keywords: base.keywords,
            summoned_round: None,
            last_field_owner: None,
            resurrected: false,
        }
    }

    /// The stats printed on the card.
    #[must_use]
    pub fn base(&self) -> &CreatureStats {
        &self.base
    }

    /// Reduce health by `amount`, clamping at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Raise health by `amount`. No upper bound.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    /// A creature at 0 health is dead and must leave its zone before the
    /// round-ending pass completes.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Membership test on the working keyword set.
    #[must_use]
    pub fn has(&self, keyword: Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    /// Grant a keyword (idempotent).
    pub fn grant(&mut self, keyword: Keyword) {
        self.keywords.insert(keyword);
    }

    /// Strip a keyword if present.
    pub fn strip(&mut self, keyword: Keyword) {
        self.keywords.remove(keyword);
    }

    /// Restore attack, health, and keywords to base values.
    pub fn reset(&mut self) {
        self.attack = self.base.attack;
        self.health = self.base.health;
        self.keywords = self.base.keywords;
    }
}

/// Instance payload: creatures have live state, spells do not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardForm {
    Creature(CreatureState),
    Spell,
}

/// One live copy of a card prototype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// This instance's entity id.
    pub entity: EntityId,

    /// The prototype this was copied from.
    pub def: CardId,

    /// Creature or spell payload.
    pub form: CardForm,
}

impl CardInstance {
    /// Deep-copy a prototype into a fresh instance.
    #[must_use]
    pub fn from_definition(entity: EntityId, def: &CardDefinition) -> Self {
        let form = match &def.kind {
            CardKind::Creature(stats) => CardForm::Creature(CreatureState::new(*stats)),
            CardKind::Spell(_) => CardForm::Spell,
        };
        Self {
            entity,
            def: def.id,
            form,
        }
    }

    /// Whether this instance is a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        matches!(self.form, CardForm::Creature(_))
    }

    /// Creature state, if this is a creature.
    #[must_use]
    pub fn as_creature(&self) -> Option<&CreatureState> {
        match &self.form {
            CardForm::Creature(state) => Some(state),
            CardForm::Spell => None,
        }
    }

    /// Creature state, mutably.
    pub fn as_creature_mut(&mut self) -> Option<&mut CreatureState> {
        match &mut self.form {
            CardForm::Creature(state) => Some(state),
            CardForm::Spell => None,
        }
    }

    /// Reset mutable stats to base values. No-op for spells.
    pub fn reset(&mut self) {
        if let CardForm::Creature(state) = &mut self.form {
            state.reset();
        }
    }
}
