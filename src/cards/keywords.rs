//! Creature keywords.
//!
//! A keyword is a combat-time ability or status. Creatures carry a
//! membership-only set of them: no duplicates, no ordering beyond the
//! fixed declaration order, idempotent insertion.
//!
//! The enum is declared in alphabetical order of display names, which
//! makes iteration order, rendered letter order, and "alphabetically
//! first" all fall out of the discriminant.

use serde::{Deserialize, Serialize};

/// A creature keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Killing blows deal their excess damage to the opposing player,
    /// and each blow grows this creature's attack for the exchange.
    Brutal,
    /// Moving to battle drags an opposing parked creature into the lane.
    Challenger,
    /// Strikes alone before the exchange; a killed target never strikes back.
    FirstStrike,
    /// May battle in the round it was summoned.
    Haste,
    /// The controller heals for the damage this creature deals.
    Lifesteal,
    /// Loses 1 health at every turn-end boundary; spreads on strikes.
    Poisoned,
    /// Heals to base health instead of dying; also at odd-round upkeep.
    Regenerate,
    /// Swept to the graveyard when the round ends.
    Temporary,
    /// Returns to the field once, reset, when destroyed.
    Undying,
    /// Strikes apply Poisoned to surviving targets.
    Venomous,
}

impl Keyword {
    /// Every keyword, in declaration (= alphabetical) order.
    pub const ALL: [Keyword; 10] = [
        Keyword::Brutal,
        Keyword::Challenger,
        Keyword::FirstStrike,
        Keyword::Haste,
        Keyword::Lifesteal,
        Keyword::Poisoned,
        Keyword::Regenerate,
        Keyword::Temporary,
        Keyword::Undying,
        Keyword::Venomous,
    ];

    /// Display name, as it appears in card definition files.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Keyword::Brutal => "Brutal",
            Keyword::Challenger => "Challenger",
            Keyword::FirstStrike => "First Strike",
            Keyword::Haste => "Haste",
            Keyword::Lifesteal => "Lifesteal",
            Keyword::Poisoned => "Poisoned",
            Keyword::Regenerate => "Regenerate",
            Keyword::Temporary => "Temporary",
            Keyword::Undying => "Undying",
            Keyword::Venomous => "Venomous",
        }
    }

    /// Single-letter code used in card art.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Keyword::Brutal => 'B',
            Keyword::Challenger => 'C',
            Keyword::FirstStrike => 'F',
            Keyword::Haste => 'H',
            Keyword::Lifesteal => 'L',
            Keyword::Poisoned => 'P',
            Keyword::Regenerate => 'R',
            Keyword::Temporary => 'T',
            Keyword::Undying => 'U',
            Keyword::Venomous => 'V',
        }
    }

    /// Parse a display name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Keyword> {
        Keyword::ALL.iter().copied().find(|k| k.display_name() == name)
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A set of keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordSet(u16);

impl KeywordSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, keyword: Keyword) -> bool {
        self.0 & keyword.bit() != 0
    }

    /// Insert a keyword. Inserting a present keyword is a no-op.
    pub fn insert(&mut self, keyword: Keyword) {
        self.0 |= keyword.bit();
    }

    /// Remove a keyword if present.
    pub fn remove(&mut self, keyword: Keyword) {
        self.0 &= !keyword.bit();
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of keywords in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate in alphabetical order of display names.
    pub fn iter(self) -> impl Iterator<Item = Keyword> {
        Keyword::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// The alphabetically first keyword in the set, if any.
    #[must_use]
    pub fn first(self) -> Option<Keyword> {
        self.iter().next()
    }
}

impl FromIterator<Keyword> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        let mut set = Self::empty();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}
