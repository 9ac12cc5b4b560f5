//! Attacker/defender role assignment.
//!
//! Roles are re-bound to physical players every round following a fixed
//! repeating pattern: Player One attacks on rounds 1, 4, 5, 8, 9, 12, …
//! (two-round blocks that swap owner after round 1 and every second round
//! thereafter). The assignment is a pure function of the round number and
//! is recomputed wherever it is needed, never tracked incrementally.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// The role a player holds for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Attacker,
    Defender,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Attacker => write!(f, "Attacker"),
            Role::Defender => write!(f, "Defender"),
        }
    }
}

/// Which player attacks and which defends this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub attacker: PlayerId,
    pub defender: PlayerId,
}

impl RoleAssignment {
    /// Compute the assignment for a round number (1-based).
    ///
    /// ```
    /// use lanecast::core::{PlayerId, RoleAssignment};
    ///
    /// assert_eq!(RoleAssignment::for_round(1).attacker, PlayerId::One);
    /// assert_eq!(RoleAssignment::for_round(2).attacker, PlayerId::Two);
    /// assert_eq!(RoleAssignment::for_round(5).attacker, PlayerId::One);
    /// ```
    #[must_use]
    pub fn for_round(round: u32) -> Self {
        // Player One attacks when round % 4 is 0 or 1: rounds 1, 4, 5, 8, 9, ...
        let attacker = if matches!(round % 4, 0 | 1) {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        Self {
            attacker,
            defender: attacker.opponent(),
        }
    }

    /// The role a given player holds.
    #[must_use]
    pub fn role_of(self, player: PlayerId) -> Role {
        if player == self.attacker {
            Role::Attacker
        } else {
            Role::Defender
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pattern() {
        let one_attacks = [1, 4, 5, 8, 9, 12, 13, 16, 17, 20, 21, 24];
        for round in 1..=24 {
            let expected = if one_attacks.contains(&round) {
                PlayerId::One
            } else {
                PlayerId::Two
            };
            let roles = RoleAssignment::for_round(round);
            assert_eq!(roles.attacker, expected, "round {}", round);
            assert_eq!(roles.defender, expected.opponent(), "round {}", round);
        }
    }

    #[test]
    fn test_role_of() {
        let roles = RoleAssignment::for_round(2);
        assert_eq!(roles.role_of(PlayerId::Two), Role::Attacker);
        assert_eq!(roles.role_of(PlayerId::One), Role::Defender);
    }

    #[test]
    fn test_pattern_repeats_every_four() {
        for round in 1..=100 {
            assert_eq!(
                RoleAssignment::for_round(round),
                RoleAssignment::for_round(round + 4)
            );
        }
    }
}
