//! Complete game state.
//!
//! `GameState` owns everything that changes during a game:
//! - both `PlayerState`s,
//! - the `Board` (four 7-slot zones),
//! - the flat card-instance table keyed by `EntityId`,
//! - round number, done counter, active player, and the final outcome.
//!
//! Card instances live only in the table; zones, hands, decks, and
//! graveyards hold `EntityId` keys. Spawning deep-copies a prototype
//! `CardDefinition` into a fresh instance, so mutable stats never leak
//! between copies of the same card.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardInstance, CardRegistry, CreatureState};
use crate::zones::Board;

use super::config::{ConfigError, GameSetup};
use super::entity::EntityId;
use super::player::{PlayerId, PlayerPair, PlayerState};
use super::roles::RoleAssignment;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(PlayerId),
    Tie,
}

impl GameOutcome {
    /// Check whether a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner(p) if p == player)
    }

    /// The result line shown to users and appended to the setup file.
    #[must_use]
    pub fn result_line(self) -> String {
        match self {
            GameOutcome::Winner(p) => {
                format!("Player {} has won! Congratulations!", p.number())
            }
            GameOutcome::Tie => "It's a tie...".to_string(),
        }
    }
}

/// Number of cards each player draws before round 1.
pub const OPENING_HAND: usize = 7;

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Both players' state.
    pub players: PlayerPair<PlayerState>,

    /// The four zones.
    pub board: Board,

    /// Card instances by entity id.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Next entity id to allocate.
    next_entity: u32,

    /// Current round, starting at 1.
    round: u32,

    /// How many players have ended their turn this round (0..=2).
    done_count: u8,

    /// The player whose turn it is.
    active: PlayerId,

    /// Set exactly once, when the game ends.
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Build the starting state: decks spawned in configured order,
    /// opening hands drawn, round 1 roles applied.
    ///
    /// Fails if a deck list names a card the registry does not know.
    pub fn new(setup: &GameSetup, registry: &CardRegistry) -> Result<Self, ConfigError> {
        let mut state = Self {
            players: PlayerPair::new(|_| {
                PlayerState::new(setup.player_health, setup.mana_pool_start)
            }),
            board: Board::new(),
            cards: FxHashMap::default(),
            next_entity: 0,
            round: 1,
            done_count: 0,
            active: RoleAssignment::for_round(1).attacker,
            outcome: None,
        };

        for player in PlayerId::BOTH {
            let mut deck = Vec::with_capacity(setup.decks[player].len());
            for code in &setup.decks[player] {
                let def = registry
                    .get_by_code(code)
                    .ok_or_else(|| ConfigError::UnknownCard(code.clone()))?;
                deck.push(state.spawn_card(def));
            }
            state.players[player].set_deck(deck);
            state.players[player].draw_many(OPENING_HAND);
        }

        Ok(state)
    }

    // === Round / turn bookkeeping ===

    /// Current round number (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Role assignment for the current round.
    #[must_use]
    pub fn roles(&self) -> RoleAssignment {
        RoleAssignment::for_round(self.round)
    }

    /// Advance to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Hand the turn to a specific player.
    pub fn set_active(&mut self, player: PlayerId) {
        self.active = player;
    }

    /// Hand the turn to the other player.
    pub fn switch_active(&mut self) {
        self.active = self.active.opponent();
    }

    /// Players done this round.
    #[must_use]
    pub fn done_count(&self) -> u8 {
        self.done_count
    }

    /// Record one "done"; returns the new count.
    pub fn record_done(&mut self) -> u8 {
        self.done_count += 1;
        self.done_count
    }

    /// Reset the done counter for a new round.
    pub fn reset_done(&mut self) {
        self.done_count = 0;
    }

    // === Outcome ===

    /// The final outcome, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Record the outcome. The first terminal condition wins; later
    /// calls are ignored.
    pub fn set_outcome(&mut self, outcome: GameOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // === Players ===

    /// A player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// A player's state, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    // === Card instances ===

    /// Deep-copy a prototype into a fresh instance and return its id.
    pub fn spawn_card(&mut self, def: &CardDefinition) -> EntityId {
        let entity = EntityId::new(self.next_entity);
        self.next_entity += 1;
        self.cards.insert(entity, CardInstance::from_definition(entity, def));
        entity
    }

    /// Remove an instance from the table entirely.
    ///
    /// The caller is responsible for having removed it from every
    /// container first.
    pub fn despawn_card(&mut self, entity: EntityId) -> Option<CardInstance> {
        self.cards.remove(&entity)
    }

    /// Look up a card instance.
    #[must_use]
    pub fn card(&self, entity: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity)
    }

    /// Look up a card instance, mutably.
    pub fn card_mut(&mut self, entity: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&entity)
    }

    /// Look up a creature's live state, if the entity is a creature.
    #[must_use]
    pub fn creature(&self, entity: EntityId) -> Option<&CreatureState> {
        self.cards.get(&entity).and_then(CardInstance::as_creature)
    }

    /// Look up a creature's live state, mutably.
    pub fn creature_mut(&mut self, entity: EntityId) -> Option<&mut CreatureState> {
        self.cards
            .get_mut(&entity)
            .and_then(CardInstance::as_creature_mut)
    }

    /// Total number of live instances.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
