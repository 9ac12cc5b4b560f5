//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! The game is strictly two-player; `PlayerId` is a closed enum with a
//! total `opponent()` function.
//!
//! ## PlayerPair
//!
//! Per-player data storage backed by a fixed 2-element array, indexable
//! by `PlayerId`.
//!
//! ## PlayerState
//!
//! Health, mana and mana pool, hand, deck, graveyard, and the one-shot
//! redraw flag. Health clamps at 0; mana clamps to `[0, mana_pool]`;
//! the mana pool only ever grows.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players, in id order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based index, for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// 1-based number, as shown to users and written to the result line.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use lanecast::core::{PlayerId, PlayerPair};
///
/// let mut life: PlayerPair<i32> = PlayerPair::with_value(30);
/// life[PlayerId::Two] = 25;
///
/// assert_eq!(life[PlayerId::One], 30);
/// assert_eq!(life[PlayerId::Two], 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.iter().map(move |&p| (p, self.get(p)))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's mutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    health: i32,
    mana: u32,
    mana_pool: u32,
    hand: Vec<EntityId>,
    deck: VecDeque<EntityId>,
    graveyard: Vec<EntityId>,
    redraw_enabled: bool,
}

impl PlayerState {
    /// Create a player with full starting health and a full mana pool.
    #[must_use]
    pub fn new(health: i32, mana_pool: u32) -> Self {
        Self {
            health,
            mana: mana_pool,
            mana_pool,
            hand: Vec::new(),
            deck: VecDeque::new(),
            graveyard: Vec::new(),
            redraw_enabled: true,
        }
    }

    // === Health ===

    /// Current health. Never negative.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Deal damage, clamping health at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restore health. No upper bound.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    /// A player at 0 health has lost.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    // === Mana ===

    /// Current mana.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    /// Current mana pool size.
    #[must_use]
    pub fn mana_pool(&self) -> u32 {
        self.mana_pool
    }

    /// Spend mana. Callers validate affordability first.
    pub fn spend_mana(&mut self, cost: u32) {
        self.mana = self.mana.saturating_sub(cost);
    }

    /// Set current mana, clamped to `[0, mana_pool]`.
    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana.min(self.mana_pool);
    }

    /// Grow the mana pool by one. The pool never shrinks.
    pub fn grow_mana_pool(&mut self) {
        self.mana_pool += 1;
    }

    /// Refill current mana to the pool size.
    pub fn refill_mana(&mut self) {
        self.mana = self.mana_pool;
    }

    // === Hand ===

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[EntityId] {
        &self.hand
    }

    /// Add a card to the back of the hand.
    pub fn add_to_hand(&mut self, entity: EntityId) {
        self.hand.push(entity);
    }

    /// Remove a specific card from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, entity: EntityId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&e| e == entity) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    // === Deck ===

    /// Set the deck contents, front = next draw.
    pub fn set_deck(&mut self, cards: Vec<EntityId>) {
        self.deck = cards.into();
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Draw one card from the front of the deck into the hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<EntityId> {
        let entity = self.deck.pop_front()?;
        self.hand.push(entity);
        Some(entity)
    }

    /// Draw up to `n` cards.
    pub fn draw_many(&mut self, n: usize) {
        for _ in 0..n {
            if self.draw().is_none() {
                break;
            }
        }
    }

    // === Graveyard ===

    /// Dead creatures, in order of death.
    #[must_use]
    pub fn graveyard(&self) -> &[EntityId] {
        &self.graveyard
    }

    /// Add a creature to the graveyard.
    pub fn add_to_graveyard(&mut self, entity: EntityId) {
        self.graveyard.push(entity);
    }

    /// Remove a specific creature from the graveyard.
    ///
    /// Returns true if it was found and removed.
    pub fn remove_from_graveyard(&mut self, entity: EntityId) -> bool {
        if let Some(pos) = self.graveyard.iter().position(|&e| e == entity) {
            self.graveyard.remove(pos);
            true
        } else {
            false
        }
    }

    // === Redraw ===

    /// Whether the one-shot redraw is still available.
    #[must_use]
    pub fn redraw_enabled(&self) -> bool {
        self.redraw_enabled
    }

    /// Permanently disable redraw. Called when any card is played.
    pub fn disable_redraw(&mut self) {
        self.redraw_enabled = false;
    }

    /// Redraw requires the flag and at least two hand cards.
    #[must_use]
    pub fn can_redraw(&self) -> bool {
        self.redraw_enabled && self.hand.len() >= 2
    }

    /// Return the whole hand to the bottom of the deck in hand order,
    /// then draw one card fewer than was returned. One use per game.
    ///
    /// Returns false (and does nothing) if redraw is not available.
    pub fn perform_redraw(&mut self) -> bool {
        if !self.can_redraw() {
            return false;
        }
        let returned = self.hand.len();
        for entity in self.hand.drain(..) {
            self.deck.push_back(entity);
        }
        self.redraw_enabled = false;
        self.draw_many(returned - 1);
        true
    }
}
