//! The draw pile.
//!
//! A deck starts with every card exactly once and only shrinks. The top of
//! the deck is the end of the vector, so draws are `pop`s.

use crate::core::GameRng;

use super::card::{Card, DECK_SIZE};

/// Ordered draw pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    /// Top = end of vec.
    cards: Vec<Card>,
}

impl Deck {
    /// Build all 81 cards and shuffle them uniformly.
    #[must_use]
    pub fn new_shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Build a deck that deals `cards` in the given order.
    ///
    /// Intended for reproducible setups; the caller is responsible for not
    /// passing duplicates.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        debug_assert!(cards.len() <= DECK_SIZE);
        cards.reverse();
        Self { cards }
    }

    /// Draw the top card, or `None` when the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards. Returns fewer if the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let split = self.cards.len() - take;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        drawn
    }

    /// Draw exactly `n` cards, or nothing at all if fewer remain.
    pub fn draw_exact(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        Some(self.draw_n(n))
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if a card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
