//! Read-only view of a game for rendering.
//!
//! The visible row and removed pile are `im` vectors, so taking a snapshot
//! is O(1) in their length and a presentation layer can hold on to it
//! while the game moves on.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::zones::Evaluation;

/// Every observable projection of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Face-up cards, in display order.
    pub visible: Vector<Card>,
    /// Selected cards, in selection order.
    pub selected: Vec<Card>,
    /// Last evaluated triple and its outcome, until resolved.
    pub pending: Evaluation,
    /// Retired cards, in removal order.
    pub removed: Vector<Card>,
    pub score: u32,
    /// Deals requested while a match was available.
    pub deal_requests: u32,
    pub deck_remaining: usize,
}

impl GameSnapshot {
    /// Visible positions of the selected cards.
    #[must_use]
    pub fn selected_positions(&self) -> Vec<usize> {
        self.selected
            .iter()
            .filter_map(|card| self.visible.index_of(card))
            .collect()
    }

    /// Visible positions of the pending triple.
    #[must_use]
    pub fn pending_positions(&self) -> Vec<usize> {
        self.pending
            .cards()
            .iter()
            .filter_map(|card| self.visible.index_of(card))
            .collect()
    }
}
