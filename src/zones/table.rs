//! The table: every card that has left the deck.
//!
//! `Table` owns the visible row and the three card sets layered on it:
//!
//! - `selected`: 0-2 visible cards awaiting a third
//! - `pending`: the last evaluated triple, still on the table until the
//!   next selection resolves it
//! - `removed`: cards retired by confirmed matches
//!
//! Cards are tracked by value, so positions can shift (shuffle, removal
//! without replacement) without invalidating the selection.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::rules::{IndexTriple, MatchOutcome, MATCH_SIZE};

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Still in the draw pile.
    Deck,
    /// Face up and unselected.
    Visible,
    /// Face up and tentatively chosen.
    Selected,
    /// Face up as part of the last evaluated triple.
    PendingMatch,
    /// Retired by a confirmed match.
    Removed,
}

/// The evaluated-triple slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No triple awaiting resolution.
    #[default]
    Idle,
    /// A triple was evaluated and is still on the table.
    Evaluated {
        outcome: MatchOutcome,
        cards: [Card; MATCH_SIZE],
    },
}

impl Evaluation {
    /// Cards of the evaluated triple, or an empty slice when idle.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Evaluation::Idle => &[],
            Evaluation::Evaluated { cards, .. } => cards,
        }
    }

    /// Outcome of the evaluated triple.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self {
            Evaluation::Idle => None,
            Evaluation::Evaluated { outcome, .. } => Some(*outcome),
        }
    }

    /// Check if this is a confirmed match awaiting removal.
    #[must_use]
    pub fn is_confirmed_match(&self) -> bool {
        self.outcome() == Some(MatchOutcome::Match)
    }

    /// Check if a card is part of the evaluated triple.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }
}

/// Visible row plus selection, pending, and removed zones.
#[derive(Clone, Debug, Default)]
pub struct Table {
    visible: Vector<Card>,
    selected: SmallVec<[Card; MATCH_SIZE]>,
    pending: Evaluation,
    removed: Vector<Card>,
    removed_set: FxHashSet<Card>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table showing `cards`, in order.
    #[must_use]
    pub fn with_visible(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            visible: cards.into_iter().collect(),
            ..Self::default()
        }
    }

    // === Projections ===

    /// Face-up cards, in display order.
    #[must_use]
    pub fn visible(&self) -> &Vector<Card> {
        &self.visible
    }

    /// Selected cards, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// The evaluated-triple slot.
    #[must_use]
    pub fn pending(&self) -> &Evaluation {
        &self.pending
    }

    /// Retired cards, in removal order.
    #[must_use]
    pub fn removed(&self) -> &Vector<Card> {
        &self.removed
    }

    /// Visible cards copied into a contiguous vec.
    #[must_use]
    pub fn visible_vec(&self) -> Vec<Card> {
        self.visible.iter().copied().collect()
    }

    /// Position of a card in the visible row.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.visible.index_of(card)
    }

    /// Visible positions of the pending triple, sorted.
    ///
    /// `None` when idle or when any pending card is no longer visible.
    #[must_use]
    pub fn pending_positions(&self) -> Option<IndexTriple> {
        match &self.pending {
            Evaluation::Idle => None,
            Evaluation::Evaluated { cards, .. } => {
                let mut positions = [0; MATCH_SIZE];
                for (slot, card) in positions.iter_mut().zip(cards) {
                    *slot = self.position_of(card)?;
                }
                positions.sort_unstable();
                Some(positions)
            }
        }
    }

    /// Zone of a card that has left the deck, or `None`.
    ///
    /// Pending and selected take precedence over plain visibility.
    #[must_use]
    pub fn zone_of(&self, card: &Card) -> Option<Zone> {
        if self.removed_set.contains(card) {
            Some(Zone::Removed)
        } else if self.pending.contains(card) {
            Some(Zone::PendingMatch)
        } else if self.is_selected(card) {
            Some(Zone::Selected)
        } else if self.visible.contains(card) {
            Some(Zone::Visible)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected.contains(card)
    }

    #[must_use]
    pub fn is_removed(&self, card: &Card) -> bool {
        self.removed_set.contains(card)
    }

    // === Mutations ===

    /// Append cards to the end of the visible row.
    pub fn deal(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.visible.extend(cards);
    }

    /// Reorder the visible row. `order` must be a permutation of the row.
    pub fn reorder_visible(&mut self, order: Vec<Card>) {
        debug_assert_eq!(order.len(), self.visible.len());
        self.visible = order.into_iter().collect();
    }

    /// Remove a card from the selection. Returns true if it was selected.
    pub fn deselect(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.selected.iter().position(|c| c == card) {
            self.selected.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add a card to the selection.
    pub fn select(&mut self, card: Card) {
        debug_assert!(self.selected.len() < MATCH_SIZE);
        self.selected.push(card);
    }

    /// Move the two selected cards and `third` into the pending slot.
    pub fn take_triple(&mut self, third: Card) -> [Card; MATCH_SIZE] {
        debug_assert_eq!(self.selected.len(), MATCH_SIZE - 1);
        let triple = [self.selected[0], self.selected[1], third];
        self.selected.clear();
        triple
    }

    /// Store an evaluated triple.
    pub fn set_pending(&mut self, outcome: MatchOutcome, cards: [Card; MATCH_SIZE]) {
        self.pending = Evaluation::Evaluated { outcome, cards };
    }

    /// Clear the pending slot, returning what it held.
    pub fn take_pending(&mut self) -> Evaluation {
        std::mem::take(&mut self.pending)
    }

    /// Replace visible cards in place and retire them.
    ///
    /// `replacements` must have one card per entry of `cards`.
    pub fn replace_and_retire(&mut self, cards: &[Card], replacements: Vec<Card>) {
        debug_assert_eq!(cards.len(), replacements.len());
        for (card, replacement) in cards.iter().zip(replacements) {
            if let Some(pos) = self.position_of(card) {
                self.visible.set(pos, replacement);
                self.retire(*card);
            }
        }
    }

    /// Remove visible cards without replacement and retire them.
    pub fn remove_and_retire(&mut self, cards: &[Card]) {
        for card in cards {
            if let Some(pos) = self.position_of(card) {
                self.visible.remove(pos);
                self.retire(*card);
            }
        }
    }

    fn retire(&mut self, card: Card) {
        if self.removed_set.insert(card) {
            self.removed.push_back(card);
        }
    }
}
