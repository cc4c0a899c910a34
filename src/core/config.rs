//! Game configuration.
//!
//! `GameConfig` holds the table size and every scoring constant. The
//! defaults reproduce the standard game; tests override them to make
//! timing thresholds easy to hit.
//!
//! ## Scoring defaults
//!
//! | Event | Condition | Score change |
//! |---|---|---|
//! | Match | elapsed `<` 8s | +5 |
//! | Match | otherwise | +3 |
//! | Mismatch | elapsed `<=` 20s | -(5 + deal requests) |
//! | Mismatch | otherwise | -8 |
//!
//! The score never drops below zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;

/// Cards dealt by a "deal three more" request. Equal to the match arity.
pub const DEAL_SIZE: usize = 3;

/// Cards on the table at the start of a game.
pub const DEFAULT_INITIAL_VISIBLE: usize = 12;

/// Points for a match found inside the fast window.
pub const DEFAULT_FAST_MATCH_BONUS: u32 = 5;

/// Points for a match found after the fast window.
pub const DEFAULT_SLOW_MATCH_BONUS: u32 = 3;

/// Base penalty for a quick mismatch, before the deal-request surcharge.
pub const DEFAULT_MISMATCH_PENALTY_BASE: u32 = 5;

/// Flat penalty for a mismatch after the grace window.
pub const DEFAULT_SLOW_MISMATCH_PENALTY: u32 = 8;

/// A match strictly faster than this earns the fast bonus.
pub const DEFAULT_FAST_MATCH_WINDOW: Duration = Duration::from_secs(8);

/// A mismatch at or under this pays the base penalty plus surcharge.
pub const DEFAULT_MISMATCH_GRACE_WINDOW: Duration = Duration::from_secs(20);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt face up by a new game. Also the table capacity at which
    /// a confirmed match is replaced rather than removed.
    pub initial_visible: usize,

    /// Points for a fast match.
    pub fast_match_bonus: u32,

    /// Points for a slow match.
    pub slow_match_bonus: u32,

    /// Quick-mismatch penalty, before adding the deal-request count.
    pub mismatch_penalty_base: u32,

    /// Penalty for a mismatch after the grace window.
    pub slow_mismatch_penalty: u32,

    /// Matches faster than this are fast.
    pub fast_match_window: Duration,

    /// Mismatches at or under this pay the scaled penalty.
    pub mismatch_grace_window: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            fast_match_bonus: DEFAULT_FAST_MATCH_BONUS,
            slow_match_bonus: DEFAULT_SLOW_MATCH_BONUS,
            mismatch_penalty_base: DEFAULT_MISMATCH_PENALTY_BASE,
            slow_mismatch_penalty: DEFAULT_SLOW_MISMATCH_PENALTY,
            fast_match_window: DEFAULT_FAST_MATCH_WINDOW,
            mismatch_grace_window: DEFAULT_MISMATCH_GRACE_WINDOW,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt at the start of a game.
    ///
    /// Panics if the deck cannot supply that many cards.
    #[must_use]
    pub fn with_initial_visible(mut self, count: usize) -> Self {
        assert!(
            count <= DECK_SIZE,
            "Cannot deal {} cards from a {}-card deck",
            count,
            DECK_SIZE
        );
        self.initial_visible = count;
        self
    }

    /// Set the fast and slow match bonuses.
    #[must_use]
    pub fn with_match_bonus(mut self, fast: u32, slow: u32) -> Self {
        self.fast_match_bonus = fast;
        self.slow_match_bonus = slow;
        self
    }

    /// Set the quick-mismatch base penalty and the slow-mismatch penalty.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, base: u32, slow: u32) -> Self {
        self.mismatch_penalty_base = base;
        self.slow_mismatch_penalty = slow;
        self
    }

    /// Set the fast-match and mismatch-grace time windows.
    #[must_use]
    pub fn with_time_windows(mut self, fast_match: Duration, mismatch_grace: Duration) -> Self {
        self.fast_match_window = fast_match;
        self.mismatch_grace_window = mismatch_grace;
        self
    }
}
