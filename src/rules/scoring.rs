//! Score keeping.
//!
//! A fast match earns more than a slow one. A quick mismatch costs more
//! than a slow one, and its cost grows with every "deal three more"
//! request made while a match was already on the table. See `GameConfig`
//! for the constants.
//!
//! The timer measures the gap between consecutive evaluations and restarts
//! on every evaluation, match or not.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Result of evaluating a selected triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Match,
    Mismatch,
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == MatchOutcome::Match
    }
}

impl From<bool> for MatchOutcome {
    fn from(is_match: bool) -> Self {
        if is_match {
            MatchOutcome::Match
        } else {
            MatchOutcome::Mismatch
        }
    }
}

/// Score, deal-request counter, and evaluation timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    score: u32,
    deal_requests: u32,
    last_evaluation: Duration,
}

impl Scoreboard {
    /// Create a zeroed scoreboard whose timer starts at `now`.
    #[must_use]
    pub fn new(now: Duration) -> Self {
        Self {
            score: 0,
            deal_requests: 0,
            last_evaluation: now,
        }
    }

    /// Current score. Never negative.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Deals requested while a match was available.
    #[must_use]
    pub fn deal_requests(&self) -> u32 {
        self.deal_requests
    }

    /// Count a deal request made while a match was on the table.
    pub fn record_needless_deal(&mut self) {
        self.deal_requests += 1;
    }

    /// Apply the score change for an evaluated triple and restart the timer.
    ///
    /// Returns the signed change actually applied (after clamping at zero).
    pub fn record_evaluation(
        &mut self,
        outcome: MatchOutcome,
        now: Duration,
        config: &GameConfig,
    ) -> i64 {
        let elapsed = now.saturating_sub(self.last_evaluation);
        self.last_evaluation = now;

        let before = i64::from(self.score);
        match outcome {
            MatchOutcome::Match => {
                let bonus = if elapsed < config.fast_match_window {
                    config.fast_match_bonus
                } else {
                    config.slow_match_bonus
                };
                self.score = self.score.saturating_add(bonus);
            }
            MatchOutcome::Mismatch => {
                let penalty = if elapsed <= config.mismatch_grace_window {
                    config.mismatch_penalty_base.saturating_add(self.deal_requests)
                } else {
                    config.slow_mismatch_penalty
                };
                self.score = self.score.saturating_sub(penalty);
            }
        }

        log::debug!(
            "{:?} after {:.2}s: score {} -> {}",
            outcome,
            elapsed.as_secs_f64(),
            before,
            self.score
        );
        i64::from(self.score) - before
    }
}
