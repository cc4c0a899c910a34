//! Game rules: the matching rule and the scoring policy.
//!
//! Both are free of game state. `matching` is pure; `scoring` owns only
//! the score counters and the evaluation timer.

pub mod matching;
pub mod scoring;

pub use matching::{find_all_matches, has_match, is_match, is_triple_match, IndexTriple, MATCH_SIZE};
pub use scoring::{MatchOutcome, Scoreboard};
