//! # set-engine
//!
//! Rule engine and state machine for the Set card-matching game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, layout, or input wiring.
//!    A UI calls the game operations and renders the read-only projections.
//!
//! 2. **Deterministic When Asked**: Seeded RNG and an injectable clock make
//!    every deal and every score reproducible in tests.
//!
//! 3. **Stale Input Is Not an Error**: Out-of-range or outdated selections
//!    are ignored, since UI events race with state changes.
//!
//! ## Rules in Brief
//!
//! 81 cards, each a combination of four attributes with three variants.
//! Three cards match when every attribute is all-same or all-different
//! across them. Fast matches score more; mismatches cost more when quick
//! and when the player asked for extra cards while a match was showing.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, clock, errors
//! - `cards`: Attribute domain, cards, deck
//! - `rules`: Matching rule and scoring policy
//! - `zones`: Visible row, selection, pending triple, removed pile
//! - `game`: `GameState` state machine and snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, Error, GameConfig, GameRng, ManualClock, MonotonicClock, Result, DEAL_SIZE,
};

pub use crate::cards::{Attribute, Card, Deck, Variant, DECK_SIZE};

pub use crate::rules::{
    find_all_matches, is_match, is_triple_match, IndexTriple, MatchOutcome, Scoreboard,
};

pub use crate::zones::{Evaluation, Table, Zone};

pub use crate::game::{GameBuilder, GameSnapshot, GameState};
