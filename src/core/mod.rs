//! Core engine types: configuration, RNG, time, errors.
//!
//! These are the services the game state machine is built on. None of
//! them know anything about cards.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{GameConfig, DEAL_SIZE, DEFAULT_INITIAL_VISIBLE};
pub use error::{Error, Result};
pub use rng::GameRng;
