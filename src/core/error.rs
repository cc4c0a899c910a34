//! Error type for the rule engine.
//!
//! Only programming errors are errors here. Stale or out-of-range input
//! from a presentation layer is ignored by the game operations instead of
//! being reported.

/// Rule engine error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A primitive was called with arguments outside its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
