//! Monotonic time sources for the scoring timer.
//!
//! Scoring rewards fast play, so the game reads the current time whenever a
//! triple is evaluated. The reading is synchronous; nothing is scheduled.
//!
//! - `MonotonicClock`: wall-clock time since construction (default).
//! - `ManualClock`: time moves only when told to. Clones share one reading,
//!   so a test can keep a handle and advance the clock the game holds.
//!
//! ```
//! use std::time::Duration;
//! use set_engine::core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let handle = clock.clone();
//!
//! handle.advance(Duration::from_secs(5));
//! assert_eq!(clock.now(), Duration::from_secs(5));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic time.
///
/// `now` must never go backwards. The origin is arbitrary; only
/// differences between readings are meaningful.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Clock backed by `std::time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(by, Ordering::Relaxed);
    }

    /// Set the absolute reading. Ignored if it would move the clock backwards.
    pub fn set(&self, to: Duration) {
        let to = u64::try_from(to.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_max(to, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}
