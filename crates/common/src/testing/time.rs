//! Time abstraction for testability
//!
//! Provides a controllable [`Clock`] so "now"-dependent operations can be
//! tested against a fixed instant.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "test-utils")]
//! # {
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use datewise_common::testing::MockClock;
//! use datewise_common::time::Clock;
//!
//! let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! let start = clock.now();
//! clock.advance(TimeDelta::seconds(5));
//! assert_eq!(clock.now() - start, TimeDelta::seconds(5));
//! # }
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use crate::time::Clock;

/// Mock clock for deterministic testing
///
/// Clones share the same instant, so advancing one advances all of them.
#[derive(Debug, Clone)]
pub struct MockClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock starting at the current real time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a mock clock pinned to `instant`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant: Arc::new(Mutex::new(instant)) }
    }

    /// Advance the mock clock by a (possibly negative) delta.
    pub fn advance(&self, delta: TimeDelta) {
        let mut instant = self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *instant += delta;
    }

    /// Set the mock clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
