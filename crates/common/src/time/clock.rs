//! Wall-clock abstraction
//!
//! Every "now"-dependent operation in datewise reads the current instant
//! through a [`Clock`] so tests can pin it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Trait for reading the current wall-clock instant
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the UNIX epoch.
    fn millis_since_epoch(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Real system clock implementation
///
/// Use this in production code.
///
/// # Examples
///
/// ```
/// use datewise_common::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// assert!(clock.millis_since_epoch() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
