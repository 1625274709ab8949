//! Testing utilities and helpers
//!
//! - **[`time`]**: controllable wall clock for "now"-dependent code
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use datewise_common::testing::MockClock;
//! use datewise_common::time::Clock;
//!
//! let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
//! clock.advance(TimeDelta::hours(1));
//! assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 15, 13, 0, 0).unwrap());
//! # }
//! ```

pub mod time;

// Re-export commonly used items
pub use time::MockClock;
