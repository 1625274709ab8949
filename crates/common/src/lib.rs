//! Common utilities shared across datewise crates.
//!
//! # Feature Tiers
//!
//! - default: the [`time::Clock`] abstraction and relative-time formatting
//! - `test-utils`: deterministic [`testing::MockClock`] for downstream tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(any(feature = "test-utils", test))]
pub use testing::MockClock;
pub use time::{format_relative, humanize_delta, Clock, SystemClock};
