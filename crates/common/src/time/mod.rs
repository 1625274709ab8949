//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction so "now" can be injected
//! - **[`format`]**: human-readable relative time ("2 minutes ago")
//!
//! ## Usage
//!
//! ```rust
//! use chrono::TimeDelta;
//! use datewise_common::time::{format_relative, Clock, SystemClock};
//!
//! assert_eq!(format_relative(TimeDelta::minutes(-5)), "5 minutes ago");
//! assert_eq!(format_relative(TimeDelta::days(3)), "in 3 days");
//!
//! let now = SystemClock.now();
//! assert!(now.timestamp() > 0);
//! ```

pub mod clock;
pub mod format;

// Re-export commonly used items
pub use clock::{Clock, SystemClock};
pub use format::{format_relative, humanize_delta};
