//! # Datewise Core
//!
//! Range scanning plus a thin façade over `chrono` and `chrono-tz`.
//!
//! This crate contains:
//! - [`scan`]: the half-open weekday range scanner (the only non-delegated
//!   logic)
//! - Façade modules: [`format`], [`arith`], [`compare`], [`zone`],
//!   [`calendar`], [`window`]
//! - [`DateKit`]: entry point that parses loose inputs and threads a clock
//!   and a home time zone through every "now"-dependent operation
//! - [`config`]: loading [`KitConfig`] from TOML or JSON files
//!
//! ## Architecture Principles
//! - Calendar rules, offsets and pattern interpretation are delegated to
//!   chrono; nothing here reimplements them
//! - No global "now": time is read through [`datewise_common::Clock`]
//! - Free functions take typed chrono values; only [`DateKit`] parses
//!
//! ## Example
//!
//! ```
//! use datewise_core::DateKit;
//!
//! let kit = DateKit::utc();
//! assert_eq!(kit.count_weekdays("2024-01-01", "2024-01-08").unwrap(), 5);
//! ```

pub mod arith;
pub mod calendar;
pub mod compare;
pub mod config;
pub mod format;
pub mod input;
pub mod kit;
pub mod scan;
pub mod window;
pub mod zone;

// Re-export specific items to avoid ambiguity
pub use datewise_common::{Clock, SystemClock};
pub use datewise_domain::{DateError, KitConfig, RelativeWindow, Result, TimeUnit};
pub use input::DateInput;
pub use kit::DateKit;
pub use scan::{collect_weekdays, count_weekdays, count_weekdays_closed_form, DayCursor};
