//! # Datewise Domain
//!
//! Domain types shared by every datewise crate.
//!
//! This crate contains:
//! - The `DateError` taxonomy and `Result` alias
//! - Calendar units (`TimeUnit`) and relative windows
//! - Kit configuration (`KitConfig`)
//! - Default format patterns
//!
//! ## Architecture
//! - No dependencies on other datewise crates
//! - Only external dependencies allowed
//! - Pure data structures, no clock reads

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::KitConfig;
pub use errors::*;
pub use types::*;
