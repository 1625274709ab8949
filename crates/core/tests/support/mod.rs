//! Shared test helpers for `datewise-core` integration tests.
//!
//! Fixture builders for civil date-times plus a one-time tracing subscriber
//! so scan and loader logs show up under `cargo test -- --nocapture`.

#![allow(dead_code)]

use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber honouring `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Midnight on the given day.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

/// The given day at `h:min:00`.
pub fn day_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}
