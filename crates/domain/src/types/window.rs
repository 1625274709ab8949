//! Relative date windows ("last N days").

use serde::{Deserialize, Serialize};

/// A pair of `YYYY-MM-DD` dates: today and the date `N` units before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeWindow {
    /// Today, formatted.
    pub current_date: String,
    /// The start of the window, formatted.
    pub past_date: String,
}

impl RelativeWindow {
    /// Window from two already formatted dates.
    pub fn new(current_date: impl Into<String>, past_date: impl Into<String>) -> Self {
        Self { current_date: current_date.into(), past_date: past_date.into() }
    }
}
