//! Configuration management

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT, DEFAULT_TIMEZONE, TIME_FORMAT};
use crate::{DateError, Result};

/// Kit configuration
///
/// Every field is optional in serialized form; missing fields fall back to
/// the defaults in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// IANA name of the home time zone civil dates are interpreted in.
    pub timezone: String,
    /// Pattern used by `format_date`.
    pub date_format: String,
    /// Pattern used by `format_time`.
    pub time_format: String,
    /// Pattern used by `format_date_time`.
    pub date_time_format: String,
}

impl KitConfig {
    /// Configuration for a given home zone, with default patterns.
    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self { timezone: timezone.into(), ..Self::default() }
    }

    /// Resolve the configured home zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`] if the name is not in the IANA
    /// database.
    pub fn zone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| DateError::InvalidTimeZone(self.timezone.clone()))
    }
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            date_format: DATE_FORMAT.to_string(),
            time_format: TIME_FORMAT.to_string(),
            date_time_format: DATE_TIME_FORMAT.to_string(),
        }
    }
}
