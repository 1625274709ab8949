//! Loose date inputs accepted by the façade
//!
//! Hosts pass dates as chrono values or as ISO-8601-like strings. Everything
//! is normalised to a civil [`NaiveDateTime`] in the kit's home zone before
//! any calendar operation runs.
//!
//! Accepted string shapes:
//! - `2024-03-15`
//! - `2024-03-15T09:30`, `2024-03-15T09:30:00`, `2024-03-15T09:30:00.250`
//! - the same with a space instead of `T`
//! - RFC 3339 with offset: `2024-03-15T09:30:00Z`, `2024-03-15T09:30:00+02:00`

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use datewise_domain::{DateError, Result};

const DATE_TIME_PATTERNS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
const DATE_PATTERN: &str = "%Y-%m-%d";

/// Anything that can be read as a civil date-time in a given zone.
pub trait DateInput {
    /// Civil date-time as seen on a wall clock in `zone`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if the value cannot be parsed.
    fn to_civil(&self, zone: &Tz) -> Result<NaiveDateTime>;
}

impl DateInput for NaiveDateTime {
    fn to_civil(&self, _zone: &Tz) -> Result<NaiveDateTime> {
        Ok(*self)
    }
}

impl DateInput for NaiveDate {
    fn to_civil(&self, _zone: &Tz) -> Result<NaiveDateTime> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl<Z: TimeZone> DateInput for DateTime<Z> {
    fn to_civil(&self, zone: &Tz) -> Result<NaiveDateTime> {
        Ok(self.with_timezone(zone).naive_local())
    }
}

impl DateInput for str {
    fn to_civil(&self, zone: &Tz) -> Result<NaiveDateTime> {
        parse_civil(self, zone)
    }
}

impl DateInput for String {
    fn to_civil(&self, zone: &Tz) -> Result<NaiveDateTime> {
        parse_civil(self, zone)
    }
}

impl<T: DateInput + ?Sized> DateInput for &T {
    fn to_civil(&self, zone: &Tz) -> Result<NaiveDateTime> {
        (**self).to_civil(zone)
    }
}

/// Parse an ISO-8601-like string into a civil date-time in `zone`.
///
/// Offset-carrying strings are converted into `zone`; offset-free strings
/// are taken as already civil.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] if no accepted shape matches.
pub fn parse_civil(input: &str, zone: &Tz) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::invalid_date(input, "empty input"));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(zone).naive_local());
    }

    for pattern in DATE_TIME_PATTERNS {
        if let Ok(civil) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(civil);
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_PATTERN)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|e| DateError::invalid_date(input, e.to_string()))
}
