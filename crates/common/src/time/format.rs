//! Human-readable relative time formatting
//!
//! Turns the signed distance between an instant and "now" into phrases such
//! as `"a few seconds ago"`, `"2 hours ago"` or `"in 3 days"`. Each bucket is
//! picked by rounding the distance to the nearest whole unit and comparing it
//! against fixed thresholds:
//!
//! | Rounded distance | Phrase |
//! |------------------|--------|
//! | ≤ 44 seconds | a few seconds |
//! | ≤ 1 minute | a minute |
//! | < 45 minutes | N minutes |
//! | ≤ 1 hour | an hour |
//! | < 22 hours | N hours |
//! | ≤ 1 day | a day |
//! | < 26 days | N days |
//! | ≤ 1 month | a month |
//! | < 11 months | N months |
//! | ≤ 1 year | a year |
//! | otherwise | N years |

use chrono::TimeDelta;

const SECONDS_THRESHOLD: i64 = 44;
const MINUTES_THRESHOLD: i64 = 45;
const HOURS_THRESHOLD: i64 = 22;
const DAYS_THRESHOLD: i64 = 26;
const MONTHS_THRESHOLD: i64 = 11;

// 400 Gregorian years contain 146_097 days and 4_800 months.
const MONTHS_PER_400_YEARS: f64 = 4_800.0;
const DAYS_PER_400_YEARS: f64 = 146_097.0;

/// Describe the magnitude of a delta without direction.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use datewise_common::time::format::humanize_delta;
///
/// assert_eq!(humanize_delta(TimeDelta::seconds(10)), "a few seconds");
/// assert_eq!(humanize_delta(TimeDelta::minutes(-30)), "30 minutes");
/// assert_eq!(humanize_delta(TimeDelta::hours(5)), "5 hours");
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn humanize_delta(delta: TimeDelta) -> String {
    let millis = delta.num_milliseconds().unsigned_abs() as f64;
    let secs = millis / 1_000.0;
    let days = millis / 86_400_000.0;
    let months = days * MONTHS_PER_400_YEARS / DAYS_PER_400_YEARS;

    let seconds = round_half_up(secs);
    let minutes = round_half_up(secs / 60.0);
    let hours = round_half_up(secs / 3_600.0);
    let whole_days = round_half_up(days);
    let whole_months = round_half_up(months);
    let years = round_half_up(months / 12.0);

    if seconds <= SECONDS_THRESHOLD {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < MINUTES_THRESHOLD {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < HOURS_THRESHOLD {
        format!("{hours} hours")
    } else if whole_days <= 1 {
        "a day".to_string()
    } else if whole_days < DAYS_THRESHOLD {
        format!("{whole_days} days")
    } else if whole_months <= 1 {
        "a month".to_string()
    } else if whole_months < MONTHS_THRESHOLD {
        format!("{whole_months} months")
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Describe a delta relative to now: negative is past, positive is future.
///
/// A zero delta reads as the past (`"a few seconds ago"`).
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use datewise_common::time::format::format_relative;
///
/// assert_eq!(format_relative(TimeDelta::hours(-2)), "2 hours ago");
/// assert_eq!(format_relative(TimeDelta::days(1)), "in a day");
/// ```
pub fn format_relative(delta: TimeDelta) -> String {
    let phrase = humanize_delta(delta);
    if delta > TimeDelta::zero() {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::format.
    use super::*;

    /// Validates `TimeDelta::seconds` behavior for the few seconds scenario.
    ///
    /// Assertions:
    /// - Confirms 0 and 44 seconds both read `"a few seconds"`.
    #[test]
    fn test_few_seconds() {
        assert_eq!(humanize_delta(TimeDelta::zero()), "a few seconds");
        assert_eq!(humanize_delta(TimeDelta::seconds(44)), "a few seconds");
    }

    /// Validates `TimeDelta::seconds` behavior for the minutes scenario.
    ///
    /// Assertions:
    /// - Confirms 45 seconds reads `"a minute"`.
    /// - Confirms 90 seconds rounds up to `"2 minutes"`.
    /// - Confirms 44 minutes reads `"44 minutes"`.
    #[test]
    fn test_minutes() {
        assert_eq!(humanize_delta(TimeDelta::seconds(45)), "a minute");
        assert_eq!(humanize_delta(TimeDelta::seconds(90)), "2 minutes");
        assert_eq!(humanize_delta(TimeDelta::minutes(44)), "44 minutes");
    }

    /// Validates `TimeDelta::minutes` behavior for the hours scenario.
    ///
    /// Assertions:
    /// - Confirms 45 minutes reads `"an hour"`.
    /// - Confirms 21 hours reads `"21 hours"`.
    /// - Confirms 22 hours reads `"a day"`.
    #[test]
    fn test_hours() {
        assert_eq!(humanize_delta(TimeDelta::minutes(45)), "an hour");
        assert_eq!(humanize_delta(TimeDelta::hours(21)), "21 hours");
        assert_eq!(humanize_delta(TimeDelta::hours(22)), "a day");
    }

    /// Validates `TimeDelta::days` behavior for the days and months scenario.
    ///
    /// Assertions:
    /// - Confirms 25 days reads `"25 days"`.
    /// - Confirms 26 and 45 days read `"a month"`.
    /// - Confirms 100 days reads `"3 months"`.
    #[test]
    fn test_days_and_months() {
        assert_eq!(humanize_delta(TimeDelta::days(25)), "25 days");
        assert_eq!(humanize_delta(TimeDelta::days(26)), "a month");
        assert_eq!(humanize_delta(TimeDelta::days(45)), "a month");
        assert_eq!(humanize_delta(TimeDelta::days(100)), "3 months");
    }

    /// Validates `TimeDelta::days` behavior for the years scenario.
    ///
    /// Assertions:
    /// - Confirms 400 days reads `"a year"`.
    /// - Confirms 800 days reads `"2 years"`.
    #[test]
    fn test_years() {
        assert_eq!(humanize_delta(TimeDelta::days(400)), "a year");
        assert_eq!(humanize_delta(TimeDelta::days(800)), "2 years");
    }

    /// Validates `format_relative` behavior for the direction scenario.
    ///
    /// Assertions:
    /// - Confirms negative deltas end with `"ago"`.
    /// - Confirms positive deltas start with `"in"`.
    /// - Confirms a zero delta reads as the past.
    #[test]
    fn test_direction() {
        assert_eq!(format_relative(TimeDelta::minutes(-2)), "2 minutes ago");
        assert_eq!(format_relative(TimeDelta::days(3)), "in 3 days");
        assert_eq!(format_relative(TimeDelta::zero()), "a few seconds ago");
    }
}
