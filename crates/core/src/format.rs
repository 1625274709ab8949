//! Formatting façade
//!
//! Patterns use chrono's strftime syntax (`%Y-%m-%d`, `%I:%M %p`, ...).
//! Date-only helpers cannot fail. Helpers that print a time of day fail with
//! [`DateError::InvalidFormat`] when handed a date-only value, and
//! [`format_custom`] reports bad specifiers the same way.

use std::fmt::{self, Display, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use datewise_common::time::format_relative;
use datewise_domain::constants::{
    AM_PM_TIME_FORMAT, DATE_FORMAT, DATE_TIME_FORMAT, DAY_NAME_FORMAT, MONTH_NAME_FORMAT,
    RFC2822_FORMAT, TIME_FORMAT,
};
use datewise_domain::{DateError, Result};

use crate::input::parse_civil;

/// Values chrono can render with strftime items.
pub trait Formattable {
    /// Render `items` into `out`.
    ///
    /// # Errors
    /// Fails when an item needs data the value lacks, e.g. `%z` on a naive
    /// date-time.
    fn write_items(&self, items: &[Item<'_>], out: &mut String) -> fmt::Result;
}

impl Formattable for NaiveDateTime {
    fn write_items(&self, items: &[Item<'_>], out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items.iter()))
    }
}

impl Formattable for NaiveDate {
    fn write_items(&self, items: &[Item<'_>], out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items.iter()))
    }
}

impl<Z> Formattable for DateTime<Z>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    fn write_items(&self, items: &[Item<'_>], out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format_with_items(items.iter()))
    }
}

/// Parse a strftime pattern, rejecting unknown specifiers.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] if chrono cannot interpret the
/// pattern.
pub fn compile_pattern(pattern: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<_> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidFormat(pattern.to_string()));
    }
    Ok(items)
}

/// Format with an arbitrary strftime pattern.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] if the pattern is invalid or asks
/// for data the value does not carry (an offset on a naive value).
pub fn format_custom<T: Formattable + ?Sized>(value: &T, pattern: &str) -> Result<String> {
    let items = compile_pattern(pattern)?;
    let mut out = String::new();
    value
        .write_items(&items, &mut out)
        .map_err(|_| DateError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}

// Every formattable value carries a calendar date.
fn format_date_part<T: Formattable + ?Sized>(value: &T, pattern: &'static str) -> String {
    format_custom(value, pattern).unwrap_or_default()
}

/// `YYYY-MM-DD`.
pub fn format_date<T: Formattable + ?Sized>(value: &T) -> String {
    format_date_part(value, DATE_FORMAT)
}

/// `HH:MM:SS`, 24-hour.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] for a value without a time of day,
/// such as a [`NaiveDate`].
pub fn format_time<T: Formattable + ?Sized>(value: &T) -> Result<String> {
    format_custom(value, TIME_FORMAT)
}

/// `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] for a value without a time of day.
pub fn format_date_time<T: Formattable + ?Sized>(value: &T) -> Result<String> {
    format_custom(value, DATE_TIME_FORMAT)
}

/// Zero-padded 12-hour time with meridiem, e.g. `03:30 PM`.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] for a value without a time of day.
pub fn format_time_with_am_pm<T: Formattable + ?Sized>(value: &T) -> Result<String> {
    format_custom(value, AM_PM_TIME_FORMAT)
}

/// English month name, e.g. `March`.
pub fn month_name<T: Formattable + ?Sized>(value: &T) -> String {
    format_date_part(value, MONTH_NAME_FORMAT)
}

/// English day name, e.g. `Friday`.
pub fn day_name<T: Formattable + ?Sized>(value: &T) -> String {
    format_date_part(value, DAY_NAME_FORMAT)
}

/// RFC 2822 rendering, e.g. `Fri, 15 Mar 2024 09:30:00 +0100`.
#[must_use]
pub fn format_rfc2822(value: &DateTime<Tz>) -> String {
    value.format(RFC2822_FORMAT).to_string()
}

/// Seconds since the UNIX epoch.
#[must_use]
pub fn to_unix<Z: TimeZone>(value: &DateTime<Z>) -> i64 {
    value.timestamp()
}

/// Relative phrase for `target` as seen from `now`, e.g. `"3 days ago"`.
#[must_use]
pub fn relative_time<Z: TimeZone>(target: &DateTime<Z>, now: DateTime<Utc>) -> String {
    format_relative(target.with_timezone(&Utc) - now)
}

/// Parse an ISO-8601-like string and re-render it with `pattern`.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for unparseable input and
/// [`DateError::InvalidFormat`] for bad patterns.
pub fn parse_and_format_iso(iso: &str, pattern: &str, zone: &Tz) -> Result<String> {
    let civil = parse_civil(iso, zone)?;
    format_custom(&civil, pattern)
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use chrono_tz::Europe;

    use super::*;
    use crate::zone::localize;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(15, 30, 5).unwrap()
    }

    #[test]
    fn test_fixed_patterns() {
        let value = sample();
        assert_eq!(format_date(&value), "2024-03-15");
        assert_eq!(format_time(&value).unwrap(), "15:30:05");
        assert_eq!(format_date_time(&value).unwrap(), "2024-03-15 15:30:05");
        assert_eq!(format_time_with_am_pm(&value).unwrap(), "03:30 PM");
        assert_eq!(month_name(&value), "March");
        assert_eq!(day_name(&value), "Friday");
    }

    #[test]
    fn test_time_patterns_reject_date_only_values() {
        let date = sample().date();
        assert_eq!(format_date(&date), "2024-03-15");
        assert_eq!(day_name(&date), "Friday");
        assert_eq!(format_time(&date), Err(DateError::InvalidFormat(TIME_FORMAT.into())));
        assert_eq!(
            format_date_time(&date),
            Err(DateError::InvalidFormat(DATE_TIME_FORMAT.into()))
        );
        assert_eq!(
            format_time_with_am_pm(&date),
            Err(DateError::InvalidFormat(AM_PM_TIME_FORMAT.into()))
        );
    }

    #[test]
    fn test_custom_pattern() {
        assert_eq!(format_custom(&sample(), "%A, %B %-d %Y").unwrap(), "Friday, March 15 2024");
        assert_eq!(format_custom(&sample().date(), "%d/%m/%Y").unwrap(), "15/03/2024");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert_eq!(format_custom(&sample(), "%Q"), Err(DateError::InvalidFormat("%Q".into())));
    }

    #[test]
    fn test_offset_on_naive_value_is_rejected() {
        assert!(matches!(format_custom(&sample(), "%H:%M %z"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_rfc2822_and_unix() {
        let zoned = localize(&Europe::Paris, sample()).unwrap();
        assert_eq!(format_rfc2822(&zoned), "Fri, 15 Mar 2024 15:30:05 +0100");
        assert_eq!(to_unix(&zoned), 1_710_513_005);
    }

    #[test]
    fn test_relative_time() {
        let now = sample().and_utc();
        let two_hours_ago = now - TimeDelta::hours(2);
        assert_eq!(relative_time(&two_hours_ago, now), "2 hours ago");
        assert_eq!(relative_time(&(now + TimeDelta::days(3)), now), "in 3 days");
    }

    #[test]
    fn test_parse_and_format_iso() {
        assert_eq!(
            parse_and_format_iso("2024-03-15T15:30:05", "%d %b %Y", &Tz::UTC).unwrap(),
            "15 Mar 2024"
        );
        assert!(matches!(
            parse_and_format_iso("yesterday", "%d %b %Y", &Tz::UTC),
            Err(DateError::InvalidDate { .. })
        ));
    }
}
