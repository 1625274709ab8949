//! Comparison and classification predicates

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::scan::{is_weekday_day, is_weekend_day};

/// Whether `date` lies strictly between `start` and `end`.
#[must_use]
pub fn is_between(date: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    start < date && date < end
}

/// Whether `date` is at or before `other`.
#[must_use]
pub fn is_same_or_before(date: NaiveDateTime, other: NaiveDateTime) -> bool {
    date <= other
}

/// Whether `date` is at or after `other`.
#[must_use]
pub fn is_same_or_after(date: NaiveDateTime, other: NaiveDateTime) -> bool {
    date >= other
}

/// Saturday or Sunday.
#[must_use]
pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    is_weekend_day(date.weekday())
}

/// Monday through Friday.
#[must_use]
pub fn is_weekday<D: Datelike>(date: &D) -> bool {
    is_weekday_day(date.weekday())
}

/// Whether chrono's calendar gives `year` 366 days.
///
/// Years outside chrono's supported range are reported as `false`.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|first| first.leap_year())
}

/// Whether `date` falls on any of `holidays`, compared by calendar day.
#[must_use]
pub fn is_holiday<D: Datelike>(date: &D, holidays: &[NaiveDate]) -> bool {
    holidays.iter().any(|holiday| {
        holiday.year() == date.year() && holiday.ordinal() == date.ordinal()
    })
}

/// Whether `[start_a, end_a)` and `[start_b, end_b)` share any instant.
///
/// Ranges that only touch at an endpoint do not overlap.
#[must_use]
pub fn ranges_overlap(
    start_a: NaiveDateTime,
    end_a: NaiveDateTime,
    start_b: NaiveDateTime,
    end_b: NaiveDateTime,
) -> bool {
    start_a < end_b && start_b < end_a
}
