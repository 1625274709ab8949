//! Half-open weekday range scanner
//!
//! Walks every calendar day in `[start, end)` one day at a time and
//! classifies each cursor position as weekend (Sunday = 0, Saturday = 6) or
//! weekday (1–5). The classification never depends on locale.
//!
//! The end point is never visited, even when it falls on a weekday. This is
//! deliberately different from the inclusive
//! [`days_count`](crate::arith::days_count).
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use datewise_core::scan::{collect_weekdays, count_weekdays};
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! assert_eq!(count_weekdays(monday, saturday), 5);
//! assert_eq!(collect_weekdays(monday, saturday).len(), 5);
//! ```

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDateTime, TimeDelta, Weekday};
use datewise_domain::constants::{SATURDAY_INDEX, SUNDAY_INDEX, WEEKDAYS_PER_WEEK};
use tracing::{debug, trace};

/// Whether a day of week is Saturday or Sunday.
#[must_use]
pub fn is_weekend_day(weekday: Weekday) -> bool {
    let index = weekday.num_days_from_sunday();
    index == SUNDAY_INDEX || index == SATURDAY_INDEX
}

/// Whether a day of week is Monday through Friday.
#[must_use]
pub fn is_weekday_day(weekday: Weekday) -> bool {
    !is_weekend_day(weekday)
}

/// Cursor over every calendar day in `[start, end)`.
///
/// Yields `start`, `start + 1 day`, ... while the value is strictly before
/// `end`. Yields nothing when `start >= end`. Time of day is preserved.
#[derive(Debug, Clone)]
pub struct DayCursor {
    cursor: Option<NaiveDateTime>,
    end: NaiveDateTime,
}

impl DayCursor {
    /// Cursor positioned at `start`, stopping before `end`.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { cursor: Some(start), end }
    }
}

impl Iterator for DayCursor {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.filter(|cursor| *cursor < self.end)?;
        // Stepping past chrono's maximum date ends the scan.
        self.cursor = current.checked_add_days(Days::new(1));
        Some(current)
    }
}

impl FusedIterator for DayCursor {}

/// Count the weekdays in `[start, end)`.
///
/// Returns 0 when `start >= end`.
#[must_use]
pub fn count_weekdays(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let mut weekdays = 0_u64;
    let mut scanned = 0_u64;

    for day in DayCursor::new(start, end) {
        scanned += 1;
        if is_weekday_day(day.weekday()) {
            weekdays += 1;
        }
    }

    debug!(%start, %end, weekdays, scanned, "weekday scan complete");
    weekdays
}

/// Collect the weekdays in `[start, end)` in ascending order.
///
/// Each element is an independent copy of the cursor value; `end` is never
/// included.
#[must_use]
pub fn collect_weekdays(start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
    let weekdays: Vec<_> =
        DayCursor::new(start, end).filter(|day| is_weekday_day(day.weekday())).collect();

    trace!(%start, %end, weekdays = weekdays.len(), "weekday collection complete");
    weekdays
}

/// Constant-time equivalent of [`count_weekdays`].
///
/// Counts the cursor positions the scan would visit, then adds five per full
/// week and looks the remaining partial week up day by day.
#[must_use]
pub fn count_weekdays_closed_form(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let days = cursor_positions(start, end);
    let full_weeks = days / 7;
    let remainder = days % 7;
    let first = u64::from(start.weekday().num_days_from_sunday());

    let partial = (0..remainder)
        .map(|offset| (first + offset) % 7)
        .filter(|index| *index != u64::from(SUNDAY_INDEX) && *index != u64::from(SATURDAY_INDEX))
        .count() as u64;

    full_weeks * WEEKDAYS_PER_WEEK + partial
}

/// Number of values `start + k days` (k >= 0) strictly before `end`.
fn cursor_positions(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    if start >= end {
        return 0;
    }

    let whole = (end - start).num_days();
    let lands_before_end = start
        .checked_add_signed(TimeDelta::days(whole))
        .is_some_and(|position| position < end);
    let positions = if lands_before_end { whole + 1 } else { whole };

    u64::try_from(positions).unwrap_or(0)
}
