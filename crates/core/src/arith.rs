//! Calendar arithmetic façade
//!
//! All operations work on civil [`NaiveDateTime`] values and return civil
//! values; callers format separately. Month-based units clamp to the end of
//! the target month (Jan 31 + 1 month = Feb 29 in a leap year), which is
//! chrono's behaviour. The `*_in_zone` variants measure hours and smaller
//! units as elapsed time in a zone, so DST transitions are honoured.

use chrono::{
    Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday,
};
use chrono_tz::Tz;
use datewise_domain::{DateError, Result, TimeUnit};

use crate::zone::localize;

/// Add `amount` units to `date`. Negative amounts move backwards.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn add(date: NaiveDateTime, amount: i64, unit: TimeUnit) -> Result<NaiveDateTime> {
    let shifted = match (unit.months(), unit.fixed_millis()) {
        (Some(months_per_unit), _) => amount
            .checked_mul(i64::from(months_per_unit))
            .and_then(|months| shift_months(date, months)),
        (None, Some(millis_per_unit)) => amount
            .checked_mul(millis_per_unit)
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|delta| date.checked_add_signed(delta)),
        (None, None) => None,
    };

    shifted.ok_or_else(|| DateError::out_of_range(format!("add {amount} {unit}")))
}

/// Subtract `amount` units from `date`.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn subtract(date: NaiveDateTime, amount: i64, unit: TimeUnit) -> Result<NaiveDateTime> {
    add(date, negate(amount, unit)?, unit)
}

/// [`add`] for a wall time read in `zone`.
///
/// Hours and smaller move the underlying instant and return the wall time
/// it shows: one hour after `01:30` on the New York spring-forward night is
/// `03:30`. Days and larger units behave exactly like [`add`].
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn add_in_zone(
    date: NaiveDateTime,
    amount: i64,
    unit: TimeUnit,
    zone: &Tz,
) -> Result<NaiveDateTime> {
    if !unit.is_sub_day() {
        return add(date, amount, unit);
    }

    let out_of_range = || DateError::out_of_range(format!("add {amount} {unit} in {zone}"));
    let delta = unit
        .fixed_millis()
        .and_then(|millis_per_unit| amount.checked_mul(millis_per_unit))
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(out_of_range)?;
    localize(zone, date)?
        .checked_add_signed(delta)
        .map(|shifted| shifted.naive_local())
        .ok_or_else(out_of_range)
}

/// [`subtract`] for a wall time read in `zone`; see [`add_in_zone`].
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn subtract_in_zone(
    date: NaiveDateTime,
    amount: i64,
    unit: TimeUnit,
    zone: &Tz,
) -> Result<NaiveDateTime> {
    add_in_zone(date, negate(amount, unit)?, unit, zone)
}

/// Add whole weeks.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn add_weeks(date: NaiveDateTime, weeks: i64) -> Result<NaiveDateTime> {
    add(date, weeks, TimeUnit::Week)
}

/// Subtract whole weeks.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the result leaves chrono's range.
pub fn subtract_weeks(date: NaiveDateTime, weeks: i64) -> Result<NaiveDateTime> {
    subtract(date, weeks, TimeUnit::Week)
}

/// First instant of the unit containing `date`.
///
/// `Week` starts on Sunday, `IsoWeek` on Monday.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the start of the week falls before
/// chrono's minimum date.
pub fn start_of(date: NaiveDateTime, unit: TimeUnit) -> Result<NaiveDateTime> {
    let day = date.date();
    let start = match unit {
        TimeUnit::Year => NaiveDate::from_ymd_opt(day.year(), 1, 1).map(midnight),
        TimeUnit::Quarter => {
            let first_month = (day.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(day.year(), first_month, 1).map(midnight)
        }
        TimeUnit::Month => day.with_day(1).map(midnight),
        TimeUnit::Week => day
            .checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_sunday())))
            .map(midnight),
        TimeUnit::IsoWeek => day
            .checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
            .map(midnight),
        TimeUnit::Day => Some(midnight(day)),
        TimeUnit::Hour => date
            .with_minute(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0)),
        TimeUnit::Minute => date.with_second(0).and_then(|d| d.with_nanosecond(0)),
        TimeUnit::Second => date.with_nanosecond(0),
        TimeUnit::Millisecond => {
            let nanos = date.nanosecond();
            date.with_nanosecond(nanos - nanos % 1_000_000)
        }
    };

    start.ok_or_else(|| DateError::out_of_range(format!("start of {unit}")))
}

/// Last millisecond of the unit containing `date`, e.g. `23:59:59.999` for
/// a day.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the next unit leaves chrono's range.
pub fn end_of(date: NaiveDateTime, unit: TimeUnit) -> Result<NaiveDateTime> {
    let next = add(start_of(date, unit)?, 1, unit)?;
    next.checked_sub_signed(TimeDelta::milliseconds(1))
        .ok_or_else(|| DateError::out_of_range(format!("end of {unit}")))
}

/// Signed distance from `start` to `end` in whole units, truncated toward
/// zero.
///
/// Month, quarter and year distances count calendar months: Jan 15 to
/// Feb 14 is 0 months, Jan 15 to Feb 15 is 1.
#[must_use]
pub fn diff(start: NaiveDateTime, end: NaiveDateTime, unit: TimeUnit) -> i64 {
    match (unit.months(), unit.fixed_millis()) {
        (Some(months_per_unit), _) => {
            whole_months_between(start, end) / i64::from(months_per_unit)
        }
        (None, Some(millis_per_unit)) => (end - start).num_milliseconds() / millis_per_unit,
        (None, None) => 0,
    }
}

/// [`diff`] for wall times read in `zone`.
///
/// Hours and smaller count elapsed time: midnight to midnight across the
/// New York spring-forward day is 23 hours. Days and larger units behave
/// exactly like [`diff`].
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if either wall time cannot be placed in
/// `zone`.
pub fn diff_in_zone(
    start: NaiveDateTime,
    end: NaiveDateTime,
    unit: TimeUnit,
    zone: &Tz,
) -> Result<i64> {
    match unit.fixed_millis() {
        Some(millis_per_unit) if unit.is_sub_day() => {
            let elapsed = localize(zone, end)? - localize(zone, start)?;
            Ok(elapsed.num_milliseconds() / millis_per_unit)
        }
        _ => Ok(diff(start, end, unit)),
    }
}

/// Whole days from `start` to `end`, end exclusive.
#[must_use]
pub fn total_days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    diff(start, end, TimeUnit::Day)
}

/// Days from `start` to `end` counting both ends: `total_days_between + 1`.
///
/// This inclusive count is intentionally distinct from the half-open
/// weekday scan in [`crate::scan`].
#[must_use]
pub fn days_count(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    total_days_between(start, end) + 1
}

/// `weekday` in the Sunday-based week after the one containing `date`.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] near chrono's maximum date.
pub fn next_day_of_week(date: NaiveDateTime, weekday: Weekday) -> Result<NaiveDateTime> {
    shift_to_weekday(date, weekday, 7)
}

/// `weekday` in the Sunday-based week before the one containing `date`.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] near chrono's minimum date.
pub fn previous_day_of_week(date: NaiveDateTime, weekday: Weekday) -> Result<NaiveDateTime> {
    shift_to_weekday(date, weekday, -7)
}

fn negate(amount: i64, unit: TimeUnit) -> Result<i64> {
    amount
        .checked_neg()
        .ok_or_else(|| DateError::out_of_range(format!("subtract {amount} {unit}")))
}

fn shift_to_weekday(
    date: NaiveDateTime,
    weekday: Weekday,
    week_offset: i64,
) -> Result<NaiveDateTime> {
    let current = i64::from(date.weekday().num_days_from_sunday());
    let target = i64::from(weekday.num_days_from_sunday());
    date.checked_add_signed(TimeDelta::days(target - current + week_offset))
        .ok_or_else(|| DateError::out_of_range(format!("shift to {weekday}")))
}

fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn shift_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month()) - i64::from(start.month()));

    let anchor = shift_months(start, months);
    if months > 0 && anchor.is_some_and(|anchor| anchor > end) {
        months -= 1;
    } else if months < 0 && anchor.is_some_and(|anchor| anchor < end) {
        months += 1;
    }
    months
}
