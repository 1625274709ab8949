//! Calendar facts: month lengths, week numbering, quarter and year bounds
//!
//! "Last day" helpers return the last millisecond of the period
//! (`23:59:59.999`) so the result is still inside it.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use datewise_domain::{DateError, Result, TimeUnit};

use crate::arith::end_of;

const QUARTERS_PER_YEAR: u32 = 4;
const MONTHS_PER_QUARTER: u32 = 3;

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DateError::invalid_date(format!("{year}-{month:02}"), "month must be between 1 and 12")
    })
}

fn first_month_of_quarter(year: i32, quarter: u32) -> Result<u32> {
    if (1..=QUARTERS_PER_YEAR).contains(&quarter) {
        Ok((quarter - 1) * MONTHS_PER_QUARTER + 1)
    } else {
        Err(DateError::invalid_date(
            format!("{year}-Q{quarter}"),
            "quarter must be between 1 and 4",
        ))
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for months outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let last = end_of(first.and_time(NaiveTime::MIN), TimeUnit::Month)?;
    Ok(last.day())
}

/// Sunday-start week of year. Week 1 is the week containing 1 January, so
/// the last days of December can belong to week 1 of the next year.
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    let to_saturday = 6 - date.weekday().num_days_from_sunday();
    let saturday = date.checked_add_days(Days::new(u64::from(to_saturday))).unwrap_or(date);
    saturday.ordinal0() / 7 + 1
}

/// ISO 8601 week number (Monday start, week 1 holds the first Thursday).
#[must_use]
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Quarter of the year, 1 through 4.
#[must_use]
pub fn quarter<D: Datelike>(date: &D) -> u32 {
    date.month0() / MONTHS_PER_QUARTER + 1
}

/// Number of ISO weeks in `year`: 52 or 53.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for years outside chrono's range.
pub fn weeks_in_year(year: i32) -> Result<u32> {
    // 28 December always falls in the last ISO week of its year
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|day| day.iso_week().week())
        .ok_or_else(|| DateError::invalid_date(year.to_string(), "year out of range"))
}

/// Midnight on the first day of `month`.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for months outside 1..=12.
pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDateTime> {
    Ok(first_of_month(year, month)?.and_time(NaiveTime::MIN))
}

/// Last millisecond of `month`.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for months outside 1..=12.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDateTime> {
    end_of(first_day_of_month(year, month)?, TimeUnit::Month)
}

/// Midnight on the first day of `quarter` (1 through 4).
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for quarters outside 1..=4.
pub fn first_day_of_quarter(year: i32, quarter: u32) -> Result<NaiveDateTime> {
    first_day_of_month(year, first_month_of_quarter(year, quarter)?)
}

/// Last millisecond of `quarter`.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for quarters outside 1..=4.
pub fn last_day_of_quarter(year: i32, quarter: u32) -> Result<NaiveDateTime> {
    end_of(first_day_of_quarter(year, quarter)?, TimeUnit::Quarter)
}

/// Midnight on 1 January.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for years outside chrono's range.
pub fn first_day_of_year(year: i32) -> Result<NaiveDateTime> {
    first_day_of_month(year, 1)
        .map_err(|_| DateError::invalid_date(year.to_string(), "year out of range"))
}

/// Last millisecond of 31 December.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] for years outside chrono's range.
pub fn last_day_of_year(year: i32) -> Result<NaiveDateTime> {
    end_of(first_day_of_year(year)?, TimeUnit::Year)
}
