//! "Last N days / months" windows anchored on a civil today

use chrono::{Days, Months, NaiveDateTime};
use datewise_domain::{DateError, RelativeWindow, Result};

use crate::format::format_date;

/// Window from `n` days before `today` up to `today`.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the past date precedes chrono's
/// minimum date.
pub fn last_days(today: NaiveDateTime, n: u64) -> Result<RelativeWindow> {
    let past = today
        .checked_sub_days(Days::new(n))
        .ok_or_else(|| DateError::out_of_range(format!("last {n} days")))?;
    Ok(RelativeWindow::new(format_date(&today), format_date(&past)))
}

/// Window from `n` calendar months before `today` up to `today`. The past
/// day clamps to the end of shorter months.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the past date precedes chrono's
/// minimum date.
pub fn last_months(today: NaiveDateTime, n: u32) -> Result<RelativeWindow> {
    let past = today
        .checked_sub_months(Months::new(n))
        .ok_or_else(|| DateError::out_of_range(format!("last {n} months")))?;
    Ok(RelativeWindow::new(format_date(&today), format_date(&past)))
}

/// # Errors
/// See [`last_days`].
pub fn last_7_days(today: NaiveDateTime) -> Result<RelativeWindow> {
    last_days(today, 7)
}

/// # Errors
/// See [`last_days`].
pub fn last_30_days(today: NaiveDateTime) -> Result<RelativeWindow> {
    last_days(today, 30)
}

/// # Errors
/// See [`last_months`].
pub fn last_3_months(today: NaiveDateTime) -> Result<RelativeWindow> {
    last_months(today, 3)
}

/// # Errors
/// See [`last_months`].
pub fn last_7_months(today: NaiveDateTime) -> Result<RelativeWindow> {
    last_months(today, 7)
}
