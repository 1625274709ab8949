//! Calendar units accepted by arithmetic, rounding and diff operations.

use serde::{Deserialize, Serialize};

/// Unit of calendar time.
///
/// `Week` starts on Sunday (day index 0), `IsoWeek` on Monday. Parsing
/// accepts the singular, plural and short spellings, e.g. `"days"`, `"day"`
/// or `"d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeUnit {
    /// Twelve calendar months.
    Year,
    /// Three calendar months.
    Quarter,
    /// One calendar month; lengths vary.
    Month,
    /// Seven days starting Sunday.
    Week,
    /// Seven days starting Monday.
    IsoWeek,
    /// One calendar day.
    Day,
    /// 60 minutes.
    Hour,
    /// 60 seconds.
    Minute,
    /// 1000 milliseconds.
    Second,
    /// Smallest supported unit.
    Millisecond,
}

crate::impl_unit_conversions!(TimeUnit {
    Year => "year", "years", "y";
    Quarter => "quarter", "quarters", "Q";
    Month => "month", "months", "M";
    Week => "week", "weeks", "w";
    IsoWeek => "isoWeek", "isoWeeks", "W";
    Day => "day", "days", "d";
    Hour => "hour", "hours", "h";
    Minute => "minute", "minutes", "m";
    Second => "second", "seconds", "s";
    Millisecond => "millisecond", "milliseconds", "ms";
});

impl TimeUnit {
    /// Units whose length in the civil calendar varies (months, years).
    #[must_use]
    pub const fn is_calendar(self) -> bool {
        matches!(self, Self::Year | Self::Quarter | Self::Month)
    }

    /// Hours and smaller, which measure elapsed time rather than wall time.
    #[must_use]
    pub const fn is_sub_day(self) -> bool {
        matches!(self, Self::Hour | Self::Minute | Self::Second | Self::Millisecond)
    }

    /// Months per unit for calendar units, `None` for fixed-length units.
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::Year => Some(12),
            Self::Quarter => Some(3),
            Self::Month => Some(1),
            _ => None,
        }
    }

    /// Length in milliseconds for fixed-length units.
    #[must_use]
    pub const fn fixed_millis(self) -> Option<i64> {
        match self {
            Self::Week | Self::IsoWeek => Some(7 * 86_400_000),
            Self::Day => Some(86_400_000),
            Self::Hour => Some(3_600_000),
            Self::Minute => Some(60_000),
            Self::Second => Some(1_000),
            Self::Millisecond => Some(1),
            Self::Year | Self::Quarter | Self::Month => None,
        }
    }
}
