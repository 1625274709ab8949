//! Format and calendar constants
//!
//! Centralized location for the default patterns and fixed calendar values
//! used throughout datewise. Patterns use chrono's strftime syntax.

// Default format patterns
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const AM_PM_TIME_FORMAT: &str = "%I:%M %p";
pub const RFC2822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";
pub const MONTH_NAME_FORMAT: &str = "%B";
pub const DAY_NAME_FORMAT: &str = "%A";

// Zone used when no configuration is supplied
pub const DEFAULT_TIMEZONE: &str = "UTC";

// Weekend day-of-week indices (Sunday = 0)
pub const SUNDAY_INDEX: u32 = 0;
pub const SATURDAY_INDEX: u32 = 6;
pub const WEEKDAYS_PER_WEEK: u64 = 5;
