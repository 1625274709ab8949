//! `DateKit`: the façade entry point
//!
//! Owns a [`Clock`], a home zone and a [`KitConfig`]. Loose inputs are parsed
//! into civil date-times in the home zone, handed to the free functions in
//! the sibling modules, and every "now" is read from the clock.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use chrono_tz::Tz;
use datewise_common::time::{Clock, SystemClock};
use datewise_domain::{DateError, KitConfig, RelativeWindow, Result, TimeUnit};
use tracing::debug;

use crate::input::DateInput;
use crate::{arith, calendar, compare, config, format, scan, window, zone};

/// Date utility façade bound to a clock and a home time zone.
///
/// # Examples
///
/// ```
/// use chrono_tz::Europe;
/// use datewise_core::{DateKit, SystemClock, TimeUnit};
///
/// let kit = DateKit::new(SystemClock, Europe::Paris);
/// let end = kit.end_of("2024-02-10", TimeUnit::Month).unwrap();
/// assert_eq!(end.to_string(), "2024-02-29 23:59:59.999");
/// assert_eq!(kit.collect_weekdays("2024-03-04", "2024-03-09").unwrap().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct DateKit<C = SystemClock> {
    clock: C,
    zone: Tz,
    config: KitConfig,
}

impl DateKit<SystemClock> {
    /// System clock, UTC home zone, default patterns.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(SystemClock, Tz::UTC)
    }
}

impl Default for DateKit<SystemClock> {
    fn default() -> Self {
        Self::utc()
    }
}

impl<C: Clock> DateKit<C> {
    /// Kit with default patterns in `zone`.
    pub fn new(clock: C, zone: Tz) -> Self {
        let config = KitConfig::with_timezone(zone.name());
        Self { clock, zone, config }
    }

    /// Kit built from a loaded configuration.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`] or [`DateError::InvalidFormat`]
    /// if the configuration holds bad values.
    pub fn from_config(config: KitConfig, clock: C) -> Result<Self> {
        config::validate(&config)?;
        let zone = config.zone()?;
        debug!(zone = %zone, date_format = %config.date_format, "date kit configured");
        Ok(Self { clock, zone, config })
    }

    /// Home zone that civil inputs are read in.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Validated configuration, including the output patterns.
    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    /// Clock every "now" is read from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn civil(&self, input: impl DateInput) -> Result<NaiveDateTime> {
        input.to_civil(&self.zone)
    }

    fn zoned(&self, input: impl DateInput) -> Result<DateTime<Tz>> {
        zone::localize(&self.zone, self.civil(input)?)
    }

    // ---------------------------------------------------------------------
    // Now
    // ---------------------------------------------------------------------

    /// Current instant in the home zone.
    pub fn now(&self) -> DateTime<Tz> {
        zone::current_time_in_zone(self.clock.now(), &self.zone)
    }

    /// Current civil date-time in the home zone.
    pub fn today(&self) -> NaiveDateTime {
        self.now().naive_local()
    }

    /// Today rendered with the configured date pattern.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidFormat`] if the pattern cannot be rendered.
    pub fn current_date(&self) -> Result<String> {
        render(&self.now(), &self.config.date_format)
    }

    /// Current month, 1 through 12.
    pub fn current_month(&self) -> u32 {
        self.today().month()
    }

    /// Current month's English name.
    pub fn current_month_name(&self) -> String {
        format::month_name(&self.today())
    }

    /// Current year in the home zone.
    pub fn current_year(&self) -> i32 {
        self.today().year()
    }

    /// Current day of the month.
    pub fn current_day(&self) -> u32 {
        self.today().day()
    }

    /// Current time rendered with the configured time pattern.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidFormat`] if the pattern cannot be rendered.
    pub fn current_time(&self) -> Result<String> {
        render(&self.now(), &self.config.time_format)
    }

    // ---------------------------------------------------------------------
    // Formatting
    // ---------------------------------------------------------------------

    /// Render with the configured date pattern.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::InvalidFormat`] if the pattern cannot be rendered.
    pub fn format_date(&self, input: impl DateInput) -> Result<String> {
        render(&self.zoned(input)?, &self.config.date_format)
    }

    /// Render with the configured time pattern.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::InvalidFormat`] if the pattern cannot be rendered.
    pub fn format_time(&self, input: impl DateInput) -> Result<String> {
        render(&self.zoned(input)?, &self.config.time_format)
    }

    /// Render with the configured date-time pattern.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::InvalidFormat`] if the pattern cannot be rendered.
    pub fn format_date_time(&self, input: impl DateInput) -> Result<String> {
        render(&self.zoned(input)?, &self.config.date_time_format)
    }

    /// Render with an arbitrary strftime pattern; `%z` and `%Z` use the home
    /// zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::InvalidFormat`] for bad patterns.
    pub fn format_custom(&self, input: impl DateInput, pattern: &str) -> Result<String> {
        format::format_custom(&self.zoned(input)?, pattern)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::InvalidFormat`] for bad patterns.
    pub fn parse_and_format_iso(&self, iso: &str, pattern: &str) -> Result<String> {
        format::parse_and_format_iso(iso, pattern, &self.zone)
    }

    /// `hh:mm AM/PM`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn format_time_with_am_pm(&self, input: impl DateInput) -> Result<String> {
        format::format_time_with_am_pm(&self.civil(input)?)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn month_name(&self, input: impl DateInput) -> Result<String> {
        Ok(format::month_name(&self.civil(input)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn day_name(&self, input: impl DateInput) -> Result<String> {
        Ok(format::day_name(&self.civil(input)?))
    }

    /// RFC 2822 in the home zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn format_rfc2822(&self, input: impl DateInput) -> Result<String> {
        Ok(format::format_rfc2822(&self.zoned(input)?))
    }

    /// Seconds since the UNIX epoch, reading civil input in the home zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn to_unix(&self, input: impl DateInput) -> Result<i64> {
        Ok(format::to_unix(&self.zoned(input)?))
    }

    /// Relative phrase against the clock, e.g. `"3 days ago"`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn relative_time(&self, input: impl DateInput) -> Result<String> {
        Ok(format::relative_time(&self.zoned(input)?, self.clock.now()))
    }

    // ---------------------------------------------------------------------
    // Windows
    // ---------------------------------------------------------------------

    /// # Errors
    /// Returns [`DateError::OutOfRange`] if the window leaves chrono's range.
    pub fn last_days(&self, n: u64) -> Result<RelativeWindow> {
        window::last_days(self.today(), n)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] if the window leaves chrono's range.
    pub fn last_months(&self, n: u32) -> Result<RelativeWindow> {
        window::last_months(self.today(), n)
    }

    /// # Errors
    /// See [`Self::last_days`].
    pub fn last_7_days(&self) -> Result<RelativeWindow> {
        window::last_7_days(self.today())
    }

    /// # Errors
    /// See [`Self::last_days`].
    pub fn last_30_days(&self) -> Result<RelativeWindow> {
        window::last_30_days(self.today())
    }

    /// # Errors
    /// See [`Self::last_months`].
    pub fn last_3_months(&self) -> Result<RelativeWindow> {
        window::last_3_months(self.today())
    }

    /// # Errors
    /// See [`Self::last_months`].
    pub fn last_7_months(&self) -> Result<RelativeWindow> {
        window::last_7_months(self.today())
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------

    /// Hours and smaller units move elapsed time in the home zone, so one
    /// hour after `01:30` on a spring-forward night is `03:30`. Days and
    /// larger units keep the wall time.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::OutOfRange`] on overflow.
    pub fn add(&self, input: impl DateInput, amount: i64, unit: TimeUnit) -> Result<NaiveDateTime> {
        arith::add_in_zone(self.civil(input)?, amount, unit, &self.zone)
    }

    /// Inverse of [`Self::add`], with the same elapsed-time rule for hours
    /// and smaller units.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input and
    /// [`DateError::OutOfRange`] on overflow.
    pub fn subtract(
        &self,
        input: impl DateInput,
        amount: i64,
        unit: TimeUnit,
    ) -> Result<NaiveDateTime> {
        arith::subtract_in_zone(self.civil(input)?, amount, unit, &self.zone)
    }

    /// [`Self::add`] with the unit given by name or alias (`"days"`, `"M"`).
    ///
    /// # Errors
    /// Also returns [`DateError::InvalidUnit`] for unknown unit names.
    pub fn add_by_name(
        &self,
        input: impl DateInput,
        amount: i64,
        unit: &str,
    ) -> Result<NaiveDateTime> {
        self.add(input, amount, TimeUnit::from_str(unit)?)
    }

    /// [`Self::subtract`] with the unit given by name or alias.
    ///
    /// # Errors
    /// Also returns [`DateError::InvalidUnit`] for unknown unit names.
    pub fn subtract_by_name(
        &self,
        input: impl DateInput,
        amount: i64,
        unit: &str,
    ) -> Result<NaiveDateTime> {
        self.subtract(input, amount, TimeUnit::from_str(unit)?)
    }

    /// [`Self::start_of`] with the unit given by name or alias.
    ///
    /// # Errors
    /// Also returns [`DateError::InvalidUnit`] for unknown unit names.
    pub fn start_of_by_name(&self, input: impl DateInput, unit: &str) -> Result<NaiveDateTime> {
        self.start_of(input, TimeUnit::from_str(unit)?)
    }

    /// [`Self::end_of`] with the unit given by name or alias.
    ///
    /// # Errors
    /// Also returns [`DateError::InvalidUnit`] for unknown unit names.
    pub fn end_of_by_name(&self, input: impl DateInput, unit: &str) -> Result<NaiveDateTime> {
        self.end_of(input, TimeUnit::from_str(unit)?)
    }

    /// [`Self::diff`] with the unit given by name or alias.
    ///
    /// # Errors
    /// Also returns [`DateError::InvalidUnit`] for unknown unit names.
    pub fn diff_by_name(
        &self,
        start: impl DateInput,
        end: impl DateInput,
        unit: &str,
    ) -> Result<i64> {
        self.diff(start, end, TimeUnit::from_str(unit)?)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn start_of(&self, input: impl DateInput, unit: TimeUnit) -> Result<NaiveDateTime> {
        arith::start_of(self.civil(input)?, unit)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn end_of(&self, input: impl DateInput, unit: TimeUnit) -> Result<NaiveDateTime> {
        arith::end_of(self.civil(input)?, unit)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn add_weeks(&self, input: impl DateInput, weeks: i64) -> Result<NaiveDateTime> {
        arith::add_weeks(self.civil(input)?, weeks)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn subtract_weeks(&self, input: impl DateInput, weeks: i64) -> Result<NaiveDateTime> {
        arith::subtract_weeks(self.civil(input)?, weeks)
    }

    /// Whole `unit`s from `start` to `end`, truncated toward zero.
    ///
    /// Hours and smaller units count elapsed time in the home zone, so the
    /// spring-forward day in New York is 23 hours long.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn diff(&self, start: impl DateInput, end: impl DateInput, unit: TimeUnit) -> Result<i64> {
        arith::diff_in_zone(self.civil(start)?, self.civil(end)?, unit, &self.zone)
    }

    /// Inclusive day count.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn days_count(&self, start: impl DateInput, end: impl DateInput) -> Result<i64> {
        Ok(arith::days_count(self.civil(start)?, self.civil(end)?))
    }

    /// Exclusive day count.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn total_days_between(&self, start: impl DateInput, end: impl DateInput) -> Result<i64> {
        Ok(arith::total_days_between(self.civil(start)?, self.civil(end)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn next_day_of_week(
        &self,
        input: impl DateInput,
        weekday: Weekday,
    ) -> Result<NaiveDateTime> {
        arith::next_day_of_week(self.civil(input)?, weekday)
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn previous_day_of_week(
        &self,
        input: impl DateInput,
        weekday: Weekday,
    ) -> Result<NaiveDateTime> {
        arith::previous_day_of_week(self.civil(input)?, weekday)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn days_from_now(&self, days: i64) -> Result<NaiveDateTime> {
        arith::add(self.today(), days, TimeUnit::Day)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn weeks_from_now(&self, weeks: i64) -> Result<NaiveDateTime> {
        arith::add(self.today(), weeks, TimeUnit::Week)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn months_from_now(&self, months: i64) -> Result<NaiveDateTime> {
        arith::add(self.today(), months, TimeUnit::Month)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn years_from_now(&self, years: i64) -> Result<NaiveDateTime> {
        arith::add(self.today(), years, TimeUnit::Year)
    }

    /// Whole days from now until `target`; negative once it has passed.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn days_until(&self, target: impl DateInput) -> Result<i64> {
        Ok(arith::diff(self.today(), self.civil(target)?, TimeUnit::Day))
    }

    /// Completed years since `birth`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn calculate_age(&self, birth: impl DateInput) -> Result<i64> {
        Ok(arith::diff(self.civil(birth)?, self.today(), TimeUnit::Year))
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn start_of_next_month(&self) -> Result<NaiveDateTime> {
        arith::start_of(arith::add(self.today(), 1, TimeUnit::Month)?, TimeUnit::Month)
    }

    /// # Errors
    /// Returns [`DateError::OutOfRange`] on overflow.
    pub fn end_of_previous_month(&self) -> Result<NaiveDateTime> {
        arith::end_of(arith::subtract(self.today(), 1, TimeUnit::Month)?, TimeUnit::Month)
    }

    // ---------------------------------------------------------------------
    // Comparison
    // ---------------------------------------------------------------------

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_between(
        &self,
        input: impl DateInput,
        start: impl DateInput,
        end: impl DateInput,
    ) -> Result<bool> {
        Ok(compare::is_between(self.civil(input)?, self.civil(start)?, self.civil(end)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_same_or_before(&self, input: impl DateInput, other: impl DateInput) -> Result<bool> {
        Ok(compare::is_same_or_before(self.civil(input)?, self.civil(other)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_same_or_after(&self, input: impl DateInput, other: impl DateInput) -> Result<bool> {
        Ok(compare::is_same_or_after(self.civil(input)?, self.civil(other)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_weekend(&self, input: impl DateInput) -> Result<bool> {
        Ok(compare::is_weekend(&self.civil(input)?))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_weekday(&self, input: impl DateInput) -> Result<bool> {
        Ok(compare::is_weekday(&self.civil(input)?))
    }

    /// Whether the year of `input` is a leap year.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_leap_year(&self, input: impl DateInput) -> Result<bool> {
        Ok(compare::is_leap_year(self.civil(input)?.year()))
    }

    /// Each holiday string is parsed like any other input.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if `input` or any holiday is
    /// unparseable.
    pub fn is_holiday<I: DateInput>(&self, input: impl DateInput, holidays: &[I]) -> Result<bool> {
        let holidays = holidays
            .iter()
            .map(|holiday| self.civil(holiday).map(|civil| civil.date()))
            .collect::<Result<Vec<NaiveDate>>>()?;
        Ok(compare::is_holiday(&self.civil(input)?, &holidays))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn ranges_overlap(
        &self,
        start_a: impl DateInput,
        end_a: impl DateInput,
        start_b: impl DateInput,
        end_b: impl DateInput,
    ) -> Result<bool> {
        Ok(compare::ranges_overlap(
            self.civil(start_a)?,
            self.civil(end_a)?,
            self.civil(start_b)?,
            self.civil(end_b)?,
        ))
    }

    /// Same calendar day as the clock's today.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_today(&self, input: impl DateInput) -> Result<bool> {
        Ok(self.civil(input)?.date() == self.today().date())
    }

    /// Calendar day strictly before today.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_past(&self, input: impl DateInput) -> Result<bool> {
        Ok(self.civil(input)?.date() < self.today().date())
    }

    /// Calendar day strictly after today.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_future(&self, input: impl DateInput) -> Result<bool> {
        Ok(self.civil(input)?.date() > self.today().date())
    }

    /// Whether DST is in effect at `input` in the home zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn is_dst(&self, input: impl DateInput) -> Result<bool> {
        Ok(zone::is_dst(&self.zoned(input)?))
    }

    // ---------------------------------------------------------------------
    // Calendar facts
    // ---------------------------------------------------------------------

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn days_in_month(&self, input: impl DateInput) -> Result<u32> {
        let civil = self.civil(input)?;
        calendar::days_in_month(civil.year(), civil.month())
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn week_number(&self, input: impl DateInput) -> Result<u32> {
        Ok(calendar::week_number(self.civil(input)?.date()))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn iso_week(&self, input: impl DateInput) -> Result<u32> {
        Ok(calendar::iso_week(self.civil(input)?.date()))
    }

    /// # Errors
    /// Returns [`DateError::InvalidDate`] for unparseable input.
    pub fn quarter(&self, input: impl DateInput) -> Result<u32> {
        Ok(calendar::quarter(&self.civil(input)?))
    }

    // ---------------------------------------------------------------------
    // Zones
    // ---------------------------------------------------------------------

    /// Current instant in the named zone.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`] for unknown names.
    pub fn current_time_in_zone(&self, zone_name: &str) -> Result<DateTime<Tz>> {
        Ok(zone::current_time_in_zone(self.clock.now(), &zone::parse_zone(zone_name)?))
    }

    /// Read `time` as a wall time in `from` and express it in `to`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`] for unknown names and
    /// [`DateError::InvalidDate`] for unparseable input.
    pub fn convert_between_zones(
        &self,
        time: impl DateInput,
        from: &str,
        to: &str,
    ) -> Result<DateTime<Tz>> {
        let from = zone::parse_zone(from)?;
        let to = zone::parse_zone(to)?;
        zone::convert_between_zones(time.to_civil(&from)?, &from, &to)
    }

    /// Offset of `to` minus offset of `from`, in hours, at the clock's now.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`] for unknown names.
    pub fn offset_difference_hours(&self, from: &str, to: &str) -> Result<f64> {
        Ok(zone::offset_difference_hours(
            self.clock.now(),
            &zone::parse_zone(from)?,
            &zone::parse_zone(to)?,
        ))
    }

    /// # Errors
    /// Returns [`DateError::InvalidTimeZone`], [`DateError::InvalidDate`] or
    /// [`DateError::InvalidFormat`].
    pub fn format_time_in_zone(
        &self,
        time: impl DateInput,
        zone_name: &str,
        pattern: &str,
    ) -> Result<String> {
        let target = zone::parse_zone(zone_name)?;
        zone::format_time_in_zone(time.to_civil(&target)?, &target, pattern)
    }

    // ---------------------------------------------------------------------
    // Range scanning
    // ---------------------------------------------------------------------

    /// Weekdays in `[start, end)`.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if either endpoint is unparseable.
    pub fn count_weekdays(&self, start: impl DateInput, end: impl DateInput) -> Result<u64> {
        Ok(scan::count_weekdays(self.civil(start)?, self.civil(end)?))
    }

    /// Weekday cursor values in `[start, end)`, ascending.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if either endpoint is unparseable.
    pub fn collect_weekdays(
        &self,
        start: impl DateInput,
        end: impl DateInput,
    ) -> Result<Vec<NaiveDateTime>> {
        Ok(scan::collect_weekdays(self.civil(start)?, self.civil(end)?))
    }

    /// Alias of [`Self::count_weekdays`].
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if either endpoint is unparseable.
    pub fn business_days(&self, start: impl DateInput, end: impl DateInput) -> Result<u64> {
        self.count_weekdays(start, end)
    }

    /// Alias of [`Self::count_weekdays`].
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if either endpoint is unparseable.
    pub fn total_business_days_between(
        &self,
        start: impl DateInput,
        end: impl DateInput,
    ) -> Result<u64> {
        self.count_weekdays(start, end)
    }
}

fn render(value: &DateTime<Tz>, pattern: &str) -> Result<String> {
    format::format_custom(value, pattern)
}
