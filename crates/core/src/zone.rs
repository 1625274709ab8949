//! Time zone façade over `chrono-tz`
//!
//! Offset rules and DST transitions come from the IANA database compiled
//! into `chrono-tz`; this module only resolves names and wall-clock times.

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz, TZ_VARIANTS};
use datewise_domain::{DateError, Result};
use tracing::{debug, warn};

use crate::format::format_custom;

/// Resolve an IANA zone name such as `"America/New_York"`.
///
/// # Errors
/// Returns [`DateError::InvalidTimeZone`] for unknown names.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| DateError::InvalidTimeZone(name.to_string()))
}

/// Attach `zone` to a civil date-time.
///
/// Ambiguous wall times (clocks turned back) resolve to the earlier instant.
/// Wall times inside a gap (clocks turned forward) keep the offset in force
/// before the gap, which lands them after it: `02:30` on a spring-forward
/// night in New York becomes `03:30` EDT.
///
/// # Errors
/// Returns [`DateError::OutOfRange`] if the time cannot be placed at all,
/// which only happens at the edges of chrono's range.
pub fn localize(zone: &Tz, civil: NaiveDateTime) -> Result<DateTime<Tz>> {
    match zone.from_local_datetime(&civil) {
        chrono::LocalResult::Single(zoned) => Ok(zoned),
        chrono::LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        chrono::LocalResult::None => {
            let before_gap = civil
                .checked_sub_signed(TimeDelta::days(1))
                .and_then(|day_before| zone.from_local_datetime(&day_before).earliest())
                .ok_or_else(|| DateError::out_of_range("localize"))?;
            let offset = before_gap.offset().fix();
            let utc = civil
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(|| DateError::out_of_range("localize"))?;
            let zoned = zone.from_utc_datetime(&utc);
            warn!(%civil, zone = %zone, resolved = %zoned, "local time falls in a DST gap");
            Ok(zoned)
        }
    }
}

/// Current time in `zone`.
#[must_use]
pub fn current_time_in_zone(now: DateTime<Utc>, zone: &Tz) -> DateTime<Tz> {
    now.with_timezone(zone)
}

/// Reinterpret a wall time from one zone as the same instant in another.
///
/// # Errors
/// See [`localize`].
pub fn convert_between_zones(time: NaiveDateTime, from: &Tz, to: &Tz) -> Result<DateTime<Tz>> {
    let converted = localize(from, time)?.with_timezone(to);
    debug!(%time, from = %from, to = %to, %converted, "converted between zones");
    Ok(converted)
}

/// Offset of `to` minus offset of `from` at instant `now`, in hours.
///
/// Fractional zones come through as fractions, e.g. `5.5` for Kolkata vs UTC.
#[must_use]
pub fn offset_difference_hours(now: DateTime<Utc>, from: &Tz, to: &Tz) -> f64 {
    let from_secs = now.with_timezone(from).offset().fix().local_minus_utc();
    let to_secs = now.with_timezone(to).offset().fix().local_minus_utc();
    f64::from(to_secs - from_secs) / 3_600.0
}

/// Format a wall time taken in `zone` with a strftime pattern.
///
/// # Errors
/// Returns [`DateError::InvalidFormat`] for invalid patterns, or the errors of
/// [`localize`].
pub fn format_time_in_zone(time: NaiveDateTime, zone: &Tz, pattern: &str) -> Result<String> {
    format_custom(&localize(zone, time)?, pattern)
}

/// Whether daylight saving time is in effect at `time` in its zone.
#[must_use]
pub fn is_dst(time: &DateTime<Tz>) -> bool {
    !time.offset().dst_offset().is_zero()
}

/// Every zone name in the compiled IANA database.
#[must_use]
pub fn all_time_zones() -> Vec<&'static str> {
    TZ_VARIANTS.iter().map(|zone| zone.name()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use chrono_tz::{America, Asia, Europe};

    use super::*;

    fn civil(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone("Europe/Paris").unwrap(), Europe::Paris);
        assert_eq!(
            parse_zone("Nowhere/Special"),
            Err(DateError::InvalidTimeZone("Nowhere/Special".into()))
        );
    }

    #[test]
    fn test_convert_new_york_to_tokyo() {
        let converted =
            convert_between_zones(civil(2024, 1, 15, 9, 0), &America::New_York, &Asia::Tokyo)
                .unwrap();
        assert_eq!(converted.naive_local(), civil(2024, 1, 15, 23, 0));
    }

    #[test]
    fn test_gap_time_moves_forward() {
        // 2024-03-10 02:00 EST jumps to 03:00 EDT in New York
        let zoned = localize(&America::New_York, civil(2024, 3, 10, 2, 30)).unwrap();
        assert_eq!(zoned.naive_local(), civil(2024, 3, 10, 3, 30));
        assert_eq!(zoned.hour(), 3);
    }

    #[test]
    fn test_ambiguous_time_takes_earliest() {
        // 2024-11-03 01:30 occurs twice in New York; the first is EDT (UTC-4)
        let zoned = localize(&America::New_York, civil(2024, 11, 3, 1, 30)).unwrap();
        assert_eq!(zoned.offset().fix().local_minus_utc(), -4 * 3_600);
    }

    #[test]
    fn test_offset_difference() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

        let cases = [
            (winter, Tz::UTC, Asia::Kolkata, 5.5),
            (winter, America::New_York, Europe::London, 5.0),
            (summer, Europe::Berlin, America::Los_Angeles, -9.0),
        ];
        for (now, from, to, expected) in cases {
            let hours = offset_difference_hours(now, &from, &to);
            assert!((hours - expected).abs() < f64::EPSILON, "{from} -> {to}: {hours}");
        }
    }

    #[test]
    fn test_is_dst() {
        let summer = localize(&Europe::Berlin, civil(2024, 7, 1, 12, 0)).unwrap();
        let winter = localize(&Europe::Berlin, civil(2024, 1, 1, 12, 0)).unwrap();
        assert!(is_dst(&summer));
        assert!(!is_dst(&winter));
        assert!(!is_dst(&localize(&Tz::UTC, civil(2024, 7, 1, 12, 0)).unwrap()));
    }

    #[test]
    fn test_format_time_in_zone() {
        let formatted =
            format_time_in_zone(civil(2024, 7, 1, 8, 5), &Europe::Berlin, "%H:%M %Z").unwrap();
        assert_eq!(formatted, "08:05 CEST");
    }

    #[test]
    fn test_all_time_zones_contains_common_names() {
        let names = all_time_zones();
        assert!(names.len() > 400);
        assert!(names.contains(&"UTC"));
        assert!(names.contains(&"America/New_York"));
    }
}
