//! Civil-time foundation
//!
//! Adapter glue over the chrono + chrono-tz timezone database: instant to
//! wall-clock conversion in a named zone and back, plus the small calendar
//! queries the engines share. The tz database itself is consumed, never
//! reimplemented.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use tempo_domain::{ClockTime, Result, TempoError};

// Spring-forward gaps are whole multiples of 15 minutes in the tz database,
// and none exceeds the probe budget (3 hours).
const GAP_PROBE_STEP_MINUTES: i64 = 15;
const GAP_PROBE_LIMIT: usize = 12;

/// Resolve the caller timezone convention against a configured default
///
/// Absent name means the default zone, the empty string means UTC, and any
/// other value must be a known IANA zone name.
pub fn resolve_timezone(name: Option<&str>, default: Tz) -> Result<Tz> {
    match name {
        None => Ok(default),
        Some("") => Ok(Tz::UTC),
        Some(name) => name
            .parse()
            .map_err(|_| TempoError::InvalidInput(format!("unknown timezone \"{}\"", name))),
    }
}

/// Read an instant as wall-clock date/time in the given zone
pub fn to_civil(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

/// Convert a wall-clock reading in the given zone back to an instant
///
/// Total for any input. Ambiguous readings (fall-back overlap) resolve to
/// the earliest instant; nonexistent readings (spring-forward gap) resolve
/// to the first valid wall-clock time after the requested one.
pub fn civil_to_instant(civil: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&civil) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let mut probe = civil;
            for _ in 0..GAP_PROBE_LIMIT {
                probe += Duration::minutes(GAP_PROBE_STEP_MINUTES);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        return dt.with_timezone(&Utc);
                    }
                    LocalResult::None => continue,
                }
            }
            // Unreachable with real tz data; reading the input as UTC keeps
            // the conversion total.
            Utc.from_utc_datetime(&civil)
        }
    }
}

/// A range-checked clock time as a chrono time of day
pub fn naive_time(time: ClockTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour.min(23), time.minute.min(59), 0)
        .expect("clamped clock fields always form a valid time")
}

/// Weekday index of a civil date, 0 = Sunday .. 6 = Saturday
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Full English weekday name of a civil date
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

/// True for Saturday and Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// Number of days in the given month (1-based)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use chrono_tz::America::Sao_Paulo;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn civil(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_resolve_timezone_convention() {
        assert_eq!(resolve_timezone(None, Sao_Paulo).unwrap(), Sao_Paulo);
        assert_eq!(resolve_timezone(Some(""), Sao_Paulo).unwrap(), Tz::UTC);
        assert_eq!(
            resolve_timezone(Some("America/Los_Angeles"), Tz::UTC).unwrap(),
            chrono_tz::America::Los_Angeles
        );
    }

    #[test]
    fn test_resolve_timezone_rejects_unknown_name() {
        let err = resolve_timezone(Some("Mars/Olympus_Mons"), Tz::UTC).unwrap_err();
        assert!(matches!(err, TempoError::InvalidInput(_)));
    }

    #[test]
    fn test_round_trip_through_named_zone() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let local = to_civil(instant, Sao_Paulo);
        assert_eq!(local, civil(2025, 1, 15, 9, 0)); // UTC-3, no DST since 2019
        assert_eq!(civil_to_instant(local, Sao_Paulo), instant);
    }

    #[test]
    fn test_ambiguous_local_time_resolves_to_earliest() {
        // Brazilian DST ended 2019-02-17 00:00; 23:00-23:59 on Feb 16 occurred
        // twice. The earliest reading is the UTC-2 (summer time) one.
        let instant = civil_to_instant(civil(2019, 2, 16, 23, 30), Sao_Paulo);
        assert_eq!(instant, Utc.with_ymd_and_hms(2019, 2, 17, 1, 30, 0).unwrap());
    }

    #[test]
    fn test_gap_local_time_scans_forward() {
        // Brazilian DST began 2018-11-04 00:00, jumping straight to 01:00;
        // 00:30 never happened. First valid reading is 01:00 at UTC-2.
        let instant = civil_to_instant(civil(2018, 11, 4, 0, 30), Sao_Paulo);
        assert_eq!(instant, Utc.with_ymd_and_hms(2018, 11, 4, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_weekday_index_is_sunday_based() {
        assert_eq!(weekday_index(date(2025, 1, 19)), 0); // Sunday
        assert_eq!(weekday_index(date(2025, 1, 20)), 1); // Monday
        assert_eq!(weekday_index(date(2025, 1, 25)), 6); // Saturday
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2025, 1, 18)));
        assert!(is_weekend(date(2025, 1, 19)));
        assert!(!is_weekend(date(2025, 1, 20)));
    }

    #[test]
    fn test_days_in_month_handles_leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_leap_year_century_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn test_weekday_name_full_english() {
        assert_eq!(weekday_name(date(2025, 1, 20)), "Monday");
        assert_eq!(weekday_name(date(2025, 1, 26)), "Sunday");
    }
}
