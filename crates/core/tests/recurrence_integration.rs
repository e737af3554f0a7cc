//! Integration tests for the recurrence resolver.
//!
//! These exercise `next_occurrence` through the public API: the strict-future
//! invariant across every variant, timezone-convention handling, and the
//! clamping rules around month lengths and leap years.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;
use tempo_core::next_occurrence;
use tempo_domain::RecurrenceSpec;

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Every valid spec resolves to an instant strictly after the reference,
/// including exact-match candidates, across a spread of reference instants.
#[test]
fn test_strict_future_invariant_across_variants() {
    let specs = vec![
        RecurrenceSpec::Daily { time: None, timezone: None },
        RecurrenceSpec::Daily { time: Some("00:00".to_string()), timezone: None },
        RecurrenceSpec::Daily { time: Some("23:59".to_string()), timezone: None },
        RecurrenceSpec::Weekly { day_of_week: None, time: None, timezone: None },
        RecurrenceSpec::Weekly { day_of_week: Some(0), time: None, timezone: None },
        RecurrenceSpec::Weekly {
            day_of_week: Some(3),
            time: Some("10:30".to_string()),
            timezone: None,
        },
        RecurrenceSpec::Monthly { day_of_month: 1, time: None, timezone: None },
        RecurrenceSpec::Monthly { day_of_month: 31, time: None, timezone: None },
        RecurrenceSpec::Monthly { day_of_month: -1, time: Some("09:00".to_string()), timezone: None },
        RecurrenceSpec::Yearly { month: None, day_of_month: None, time: None, timezone: None },
        RecurrenceSpec::Yearly {
            month: Some(0),
            day_of_month: Some(1),
            time: Some("00:00".to_string()),
            timezone: None,
        },
        RecurrenceSpec::Yearly { month: Some(11), day_of_month: Some(-1), time: None, timezone: None },
    ];

    let references = [
        utc(2024, 2, 29, 0, 0, 0),
        utc(2024, 12, 31, 23, 59, 59),
        utc(2025, 1, 1, 0, 0, 0),
        utc(2025, 1, 15, 10, 30, 0),
        utc(2025, 6, 30, 12, 0, 0),
    ];

    for spec in &specs {
        for reference in references {
            let next = next_occurrence(reference, spec, Tz::UTC)
                .expect("valid specs always resolve");
            assert!(
                next > reference,
                "{:?} from {} resolved to {}, not strictly after",
                spec,
                reference,
                next
            );
        }
    }
}

/// The time already passed today, so the daily schedule fires tomorrow.
#[test]
fn test_daily_schedule_rolls_past_todays_time() {
    let spec = RecurrenceSpec::Daily { time: Some("09:00".to_string()), timezone: Some(String::new()) };
    let next = next_occurrence(utc(2025, 1, 15, 10, 30, 0), &spec, Tz::UTC).unwrap();
    assert_eq!(next, utc(2025, 1, 16, 9, 0, 0));
}

/// Requesting day 31 from a January reference lands on the last day of
/// February, leap year or not.
#[test]
fn test_month_clamp_law() {
    let spec = RecurrenceSpec::Monthly { day_of_month: 31, time: None, timezone: Some(String::new()) };

    let leap = next_occurrence(utc(2024, 1, 31, 10, 0, 0), &spec, Tz::UTC).unwrap();
    assert_eq!(leap, utc(2024, 2, 29, 0, 0, 0));

    let common = next_occurrence(utc(2025, 1, 31, 10, 0, 0), &spec, Tz::UTC).unwrap();
    assert_eq!(common, utc(2025, 2, 28, 0, 0, 0));
}

/// An absent spec timezone resolves to the caller's default zone.
#[test]
fn test_absent_timezone_uses_default() {
    let spec = RecurrenceSpec::Daily { time: Some("09:00".to_string()), timezone: None };
    // Reference is 13:00 UTC = 10:00 in Sao Paulo, so 09:00 local has passed
    // and the schedule fires tomorrow at 09:00 -03:00 = 12:00 UTC.
    let next = next_occurrence(utc(2025, 1, 15, 13, 0, 0), &spec, Sao_Paulo).unwrap();
    assert_eq!(next, utc(2025, 1, 16, 12, 0, 0));
}

/// An empty-string timezone means UTC regardless of the default.
#[test]
fn test_empty_timezone_means_utc() {
    let spec = RecurrenceSpec::Daily { time: Some("09:00".to_string()), timezone: Some(String::new()) };
    let next = next_occurrence(utc(2025, 1, 15, 3, 0, 0), &spec, Sao_Paulo).unwrap();
    assert_eq!(next, utc(2025, 1, 15, 9, 0, 0));
}

/// Resolving the same spec from its own result walks a steady civil ladder.
#[test]
fn test_repeated_resolution_steps_one_day_at_a_time() {
    let spec = RecurrenceSpec::Daily { time: Some("06:00".to_string()), timezone: Some(String::new()) };
    let mut current = utc(2025, 3, 1, 12, 0, 0);
    for day in 2..=5 {
        current = next_occurrence(current, &spec, Tz::UTC).unwrap();
        assert_eq!(current, utc(2025, 3, day, 6, 0, 0));
    }
}

/// Validation failures surface before computation for every variant.
#[test]
fn test_validation_errors_fail_fast() {
    let invalid = vec![
        RecurrenceSpec::Weekly { day_of_week: Some(9), time: None, timezone: None },
        RecurrenceSpec::Monthly { day_of_month: 0, time: None, timezone: None },
        RecurrenceSpec::Monthly { day_of_month: 32, time: None, timezone: None },
        RecurrenceSpec::Yearly { month: Some(3), day_of_month: None, time: None, timezone: None },
        RecurrenceSpec::Yearly { month: Some(12), day_of_month: Some(1), time: None, timezone: None },
        RecurrenceSpec::Daily { time: Some("9am".to_string()), timezone: None },
    ];

    for spec in invalid {
        assert!(
            next_occurrence(utc(2025, 1, 15, 0, 0, 0), &spec, Tz::UTC).is_err(),
            "expected {:?} to be rejected",
            spec
        );
    }
}
