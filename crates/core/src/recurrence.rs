//! Recurrence pattern resolution
//!
//! Computes the next instant a repeating schedule fires after a reference
//! instant. The defining invariant: the result is strictly after the
//! reference, never equal. All arithmetic is civil (wall-clock) in the
//! spec's resolved timezone, converted back to an instant at the end.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tempo_domain::{ClockTime, RecurrenceSpec, Result, TempoError};

use crate::civil;

/// Resolve the next occurrence of `spec` strictly after `reference`
///
/// Validation (field ranges, both-or-neither pairing, time and timezone
/// strings) happens before any computation; the resolver itself cannot fail.
pub fn next_occurrence(
    reference: DateTime<Utc>,
    spec: &RecurrenceSpec,
    default_tz: Tz,
) -> Result<DateTime<Utc>> {
    spec.validate()?;
    let tz = civil::resolve_timezone(spec.timezone(), default_tz)?;
    let time = spec
        .time()
        .map(ClockTime::parse)
        .transpose()
        .map_err(|e| TempoError::InvalidInput(format!("time: {}", e)))?;

    let local = civil::to_civil(reference, tz);

    let candidate = match spec {
        RecurrenceSpec::Daily { .. } => next_daily(local, reference, time, tz),
        RecurrenceSpec::Weekly { day_of_week, .. } => {
            next_weekly(local, reference, *day_of_week, time, tz)
        }
        RecurrenceSpec::Monthly { day_of_month, .. } => {
            next_monthly(local, reference, *day_of_month, time, tz)
        }
        RecurrenceSpec::Yearly { month: None, day_of_month: None, .. } => {
            next_yearly_same_date(local, time)
        }
        RecurrenceSpec::Yearly { month, day_of_month, .. } => {
            // validate() guarantees both fields are present here
            let month = month.unwrap_or_default();
            let day = day_of_month.unwrap_or_default();
            next_yearly_specific(local, reference, month, day, time, tz)
        }
    };

    Ok(civil::civil_to_instant(candidate, tz))
}

/// Strict tie-break: an exact-match candidate counts as already passed
fn has_passed(candidate: NaiveDateTime, reference: DateTime<Utc>, tz: Tz) -> bool {
    civil::civil_to_instant(candidate, tz) <= reference
}

fn next_daily(
    local: NaiveDateTime,
    reference: DateTime<Utc>,
    time: Option<ClockTime>,
    tz: Tz,
) -> NaiveDateTime {
    match time {
        // No time given: one civil day forward, preserving time-of-day
        None => local + Duration::days(1),
        Some(t) => {
            let today = local.date().and_time(civil::naive_time(t));
            if has_passed(today, reference, tz) {
                today + Duration::days(1)
            } else {
                today
            }
        }
    }
}

fn next_weekly(
    local: NaiveDateTime,
    reference: DateTime<Utc>,
    day_of_week: Option<u8>,
    time: Option<ClockTime>,
    tz: Tz,
) -> NaiveDateTime {
    let current = civil::weekday_index(local.date());
    let target = day_of_week.unwrap_or(current);
    let delta = (i64::from(target) + 7 - i64::from(current)) % 7;

    if delta == 0 {
        // Same weekday as the reference: "today" only counts with an
        // explicit time that is still strictly in the future.
        match time {
            None => local + Duration::days(7),
            Some(t) => {
                let today = local.date().and_time(civil::naive_time(t));
                if has_passed(today, reference, tz) {
                    today + Duration::days(7)
                } else {
                    today
                }
            }
        }
    } else {
        let shifted = local + Duration::days(delta);
        match time {
            Some(t) => shifted.date().and_time(civil::naive_time(t)),
            None => shifted,
        }
    }
}

fn next_monthly(
    local: NaiveDateTime,
    reference: DateTime<Utc>,
    day_of_month: i8,
    time: Option<ClockTime>,
    tz: Tz,
) -> NaiveDateTime {
    let t = civil::naive_time(time.unwrap_or(ClockTime::MIDNIGHT));
    let candidate = clamped_date(local.year(), local.month(), day_of_month).and_time(t);

    if has_passed(candidate, reference, tz) {
        let (year, month) = if local.month() == 12 {
            (local.year() + 1, 1)
        } else {
            (local.year(), local.month() + 1)
        };
        clamped_date(year, month, day_of_month).and_time(t)
    } else {
        candidate
    }
}

fn next_yearly_same_date(local: NaiveDateTime, time: Option<ClockTime>) -> NaiveDateTime {
    let year = local.year() + 1;
    let month = local.month();
    let day = if month == 2 && local.day() == 29 && !civil::is_leap_year(year) {
        28
    } else {
        local.day()
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .expect("leap-day clamp keeps the date constructible");

    match time {
        Some(t) => date.and_time(civil::naive_time(t)),
        None => date.and_time(local.time()),
    }
}

fn next_yearly_specific(
    local: NaiveDateTime,
    reference: DateTime<Utc>,
    month: u8,
    day_of_month: i8,
    time: Option<ClockTime>,
    tz: Tz,
) -> NaiveDateTime {
    let month = u32::from(month) + 1; // zero-based on the wire
    let t = civil::naive_time(time.unwrap_or(ClockTime::MIDNIGHT));
    let candidate = clamped_date(local.year(), month, day_of_month).and_time(t);

    if has_passed(candidate, reference, tz) {
        clamped_date(local.year() + 1, month, day_of_month).and_time(t)
    } else {
        candidate
    }
}

/// The requested day within a month, clamped to the month's length
///
/// `-1` selects the last day directly; a literal day larger than the month
/// (31 in February) clamps to the last day as well.
fn clamped_date(year: i32, month: u32, day_of_month: i8) -> NaiveDate {
    let last = civil::days_in_month(year, month);
    let day = if day_of_month == -1 { last } else { (day_of_month as u32).min(last) };
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day always exists")
}
