//! Business calendar engine
//!
//! Day classification and counting over inclusive civil-date ranges, and
//! business-minute aggregation over instant ranges. Holiday and weekend
//! policies are applied identically in both operations: holiday wins over
//! weekend, so a holiday falling on a weekend is counted once, as holiday.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tempo_domain::constants::MAX_RANGE_DAYS;
use tempo_domain::{
    BusinessDayCount, BusinessHoursSpec, BusinessMinutes, DayResult, HolidaySet, HoursWindow,
    Result, TempoError,
};

use crate::civil;

/// Count and classify every calendar day in `[start, end]` inclusive
///
/// Classification order per day: holiday, then weekend, then business. With
/// `include_weekends` the weekend days are folded into the business count
/// after classification; the weekend bucket still reports how many there
/// were.
pub fn count_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
    include_weekends: bool,
) -> Result<BusinessDayCount> {
    check_day_span(start, end)?;

    let mut total = 0u32;
    let mut business = 0u32;
    let mut weekend = 0u32;
    let mut holiday = 0u32;

    let mut day = start;
    loop {
        total += 1;
        if holidays.contains(day) {
            holiday += 1;
        } else if civil::is_weekend(day) {
            weekend += 1;
        } else {
            business += 1;
        }

        if day == end {
            break;
        }
        day = day
            .succ_opt()
            .ok_or_else(|| TempoError::Internal("calendar date overflow".to_string()))?;
    }

    if include_weekends {
        business += weekend;
    }

    Ok(BusinessDayCount { total, business, weekend, holiday })
}

/// Sum business minutes over `[start, end]`, one `DayResult` per civil day
///
/// Every civil date the range touches in `tz` is enumerated, including the
/// end instant's date, and days contributing zero minutes (closed, weekend,
/// holiday, or disjoint from the range) still appear in the per-day output.
pub fn count_minutes(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    hours: &BusinessHoursSpec,
    holidays: &HolidaySet,
    include_weekends: bool,
    tz: Tz,
) -> Result<BusinessMinutes> {
    hours.validate()?;
    if end < start {
        return Err(TempoError::InvalidInput(format!(
            "end {} is before start {}",
            end, start
        )));
    }

    let first = civil::to_civil(start, tz).date();
    let last = civil::to_civil(end, tz).date();
    check_day_span(first, last)?;

    let mut per_day = Vec::new();
    let mut total_minutes = 0i64;

    let mut day = first;
    loop {
        let is_weekend = civil::is_weekend(day);
        let is_holiday = holidays.contains(day);
        let eligible = !is_holiday && (include_weekends || !is_weekend);

        let minutes = match hours.window_for(civil::weekday_index(day)) {
            Some(window) if eligible => window_overlap_minutes(day, window, start, end, tz),
            _ => 0,
        };

        total_minutes += minutes;
        per_day.push(DayResult {
            date: day,
            weekday: civil::weekday_name(day).to_string(),
            minutes,
            is_weekend,
            is_holiday,
        });

        if day == last {
            break;
        }
        day = day
            .succ_opt()
            .ok_or_else(|| TempoError::Internal("calendar date overflow".to_string()))?;
    }

    Ok(BusinessMinutes { total_minutes, per_day })
}

/// Minutes of overlap between one day's hours window and the instant range
///
/// Zero when the two are disjoint; the window is closed at its end instant,
/// so a range starting exactly at the window end contributes nothing.
fn window_overlap_minutes(
    day: NaiveDate,
    window: HoursWindow,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    tz: Tz,
) -> i64 {
    let window_start = civil::civil_to_instant(day.and_time(civil::naive_time(window.start)), tz);
    let window_end = civil::civil_to_instant(day.and_time(civil::naive_time(window.end)), tz);

    let effective_start = window_start.max(range_start);
    let effective_end = window_end.min(range_end);

    (effective_end - effective_start).num_minutes().max(0)
}

fn check_day_span(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(TempoError::InvalidInput(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }
    let span = (end - start).num_days();
    if span > MAX_RANGE_DAYS {
        return Err(TempoError::RangeTooLarge(format!(
            "{} days requested, maximum is {}",
            span, MAX_RANGE_DAYS
        )));
    }
    Ok(())
}
