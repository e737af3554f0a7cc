//! Holiday aggregation
//!
//! Merges named-calendar rules, explicit custom dates, and the legacy
//! single-list input into one deduplicated set of holiday civil dates.
//! Sources are additive, so an unrecognized calendar code degrades to "no
//! calendar holidays" instead of rejecting the call.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use tempo_domain::constants::DATE_FORMAT;
use tempo_domain::{HolidaySet, HolidaySources, Result, TempoError};
use tracing::debug;

pub mod easter;
pub mod rules;

/// Collect every requested holiday source into one deduplicated set
///
/// Calendar rules are evaluated for each year in `years` (the years the
/// caller's range touches). Custom and legacy dates apply as given; a
/// malformed entry is a hard validation error naming its position.
pub fn collect_holidays(
    sources: &HolidaySources,
    years: RangeInclusive<i32>,
) -> Result<HolidaySet> {
    let mut set = HolidaySet::new();

    if let Some(code) = sources.calendar.as_deref() {
        match rules::lookup(code) {
            Some(table) => {
                for year in years {
                    for date in rules::evaluate(table, year, sources.include_observed) {
                        set.insert(date);
                    }
                }
            }
            None => {
                debug!(calendar = code, "unknown holiday calendar code, contributing no dates");
            }
        }
    }

    for date in parse_date_list("customDates", &sources.custom_dates)? {
        set.insert(date);
    }
    for date in parse_date_list("legacyDates", &sources.legacy_dates)? {
        set.insert(date);
    }

    Ok(set)
}

fn parse_date_list(field: &str, entries: &[String]) -> Result<Vec<NaiveDate>> {
    entries
        .iter()
        .enumerate()
        .map(|(position, raw)| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                TempoError::InvalidInput(format!(
                    "{}[{}]: invalid date string \"{}\" (expected YYYY-MM-DD)",
                    field, position, raw
                ))
            })
        })
        .collect()
}
