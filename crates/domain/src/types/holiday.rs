//! Holiday input and output types

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Holiday inputs supplied by the caller
///
/// Three additive sources: a named calendar code, explicit custom dates, and
/// the legacy single-list field kept for older callers. All dates are
/// `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HolidaySources {
    pub calendar: Option<String>,
    pub custom_dates: Vec<String>,
    pub legacy_dates: Vec<String>,
    pub include_observed: bool,
}

impl HolidaySources {
    /// True when no source can contribute any holiday
    pub fn is_empty(&self) -> bool {
        self.calendar.is_none() && self.custom_dates.is_empty() && self.legacy_dates.is_empty()
    }
}

/// A deduplicated set of holiday civil dates
///
/// Keyed by calendar-date identity: the same date arriving from a calendar
/// rule, a custom entry, and the legacy list collapses to a single holiday.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a date; duplicates are absorbed silently
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self { dates: iter.into_iter().collect() }
    }
}
