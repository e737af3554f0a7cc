//! Declarative holiday calendars
//!
//! Each jurisdiction is a table of rule records consumed by one generic
//! evaluator, so adding a calendar is a data change rather than new branching
//! code. Rules come in two kinds (a fixed civil date, or an offset from
//! Easter Sunday) and each calendar carries the weekend-shift policy its
//! jurisdiction uses for observed holidays.

use chrono::{Duration, NaiveDate};

use crate::civil;
use crate::holidays::easter::easter_sunday;

/// How a calendar moves holidays that land on a weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftPolicy {
    /// Observe on the literal date even when it falls on a weekend
    None,
    /// Saturday observes on the preceding Friday, Sunday on the following
    /// Monday
    SplitWeekend,
    /// Either weekend day observes on the following Monday
    NextMonday,
}

/// How a rule produces its literal date for a given year
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Same civil date every year
    Fixed { month: u32, day: u32 },
    /// Offset in days from Easter Sunday (negative means before)
    EasterOffset { days: i64 },
}

/// One holiday rule within a calendar
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    pub name: &'static str,
    pub kind: RuleKind,
    /// Whether the calendar's weekend shift applies to this rule
    pub observed: bool,
}

/// A named holiday calendar: its rules plus the jurisdiction's shift policy
#[derive(Debug, Clone, Copy)]
pub struct CalendarTable {
    pub code: &'static str,
    pub name: &'static str,
    pub shift: ShiftPolicy,
    pub rules: &'static [HolidayRule],
}

const fn fixed(name: &'static str, month: u32, day: u32, observed: bool) -> HolidayRule {
    HolidayRule { name, kind: RuleKind::Fixed { month, day }, observed }
}

const fn easter_offset(name: &'static str, days: i64) -> HolidayRule {
    HolidayRule { name, kind: RuleKind::EasterOffset { days }, observed: false }
}

// US federal fixed-date holidays; Saturday observes on the preceding Friday
// and Sunday on the following Monday.
const US_RULES: &[HolidayRule] = &[
    fixed("New Year's Day", 1, 1, true),
    fixed("Juneteenth", 6, 19, true),
    fixed("Independence Day", 7, 4, true),
    fixed("Veterans Day", 11, 11, true),
    fixed("Christmas Day", 12, 25, true),
];

// UK bank holidays; weekend dates observe on the following Monday.
const UK_RULES: &[HolidayRule] = &[
    fixed("New Year's Day", 1, 1, true),
    easter_offset("Good Friday", -2),
    easter_offset("Easter Monday", 1),
    fixed("Christmas Day", 12, 25, true),
    fixed("Boxing Day", 12, 26, true),
];

// Brazilian national holidays; no weekend shifting.
const BR_RULES: &[HolidayRule] = &[
    fixed("New Year's Day", 1, 1, false),
    easter_offset("Carnival Monday", -48),
    easter_offset("Carnival Tuesday", -47),
    easter_offset("Good Friday", -2),
    fixed("Tiradentes Day", 4, 21, false),
    fixed("Labour Day", 5, 1, false),
    easter_offset("Corpus Christi", 60),
    fixed("Independence Day", 9, 7, false),
    fixed("Our Lady of Aparecida", 10, 12, false),
    fixed("All Souls' Day", 11, 2, false),
    fixed("Republic Day", 11, 15, false),
    fixed("Christmas Day", 12, 25, false),
];

const CALENDARS: &[CalendarTable] = &[
    CalendarTable { code: "US", name: "United States", shift: ShiftPolicy::SplitWeekend, rules: US_RULES },
    CalendarTable { code: "UK", name: "United Kingdom", shift: ShiftPolicy::NextMonday, rules: UK_RULES },
    CalendarTable { code: "BR", name: "Brazil", shift: ShiftPolicy::None, rules: BR_RULES },
];

/// Find a calendar by code, case-insensitively
pub fn lookup(code: &str) -> Option<&'static CalendarTable> {
    CALENDARS.iter().find(|calendar| calendar.code.eq_ignore_ascii_case(code))
}

/// Evaluate every rule of a calendar for one year
///
/// With `include_observed` the calendar's shift policy is applied to the
/// rules flagged as observed; otherwise the literal dates are reported even
/// when they fall on a weekend.
pub fn evaluate(table: &CalendarTable, year: i32, include_observed: bool) -> Vec<NaiveDate> {
    table
        .rules
        .iter()
        .map(|rule| {
            let literal = match rule.kind {
                RuleKind::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day)
                    .expect("calendar tables hold valid month/day pairs"),
                RuleKind::EasterOffset { days } => easter_sunday(year) + Duration::days(days),
            };
            if include_observed && rule.observed {
                apply_shift(literal, table.shift)
            } else {
                literal
            }
        })
        .collect()
}

fn apply_shift(date: NaiveDate, policy: ShiftPolicy) -> NaiveDate {
    // TODO: under NextMonday, consecutive weekend holidays (Dec 25 Saturday +
    // Dec 26 Sunday) both land on the same Monday and collapse after dedup;
    // cascading the second one to the next free weekday would match the
    // jurisdictions' actual practice.
    match policy {
        ShiftPolicy::None => date,
        ShiftPolicy::SplitWeekend => match civil::weekday_index(date) {
            6 => date - Duration::days(1),
            0 => date + Duration::days(1),
            _ => date,
        },
        ShiftPolicy::NextMonday => match civil::weekday_index(date) {
            6 => date + Duration::days(2),
            0 => date + Duration::days(1),
            _ => date,
        },
    }
}
