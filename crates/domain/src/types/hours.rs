//! Business-hours schedule types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TempoError};
use crate::types::clock::ClockTime;

/// A single open/close window within a civil day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// A business-hours schedule
///
/// Either one window applied to every day, or a per-weekday map keyed by
/// weekday index (0 = Sunday .. 6 = Saturday) where `null` means closed.
/// Weekdays missing from the map are closed as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BusinessHoursSpec {
    Uniform(HoursWindow),
    PerWeekday(BTreeMap<u8, Option<HoursWindow>>),
}

impl BusinessHoursSpec {
    /// The window applicable on the given weekday (0 = Sunday), if any
    pub fn window_for(&self, weekday: u8) -> Option<HoursWindow> {
        match self {
            BusinessHoursSpec::Uniform(window) => Some(*window),
            BusinessHoursSpec::PerWeekday(map) => map.get(&weekday).copied().flatten(),
        }
    }

    /// Check the structural invariants of the schedule
    ///
    /// Hours must be 0-23, minutes 0-59, and per-weekday keys 0-6. Violations
    /// are configuration errors, not input errors: the schedule describes the
    /// caller's operating policy rather than the question being asked.
    pub fn validate(&self) -> Result<()> {
        let check_window = |window: &HoursWindow, context: &str| -> Result<()> {
            if !window.start.is_valid() {
                return Err(TempoError::Config(format!(
                    "{}: start hour must be between 0 and 23 and minute between 0 and 59 (got {}:{})",
                    context, window.start.hour, window.start.minute
                )));
            }
            if !window.end.is_valid() {
                return Err(TempoError::Config(format!(
                    "{}: end hour must be between 0 and 23 and minute between 0 and 59 (got {}:{})",
                    context, window.end.hour, window.end.minute
                )));
            }
            Ok(())
        };

        match self {
            BusinessHoursSpec::Uniform(window) => check_window(window, "businessHours"),
            BusinessHoursSpec::PerWeekday(map) => {
                for (weekday, entry) in map {
                    if *weekday > 6 {
                        return Err(TempoError::Config(format!(
                            "businessHours: weekday key must be between 0 and 6 (got {})",
                            weekday
                        )));
                    }
                    if let Some(window) = entry {
                        check_window(window, &format!("businessHours[{}]", weekday))?;
                    }
                }
                Ok(())
            }
        }
    }
}
