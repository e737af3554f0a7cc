//! Recurrence specification types
//!
//! A [`RecurrenceSpec`] is the caller's description of a repeating schedule.
//! The four kinds form a closed family, modeled as an enum so that every
//! dispatch site is forced to handle all of them.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TempoError};

/// A recurrence pattern, tagged by frequency on the wire
///
/// Field conventions match the wire contract this core serves:
/// - `day_of_week` is 0-6 with 0 = Sunday
/// - `day_of_month` is 1-31, or -1 for "last day of the month"
/// - `month` is zero-based (0 = January)
/// - `time` is an `HH:mm` string
/// - `timezone` absent means the caller's default, empty string means UTC
///
/// # Examples
///
/// ```
/// use tempo_domain::types::recurrence::RecurrenceSpec;
///
/// let spec: RecurrenceSpec =
///     serde_json::from_str(r#"{"frequency":"monthly","dayOfMonth":-1,"time":"09:00"}"#).unwrap();
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RecurrenceSpec {
    Daily {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    Weekly {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_of_week: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    Monthly {
        day_of_month: i8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    Yearly {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        month: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_of_month: Option<i8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
}

fn valid_day_of_month(day: i8) -> bool {
    day == -1 || (1..=31).contains(&day)
}

impl RecurrenceSpec {
    /// The optional `HH:mm` time carried by any variant
    pub fn time(&self) -> Option<&str> {
        match self {
            RecurrenceSpec::Daily { time, .. }
            | RecurrenceSpec::Weekly { time, .. }
            | RecurrenceSpec::Monthly { time, .. }
            | RecurrenceSpec::Yearly { time, .. } => time.as_deref(),
        }
    }

    /// The optional timezone name carried by any variant
    pub fn timezone(&self) -> Option<&str> {
        match self {
            RecurrenceSpec::Daily { timezone, .. }
            | RecurrenceSpec::Weekly { timezone, .. }
            | RecurrenceSpec::Monthly { timezone, .. }
            | RecurrenceSpec::Yearly { timezone, .. } => timezone.as_deref(),
        }
    }

    /// Check the semantic invariants of the spec's numeric fields
    ///
    /// Time strings and timezone names are validated where they are parsed;
    /// this covers field ranges and the yearly both-or-neither pairing.
    pub fn validate(&self) -> Result<()> {
        match self {
            RecurrenceSpec::Daily { .. } => Ok(()),
            RecurrenceSpec::Weekly { day_of_week, .. } => match day_of_week {
                Some(day) if *day > 6 => Err(TempoError::InvalidInput(format!(
                    "dayOfWeek must be between 0 and 6 (got {})",
                    day
                ))),
                _ => Ok(()),
            },
            RecurrenceSpec::Monthly { day_of_month, .. } => {
                if !valid_day_of_month(*day_of_month) {
                    return Err(TempoError::InvalidInput(format!(
                        "dayOfMonth must be between 1 and 31, or -1 for the last day (got {})",
                        day_of_month
                    )));
                }
                Ok(())
            }
            RecurrenceSpec::Yearly { month, day_of_month, .. } => {
                match (month, day_of_month) {
                    (Some(_), None) | (None, Some(_)) => {
                        return Err(TempoError::InvalidInput(
                            "month and dayOfMonth must be supplied together or not at all"
                                .to_string(),
                        ));
                    }
                    _ => {}
                }
                if let Some(m) = month {
                    if *m > 11 {
                        return Err(TempoError::InvalidInput(format!(
                            "month must be between 0 and 11 (got {})",
                            m
                        )));
                    }
                }
                if let Some(day) = day_of_month {
                    if !valid_day_of_month(*day) {
                        return Err(TempoError::InvalidInput(format!(
                            "dayOfMonth must be between 1 and 31, or -1 for the last day (got {})",
                            day
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}
