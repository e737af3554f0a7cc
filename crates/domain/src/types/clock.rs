//! Wall-clock time of day
//!
//! Provides the `HH:mm` value used by recurrence specs and business-hours
//! windows, together with its parser.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for clock-time parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeParseError {
    #[error("Invalid time format: {0} (expected HH:mm)")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Time out of range: {0} (hour must be 0-23, minute 0-59)")]
    OutOfRange(String),
}

/// A time of day with minute precision, no date or timezone attached
///
/// # Examples
///
/// ```
/// use tempo_domain::types::clock::ClockTime;
///
/// let t = ClockTime::parse("09:30").unwrap();
/// assert_eq!(t.hour, 9);
/// assert_eq!(t.minute, 30);
/// assert!(ClockTime::parse("24:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Midnight, the implicit time-of-day for date-only candidates
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Create a clock time, checking field ranges
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 || minute > 59 {
            return Err(TimeParseError::OutOfRange(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `HH:mm` string into a clock time
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let (hour_part, minute_part) =
            s.split_once(':').ok_or_else(|| TimeParseError::InvalidFormat(s.to_string()))?;

        let hour: u32 =
            hour_part.parse().map_err(|_| TimeParseError::InvalidNumber(hour_part.to_string()))?;
        let minute: u32 = minute_part
            .parse()
            .map_err(|_| TimeParseError::InvalidNumber(minute_part.to_string()))?;

        Self::new(hour, minute)
    }

    /// Minutes elapsed since midnight
    pub fn minutes_from_midnight(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Check field ranges without consuming the value
    ///
    /// Needed for values that arrive structurally (deserialized from
    /// `{hour, minute}` payloads) rather than through [`ClockTime::parse`].
    pub fn is_valid(&self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
