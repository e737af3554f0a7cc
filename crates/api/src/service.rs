//! Service facade
//!
//! Wires the caller-facing operations to the engines: resolves the timezone
//! convention against the configured default, collects holiday sources for
//! the years a range touches, and hands the validated inputs to the core.

use chrono::Datelike;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tempo_core::{business, civil, holidays};
use tempo_domain::constants::{DEFAULT_HOURS_END, DEFAULT_HOURS_START};
use tempo_domain::{
    BusinessDayCount, BusinessHoursSpec, BusinessMinutes, ClockTime, HoursWindow, Result,
    TempoError,
};
use tracing::info;

use crate::requests::{
    BusinessDaysRequest, BusinessMinutesRequest, NextOccurrenceRequest, NextOccurrenceResponse,
};

/// Process-level configuration for the facade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub default_timezone: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { default_timezone: "UTC".to_string() }
    }
}

/// Stateless date/time computation service
///
/// Holds nothing but the resolved default timezone; every call derives its
/// answer purely from its inputs, so one instance may be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct TempoService {
    default_tz: Tz,
}

impl TempoService {
    /// Create a service from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let default_tz = config.default_timezone.parse().map_err(|_| {
            TempoError::Config(format!(
                "invalid default timezone \"{}\"",
                config.default_timezone
            ))
        })?;
        Ok(Self { default_tz })
    }

    /// The next instant the recurrence fires, strictly after the reference
    pub fn next_occurrence(&self, request: &NextOccurrenceRequest) -> Result<NextOccurrenceResponse> {
        info!(reference = %request.reference, "Resolving next occurrence");
        let next =
            tempo_core::next_occurrence(request.reference, &request.recurrence, self.default_tz)?;
        Ok(NextOccurrenceResponse { next })
    }

    /// Count business/weekend/holiday days over an inclusive date range
    pub fn count_business_days(&self, request: &BusinessDaysRequest) -> Result<BusinessDayCount> {
        info!(
            start = %request.start_date,
            end = %request.end_date,
            include_weekends = request.include_weekends,
            "Counting business days"
        );
        let years = request.start_date.year()..=request.end_date.year();
        let holidays = holidays::collect_holidays(&request.holidays, years)?;
        business::count_days(
            request.start_date,
            request.end_date,
            &holidays,
            request.include_weekends,
        )
    }

    /// Sum business minutes over an instant range, per-day breakdown included
    pub fn count_business_minutes(
        &self,
        request: &BusinessMinutesRequest,
    ) -> Result<BusinessMinutes> {
        info!(
            start = %request.start,
            end = %request.end,
            include_weekends = request.include_weekends,
            "Counting business minutes"
        );
        let tz = civil::resolve_timezone(request.timezone.as_deref(), self.default_tz)?;
        let hours = request.hours.clone().unwrap_or_else(default_hours);

        // Holiday rules need every year the local date range touches.
        let first_year = civil::to_civil(request.start, tz).date().year();
        let last_year = civil::to_civil(request.end, tz).date().year();
        let holidays =
            holidays::collect_holidays(&request.holidays, first_year..=last_year)?;

        business::count_minutes(
            request.start,
            request.end,
            &hours,
            &holidays,
            request.include_weekends,
            tz,
        )
    }
}

fn default_hours() -> BusinessHoursSpec {
    let (start_hour, start_minute) = DEFAULT_HOURS_START;
    let (end_hour, end_minute) = DEFAULT_HOURS_END;
    BusinessHoursSpec::Uniform(HoursWindow {
        start: ClockTime { hour: start_hour, minute: start_minute },
        end: ClockTime { hour: end_hour, minute: end_minute },
    })
}
