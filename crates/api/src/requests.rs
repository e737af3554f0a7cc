//! Request and response DTOs for the service facade

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tempo_domain::{BusinessHoursSpec, HolidaySources, RecurrenceSpec};

/// Ask when a repeating schedule next fires after a reference instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextOccurrenceRequest {
    pub reference: DateTime<Utc>,
    pub recurrence: RecurrenceSpec,
}

/// The resolved next firing instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextOccurrenceResponse {
    pub next: DateTime<Utc>,
}

/// Ask how many business days fall inside an inclusive civil-date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDaysRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub holidays: HolidaySources,
    #[serde(default)]
    pub include_weekends: bool,
}

/// Ask how many business minutes fall inside an instant range
///
/// `hours` defaults to the standard 09:00-17:00 window when omitted.
/// `timezone` follows the caller convention: absent means the configured
/// default, empty string means UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMinutesRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<BusinessHoursSpec>,
    #[serde(default)]
    pub holidays: HolidaySources,
    #[serde(default)]
    pub include_weekends: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
