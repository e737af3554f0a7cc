//! Aggregate result types returned to callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day output of the business calendar engine
///
/// Constructed once per civil day during aggregation and returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResult {
    pub date: NaiveDate,
    pub weekday: String,
    pub minutes: i64,
    pub is_weekend: bool,
    pub is_holiday: bool,
}

/// Day-counting totals over an inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDayCount {
    pub total: u32,
    pub business: u32,
    pub weekend: u32,
    pub holiday: u32,
}

/// Minute-aggregation result over an instant range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMinutes {
    pub total_minutes: i64,
    pub per_day: Vec<DayResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_result_serializes_camel_case() {
        let day = DayResult {
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            weekday: "Monday".to_string(),
            minutes: 480,
            is_weekend: false,
            is_holiday: false,
        };
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2025-01-20");
        assert_eq!(json["isWeekend"], false);
        assert_eq!(json["isHoliday"], false);
        assert_eq!(json["minutes"], 480);
    }

    #[test]
    fn test_business_minutes_round_trip() {
        let result = BusinessMinutes { total_minutes: 300, per_day: vec![] };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("totalMinutes"));
        let back: BusinessMinutes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
