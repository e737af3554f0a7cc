//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Range guard
//
// Both calendar operations iterate one civil day at a time, so the widest
// accepted range bounds the work a single call can demand.
pub const MAX_RANGE_DAYS: i64 = 1830;

// Wire formats for civil dates and clock times
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// Business-hours window applied when a caller omits the schedule
pub const DEFAULT_HOURS_START: (u32, u32) = (9, 0);
pub const DEFAULT_HOURS_END: (u32, u32) = (17, 0);
