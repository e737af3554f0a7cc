//! # Tempo Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains the four computation engines:
//! - [`civil`]: instant/wall-clock conversion and calendar queries
//! - [`holidays`]: named-calendar rules, custom dates, aggregation
//! - [`recurrence`]: next-occurrence resolution for repeating schedules
//! - [`business`]: business-day counting and business-minute aggregation
//!
//! ## Architecture Principles
//! - Only depends on `tempo-domain`
//! - No I/O, no shared mutable state, no async
//! - Every operation is a pure, deterministic function of its inputs

pub mod business;
pub mod civil;
pub mod holidays;
pub mod recurrence;

// Re-export specific items to avoid ambiguity
pub use business::{count_days, count_minutes};
pub use civil::resolve_timezone;
pub use holidays::collect_holidays;
pub use recurrence::next_occurrence;
