//! # Tempo API
//!
//! Caller-facing facade over the computation engines.
//!
//! This crate contains:
//! - [`TempoService`]: the three public operations as plain methods
//! - Request/response DTOs with the wire-level (camelCase) field names
//! - Timezone-convention resolution against the configured default
//!
//! Transport, framing, rate limiting, and caching live outside this
//! workspace; the facade trusts structurally valid input and performs the
//! semantic validations only.

pub mod requests;
pub mod service;

pub use requests::{
    BusinessDaysRequest, BusinessMinutesRequest, NextOccurrenceRequest, NextOccurrenceResponse,
};
pub use service::{ServiceConfig, TempoService};
