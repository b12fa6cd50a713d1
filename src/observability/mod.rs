//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; format and filter set at startup
//! - One-shot mode logs to stderr only — stdout belongs to the response
//! - Metrics are cheap label-based counters/histograms, server mode only

pub mod logging;
pub mod metrics;
