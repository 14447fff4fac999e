//! Observability subsystem.
//!
//! # Responsibilities
//! - Structured logging via the tracing crate (initialized in main)
//! - Request counters and latency histograms with a Prometheus
//!   scrape endpoint
//!
//! # Design Decisions
//! - Log level configurable via RUST_LOG / EnvFilter
//! - Low-overhead metric updates; labels limited to method and status

pub mod metrics;
