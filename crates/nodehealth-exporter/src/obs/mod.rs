//! Lightweight in-process metrics.
//!
//! The exporter publishes exactly two series. They are stored as atomics and
//! rendered by the `/metrics` handler in the Prometheus text format, so the
//! poller never takes a lock to update them.

pub mod metrics;

pub use metrics::{Counter, Gauge, NodeMetrics};
