//! nodehealth exporter library entry.
//!
//! Wires the readiness poller and the metrics HTTP surface around one shared
//! `NodeMetrics`. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod poller;
pub mod router;
pub mod server;
