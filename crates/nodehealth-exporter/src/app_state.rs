//! Shared application state for the HTTP surface.
//!
//! The router only ever reads the metrics; the poller task holds the other
//! handle to the same `NodeMetrics` and is the sole writer.

use std::sync::Arc;

use crate::obs::NodeMetrics;

#[derive(Clone)]
pub struct AppState {
    metrics: Arc<NodeMetrics>,
}

impl AppState {
    pub fn new(metrics: Arc<NodeMetrics>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> Arc<NodeMetrics> {
        Arc::clone(&self.metrics)
    }
}
