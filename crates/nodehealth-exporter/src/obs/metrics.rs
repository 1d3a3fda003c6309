//! Metric sinks for node health.
//!
//! `Gauge` is last-write-wins, `Counter` is increment-only. Both are plain
//! atomics: the poller task writes, the scrape handler reads, and a read never
//! observes a torn value.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Series name of the health gauge.
pub const NODE_HEALTH: &str = "node_health";
/// Series name of the poll attempt counter.
pub const NODE_HEALTH_TOTAL: &str = "node_health_total";

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

#[derive(Debug, Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    /// Overwrite the current value. Outside this module only
    /// `NodeMetrics::set_healthy` writes, which keeps the value in {0, 1}.
    pub(crate) fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

/// The two series shared between the poller (writer) and `/metrics` (reader).
#[derive(Debug, Default)]
pub struct NodeMetrics {
    /// 1 when the target last reported ready, 0 when it reported not ready.
    pub node_health: Gauge,
    /// Poll attempts, successful or not.
    pub node_health_total: Counter,
}

impl NodeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a decoded envelope: 1 ready, 0 not ready.
    pub fn set_healthy(&self, ready: bool) {
        self.node_health.set(i64::from(ready));
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.node_health
            .render(NODE_HEALTH, "Current node health status", &mut out);
        self.node_health_total
            .render(NODE_HEALTH_TOTAL, "Sum of requests", &mut out);
        out
    }
}
