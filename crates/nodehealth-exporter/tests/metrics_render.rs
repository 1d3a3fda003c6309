#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use nodehealth_exporter::obs::NodeMetrics;

#[test]
fn renders_exactly_two_series() {
    let m = NodeMetrics::new();
    m.set_healthy(true);
    m.node_health_total.inc();
    m.node_health_total.inc();

    let expected = "\
# HELP node_health Current node health status
# TYPE node_health gauge
node_health 1
# HELP node_health_total Sum of requests
# TYPE node_health_total counter
node_health_total 2
";
    assert_eq!(m.render(), expected);
}

#[test]
fn set_healthy_only_writes_zero_or_one() {
    let m = NodeMetrics::new();
    m.set_healthy(true);
    assert_eq!(m.node_health.get(), 1);
    m.set_healthy(false);
    assert_eq!(m.node_health.get(), 0);
    m.set_healthy(false);
    assert_eq!(m.node_health.get(), 0);
}

#[test]
fn fresh_metrics_start_at_zero() {
    let m = NodeMetrics::new();
    assert_eq!(m.node_health.get(), 0);
    assert_eq!(m.node_health_total.get(), 0);
    assert!(m.render().contains("\nnode_health 0\n"));
}

#[test]
fn concurrent_increments_are_not_lost() {
    let m = Arc::new(NodeMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    m.node_health_total.inc();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(m.node_health_total.get(), 8_000);
}
