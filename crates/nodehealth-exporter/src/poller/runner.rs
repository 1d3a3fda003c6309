//! The health-check cycle.
//!
//! Per iteration, in this order:
//! 1. `node_health_total` += 1 (attempts, not successes)
//! 2. one fetch of the target
//! 3. decode the readiness envelope
//! 4. `node_health` = 1 / 0 from `data.ready`
//!
//! Transport and decode failures stop the iteration after step 1. The gauge
//! keeps its previous value, so a stalled gauge next to a rising counter is
//! the stale-check signal for whoever scrapes us.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use nodehealth_core::error::{NodeHealthError, Result};
use nodehealth_core::protocol::readiness::decode_readiness;

use super::source::ReadinessSource;
use super::ticker::Ticker;
use crate::obs::NodeMetrics;

/// Immutable poll settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    target: String,
    interval: Duration,
}

impl PollConfig {
    /// Rejects a zero interval up front instead of spinning.
    pub fn new(target: impl Into<String>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(NodeHealthError::Config(
                "poll interval must be greater than zero".into(),
            ));
        }
        Ok(Self {
            target: target.into(),
            interval,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Result of one poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Envelope decoded with `ready = true`.
    Healthy,
    /// Envelope decoded with `ready = false`.
    Unhealthy,
    /// The fetch itself failed.
    TransportFailed,
    /// The body was not a readiness envelope.
    DecodeFailed,
}

impl PollOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            PollOutcome::Healthy => "healthy",
            PollOutcome::Unhealthy => "unhealthy",
            PollOutcome::TransportFailed => "transport_failed",
            PollOutcome::DecodeFailed => "decode_failed",
        }
    }
}

/// Health as seen through the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    /// No envelope decoded yet.
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl HealthState {
    /// Failures never move the state.
    pub fn after(self, outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Healthy => HealthState::Healthy,
            PollOutcome::Unhealthy => HealthState::Unhealthy,
            PollOutcome::TransportFailed | PollOutcome::DecodeFailed => self,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Unknown => "unknown",
            HealthState::Healthy => "healthy",
            HealthState::Unhealthy => "unhealthy",
        }
    }
}

/// Owns the readiness source and writes the shared metrics.
pub struct Poller<S> {
    source: S,
    metrics: Arc<NodeMetrics>,
    state: HealthState,
}

impl<S: ReadinessSource> Poller<S> {
    pub fn new(source: S, metrics: Arc<NodeMetrics>) -> Self {
        Self {
            source,
            metrics,
            state: HealthState::Unknown,
        }
    }

    pub fn state(&self) -> HealthState {
        self.state
    }

    /// Run exactly one iteration. Never fails: errors are folded into the outcome.
    pub async fn poll_once(&mut self) -> PollOutcome {
        self.metrics.node_health_total.inc();

        let url = self.source.target();
        let outcome = match self.source.fetch().await {
            Err(e) => {
                warn!(url = %url, kind = e.kind().as_str(), error = %e, "failed to retrieve data");
                PollOutcome::TransportFailed
            }
            Ok(body) => match decode_readiness(&body) {
                Err(e) => {
                    warn!(url = %url, kind = e.kind().as_str(), error = %e, "failed to decode readiness envelope");
                    PollOutcome::DecodeFailed
                }
                Ok(env) => {
                    debug!(url = %url, ready = env.is_ready(), reported_at = %env.reported_at(), "readiness decoded");
                    self.metrics.set_healthy(env.is_ready());
                    if env.is_ready() {
                        PollOutcome::Healthy
                    } else {
                        PollOutcome::Unhealthy
                    }
                }
            },
        };

        let next = self.state.after(outcome);
        if next != self.state {
            info!(url = %url, from = self.state.as_str(), to = next.as_str(), "node health changed");
        } else {
            debug!(url = %url, outcome = outcome.as_str(), state = next.as_str(), "poll complete");
        }
        self.state = next;

        outcome
    }

    /// Poll once per tick until the ticker runs out.
    ///
    /// With `IntervalTicker` that is never; the task lives until the process
    /// exits. Iterations never overlap.
    pub async fn run<T: Ticker>(mut self, mut ticker: T) {
        info!(url = %self.source.target(), "poller started");
        while ticker.tick().await.is_some() {
            self.poll_once().await;
        }
        info!(url = %self.source.target(), "poller stopped");
    }
}
