//! Tick sources driving the poll loop.

use async_trait::async_trait;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use super::PollConfig;

/// A schedule of poll iterations.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick. `None` means the schedule is over.
    async fn tick(&mut self) -> Option<()>;
}

/// Fixed-cadence ticker anchored to its creation time.
///
/// The first tick fires one full period after construction. A slow iteration
/// does not shift later ticks: missed ticks are skipped and the schedule stays
/// on multiples of the period.
pub struct IntervalTicker {
    inner: Interval,
}

impl IntervalTicker {
    /// Ticks every `config.interval()`, which `PollConfig` keeps non-zero.
    /// Must be called from within a tokio runtime.
    pub fn new(config: &PollConfig) -> Self {
        let period = config.interval();
        let mut inner = time::interval_at(Instant::now() + period, period);
        inner.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { inner }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> Option<()> {
        self.inner.tick().await;
        Some(())
    }
}
