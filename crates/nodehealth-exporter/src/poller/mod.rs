//! Background readiness polling.

mod runner;
pub mod source;
pub mod ticker;

use std::sync::Arc;

use tokio::task::JoinHandle;

use nodehealth_core::error::Result;

use crate::obs::NodeMetrics;

pub use runner::{HealthState, PollConfig, PollOutcome, Poller};
pub use source::{HttpSource, ReadinessSource};
pub use ticker::{IntervalTicker, Ticker};

/// Launch the HTTP poller as an independent task.
///
/// The HTTP client is built before spawning so a broken TLS backend surfaces
/// here, at startup.
pub fn spawn_poller(config: PollConfig, metrics: Arc<NodeMetrics>) -> Result<JoinHandle<()>> {
    let source = HttpSource::new(config.target())?;
    let poller = Poller::new(source, metrics);

    Ok(tokio::spawn(async move {
        poller.run(IntervalTicker::new(&config)).await;
    }))
}
