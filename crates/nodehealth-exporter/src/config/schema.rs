use std::time::Duration;

use serde::Deserialize;
use nodehealth_core::error::{NodeHealthError, Result};

use crate::poller::PollConfig;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    /// Address the HTTP surface binds to.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// URL polled for the readiness envelope. Opaque: only the HTTP client
    /// judges it, at request time.
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            target: default_target(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.listen.trim().is_empty() {
            return Err(NodeHealthError::Config("listen must not be empty".into()));
        }
        if self.interval_secs == 0 {
            return Err(NodeHealthError::Config(
                "interval_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Build the immutable poll configuration handed to the poller.
    pub fn poll_config(&self) -> Result<PollConfig> {
        PollConfig::new(
            self.target.clone(),
            Duration::from_secs(self.interval_secs),
        )
    }
}

fn default_listen() -> String {
    "localhost:8080".into()
}
fn default_target() -> String {
    "http://google.com".into()
}
fn default_interval_secs() -> u64 {
    15
}
