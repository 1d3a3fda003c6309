//! Command-line flags.
//!
//! Every flag is optional so that an unset flag leaves the file (or default)
//! value in place.

use clap::Parser;

use super::ExporterConfig;

#[derive(Debug, Default, Parser)]
#[command(name = "nodehealth-exporter")]
#[command(about = "Polls a readiness endpoint and exports node health as Prometheus metrics")]
#[command(version)]
pub struct Cli {
    /// Address the web server listens on [default: localhost:8080]
    #[arg(long, env = "NODEHEALTH_LISTEN")]
    pub listen: Option<String>,

    /// URL polled for readiness [default: http://google.com]
    #[arg(long, env = "NODEHEALTH_ADDRESS")]
    pub address: Option<String>,

    /// How often to poll the target, in seconds [default: 15]
    #[arg(long, env = "NODEHEALTH_INTERVAL")]
    pub interval: Option<u64>,

    /// Optional YAML config file
    #[arg(short, long, env = "NODEHEALTH_CONFIG")]
    pub config: Option<String>,
}

impl Cli {
    /// Overlay explicitly given flags onto `base`.
    pub fn apply(&self, mut base: ExporterConfig) -> ExporterConfig {
        if let Some(listen) = &self.listen {
            base.listen = listen.clone();
        }
        if let Some(address) = &self.address {
            base.target = address.clone();
        }
        if let Some(interval) = self.interval {
            base.interval_secs = interval;
        }
        base
    }
}
