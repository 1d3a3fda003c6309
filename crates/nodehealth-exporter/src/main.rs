//! nodehealth exporter
//!
//! Polls a readiness endpoint on a fixed interval and exports
//! `node_health` / `node_health_total` on `/metrics`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use nodehealth_exporter::{config, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = config::Cli::parse();

    let result = match config::resolve(&cli) {
        Ok(cfg) => server::run(cfg).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "nodehealth-exporter exiting");
            ExitCode::FAILURE
        }
    }
}
