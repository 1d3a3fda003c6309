//! Process bootstrap: bind, spawn the poller, serve.

use std::sync::Arc;

use tokio::net::TcpListener;

use nodehealth_core::error::{NodeHealthError, Result};

use crate::{app_state::AppState, config::ExporterConfig, obs::NodeMetrics, poller, router};

/// Bind the configured listen address.
pub async fn bind(listen: &str) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| NodeHealthError::Bind(format!("{listen}: {e}")))
}

/// Run the exporter until the process is killed.
///
/// Returns only on a fatal error: invalid poll settings, a listener that
/// cannot bind, or the server itself failing.
pub async fn run(cfg: ExporterConfig) -> Result<()> {
    let poll_cfg = cfg.poll_config()?;
    let metrics = Arc::new(NodeMetrics::new());

    let listener = bind(&cfg.listen).await?;

    let _poller = poller::spawn_poller(poll_cfg.clone(), Arc::clone(&metrics))?;
    tracing::info!(
        url = %poll_cfg.target(),
        interval_secs = poll_cfg.interval().as_secs(),
        "poller spawned"
    );

    let app = router::build_router(AppState::new(metrics));
    tracing::info!(listen = %cfg.listen, "starting web server");

    axum::serve(listener, app)
        .await
        .map_err(|e| NodeHealthError::Internal(format!("server failed: {e}")))
}
