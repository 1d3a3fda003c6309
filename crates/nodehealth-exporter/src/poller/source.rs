//! Where readiness bodies come from.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use nodehealth_core::error::{NodeHealthError, Result};

/// One fetch of the target's response body.
#[async_trait]
pub trait ReadinessSource: Send + Sync {
    /// Human-readable target, used in log fields.
    fn target(&self) -> &str;
    async fn fetch(&self) -> Result<Bytes>;
}

/// Plain `GET <target>` over reqwest.
///
/// No retry and no timeout beyond the client defaults. A non-2xx answer still
/// hands its body to the decoder.
pub struct HttpSource {
    client: reqwest::Client,
    target: String,
}

impl HttpSource {
    pub fn new(target: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| NodeHealthError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self::with_client(client, target))
    }

    pub fn with_client(client: reqwest::Client, target: impl Into<String>) -> Self {
        Self {
            client,
            target: target.into(),
        }
    }
}

#[async_trait]
impl ReadinessSource for HttpSource {
    fn target(&self) -> &str {
        &self.target
    }

    async fn fetch(&self) -> Result<Bytes> {
        debug!(url = %self.target, "requesting readiness");

        let resp = self
            .client
            .get(&self.target)
            .send()
            .await
            .map_err(|e| NodeHealthError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url = %self.target, status = status.as_u16(), "target answered non-2xx");
        }

        resp.bytes()
            .await
            .map_err(|e| NodeHealthError::Transport(format!("reading body failed: {e}")))
    }
}
