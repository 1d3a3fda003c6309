//! Readiness envelope (JSON).
//!
//! Expected body: `{"data":{"ready":true,"time":"2020-05-01T12:13:44.202131883Z"}}`.
//! Extra fields are ignored. Capitalized keys (`Data`, `Ready`, `Time`) are
//! accepted too. `time` is parsed as RFC 3339 but carries no staleness
//! semantics.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::error::{NodeHealthError, Result};

/// Parsed response of one poll. Not retained past the iteration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadinessEnvelope {
    #[serde(alias = "Data")]
    pub data: ReadinessData,
}

/// Inner `data` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadinessData {
    /// Whether the node reports itself ready.
    #[serde(alias = "Ready")]
    pub ready: bool,
    /// Timestamp reported by the node.
    #[serde(alias = "Time")]
    pub time: DateTime<FixedOffset>,
}

impl ReadinessEnvelope {
    pub fn is_ready(&self) -> bool {
        self.data.ready
    }

    pub fn reported_at(&self) -> DateTime<FixedOffset> {
        self.data.time
    }
}

/// Decode a readiness envelope from a raw response body.
pub fn decode_readiness(body: &[u8]) -> Result<ReadinessEnvelope> {
    serde_json::from_slice(body)
        .map_err(|e| NodeHealthError::Decode(format!("invalid readiness envelope: {e}")))
}
