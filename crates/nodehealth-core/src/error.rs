//! Shared error type across nodehealth crates.

use thiserror::Error;

/// Stable error codes, used in log fields and asserted by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid startup configuration.
    Config,
    /// The outbound poll could not complete (connect, DNS, body read).
    Transport,
    /// The poll response body is not a readiness envelope.
    Decode,
    /// The inbound listener could not bind.
    Bind,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// String representation used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Bind => "BIND",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NodeHealthError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum NodeHealthError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NodeHealthError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NodeHealthError::Config(_) => ErrorKind::Config,
            NodeHealthError::Transport(_) => ErrorKind::Transport,
            NodeHealthError::Decode(_) => ErrorKind::Decode,
            NodeHealthError::Bind(_) => ErrorKind::Bind,
            NodeHealthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Startup failures end the process; poll failures only get logged.
    pub fn is_fatal(&self) -> bool {
        matches!(self, NodeHealthError::Config(_) | NodeHealthError::Bind(_))
    }
}
