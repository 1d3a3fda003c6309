//! Exporter config loader (strict parsing).
//!
//! Sources, lowest precedence first: built-in defaults, an optional YAML file,
//! then command-line flags (or their environment fallbacks).

pub mod cli;
pub mod schema;

use std::fs;

use nodehealth_core::error::{NodeHealthError, Result};

pub use cli::Cli;
pub use schema::ExporterConfig;

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NodeHealthError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    // An empty document means "all defaults".
    if s.trim().is_empty() {
        return Ok(ExporterConfig::default());
    }
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| NodeHealthError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the effective config from parsed flags.
pub fn resolve(cli: &Cli) -> Result<ExporterConfig> {
    let base = match cli.config.as_deref() {
        Some(path) => load_from_file(path)?,
        None => ExporterConfig::default(),
    };
    let cfg = cli.apply(base);
    cfg.validate()?;
    Ok(cfg)
}
