//! Top-level facade crate for nodehealth.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use nodehealth_core::*;
}

pub mod exporter {
    pub use nodehealth_exporter::*;
}
