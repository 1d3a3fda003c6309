//! nodehealth core: transport-agnostic error types and the readiness wire format.
//!
//! This crate defines the contracts shared by the exporter binary and its
//! tests. It carries no runtime or HTTP dependencies so the readiness decoder
//! can be exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A hostile or broken target must surface as `NodeHealthError`, never as a
//! crashed poll loop.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorKind, NodeHealthError, Result};
