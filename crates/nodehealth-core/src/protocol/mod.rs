//! Wire formats spoken with the probed target.
//!
//! The target answers a plain `GET` with a small JSON readiness envelope.
//! Decoding is panic-free: malformed bodies are reported as
//! `NodeHealthError::Decode` so the poll loop can log and carry on.

pub mod readiness;
