//! Shared test utilities used across kumo crates.

pub mod ci;
pub mod tracing;
