//! Benchmark support crate for kumo.
//!
//! Provides seeded synthetic graphs and parameter types for the Criterion
//! benchmarks covering spanning-tree and shortest-path queries.

pub mod error;
pub mod params;
pub mod source;
