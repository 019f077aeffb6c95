//! Benchmark setup error type.

use kumo_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph was rejected or a query failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
