//! Benchmark parameter types.

use std::fmt;

/// Parameters for a graph benchmark run, rendered as the Criterion id.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra edges per vertex on top of the spanning tree.
    pub extra_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.extra_degree)
    }
}
