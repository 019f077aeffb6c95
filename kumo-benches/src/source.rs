//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and extra edges are sprinkled on top, so both spanning-tree and
//! shortest-path queries always have work to do.

use kumo_core::{Graph, GraphError, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::params::GraphBenchParams;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Shape of the graph.
    pub params: GraphBenchParams,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Vertices `0..vertex_count` and their generated edges.
///
/// # Examples
///
/// ```
/// use kumo_benches::params::GraphBenchParams;
/// use kumo_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig {
///     params: GraphBenchParams { vertex_count: 10, extra_degree: 2 },
///     seed: 42,
/// };
/// let synthetic = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(synthetic.edges().len(), 9 + 20);
/// let graph = synthetic.into_graph().expect("generated edges are valid");
/// assert_eq!(graph.num_vertices(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge<usize>>,
}

impl SyntheticGraph {
    /// Generates a connected graph from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let GraphBenchParams {
            vertex_count,
            extra_degree,
        } = config.params;
        if vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let extra = vertex_count.saturating_mul(extra_degree);
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));

        for vertex in 1..vertex_count {
            let parent = rng.gen_range(0..vertex);
            edges.push(WeightedEdge::new(parent, vertex, rng.gen_range(1.0..100.0)));
        }
        for _ in 0..extra {
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            edges.push(WeightedEdge::new(left, right, rng.gen_range(1.0..100.0)));
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Number of generated vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Generated edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge<usize>] {
        &self.edges
    }

    /// Draws `count` seeded query pairs for shortest-path benchmarks.
    #[must_use]
    pub fn query_pairs(&self, count: usize, seed: u64) -> Vec<(usize, usize)> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                (
                    rng.gen_range(0..self.vertex_count),
                    rng.gen_range(0..self.vertex_count),
                )
            })
            .collect()
    }

    /// Validates the generated input and builds the graph.
    ///
    /// # Errors
    ///
    /// Propagates any [`GraphError`] raised during construction.
    pub fn into_graph(self) -> Result<Graph<usize, WeightedEdge<usize>>, GraphError> {
        Graph::new(0..self.vertex_count, self.edges)
    }
}
