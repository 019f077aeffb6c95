//! Type definitions for graph property-based tests.

use crate::WeightedEdge;

/// Shape and weight strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical integral weights.
    ManyIdentical,
    /// Random spanning tree plus a handful of extra edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
    /// Sparse graph salted with self-loops and parallel edges.
    Multigraph,
}

/// Fixture for graph property tests.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Generated edges.
    pub edges: Vec<WeightedEdge<usize>>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Size limits applied by the fixture generators.
pub(super) struct FixtureConfig {
    /// Largest vertex count a generator may produce.
    pub max_vertices: usize,
}

impl FixtureConfig {
    /// Loads the configuration from the environment, falling back to
    /// defaults.
    ///
    /// `KUMO_GRAPH_PBT_VERTEX_LIMIT` caps the vertex count (default: 40,
    /// minimum: 8).
    pub(super) fn load() -> Self {
        let max_vertices = std::env::var("KUMO_GRAPH_PBT_VERTEX_LIMIT")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(40)
            .max(8);
        Self { max_vertices }
    }
}
