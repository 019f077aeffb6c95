//! Shared helpers for graph property tests.

use proptest::test_runner::TestCaseError;

use crate::{Graph, WeightedEdge};

use super::types::GraphFixture;

/// Relative tolerance used when comparing summed weights.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when two weight sums agree up to accumulated rounding.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= RELATIVE_TOLERANCE * scale
}

/// Builds the graph under test from a fixture.
pub(super) fn build_graph(
    fixture: &GraphFixture,
) -> Result<Graph<usize, WeightedEdge<usize>>, TestCaseError> {
    Graph::new(0..fixture.vertex_count, fixture.edges.iter().cloned()).map_err(|err| {
        TestCaseError::fail(format!(
            "graph construction failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })
}
