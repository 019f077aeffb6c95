//! Shortest-path properties.
//!
//! For every sampled vertex pair the returned path must be a connected walk
//! from start to end whose weight equals the Floyd-Warshall distance.
//! Unreachable pairs must fail with a no-path error and a vertex paired
//! with itself must yield an empty path.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, Graph, WeightedEdge};

use super::helpers::{build_graph, weights_match};
use super::oracle::floyd_warshall;
use super::types::GraphFixture;

/// Upper bound on sources checked per fixture.
const MAX_SOURCES: usize = 6;

/// Runs the Floyd-Warshall agreement property for the given fixture.
pub(super) fn run_distance_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = build_graph(fixture)?;
    let distances = floyd_warshall(fixture.vertex_count, &fixture.edges);
    let stride = (fixture.vertex_count / MAX_SOURCES).max(1);

    for start in (0..fixture.vertex_count).step_by(stride) {
        for end in 0..fixture.vertex_count {
            check_pair(&graph, start, end, distances[start][end]).map_err(|err| {
                TestCaseError::fail(format!(
                    "{err} (distribution={:?}, vertices={}, edges={})",
                    fixture.distribution,
                    fixture.vertex_count,
                    fixture.edges.len(),
                ))
            })?;
        }
    }
    Ok(())
}

fn check_pair(
    graph: &Graph<usize, WeightedEdge<usize>>,
    start: usize,
    end: usize,
    expected: f64,
) -> Result<(), String> {
    let result = graph.find_shortest_path_between(&start, &end);

    if expected.is_infinite() {
        return match result {
            Err(err) if err.is_no_path() => Ok(()),
            Err(err) => Err(format!("{start}->{end}: unexpected error {err}")),
            Ok(path) => Err(format!(
                "{start}->{end}: oracle finds no path but got {} edges",
                path.len()
            )),
        };
    }

    let path = result.map_err(|err| format!("{start}->{end}: reachable pair failed: {err}"))?;
    if start == end && !path.is_empty() {
        return Err(format!("{start}->{start}: path to self is not empty"));
    }
    if !weights_match(path.total_weight(), expected) {
        return Err(format!(
            "{start}->{end}: weight {} differs from oracle distance {expected}",
            path.total_weight()
        ));
    }
    validate_walk(start, end, path.edges())
}

/// Confirms the edges form a walk from `start` to `end`.
fn validate_walk(start: usize, end: usize, edges: &[&WeightedEdge<usize>]) -> Result<(), String> {
    let mut current = start;
    for (i, edge) in edges.iter().enumerate() {
        if edge.is_self_loop() {
            return Err(format!("{start}->{end}: edge {i} is a self-loop"));
        }
        let from = current;
        current = *edge
            .other_vertex(&from)
            .ok_or_else(|| format!("{start}->{end}: edge {i} does not touch vertex {from}"))?;
    }
    if current != end {
        return Err(format!("{start}->{end}: walk ends at {current}"));
    }
    Ok(())
}
