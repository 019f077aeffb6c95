//! Reference oracles for graph property verification.
//!
//! Both oracles work on a dense weight matrix that keeps the lightest edge
//! between each vertex pair and drops self-loops. They are deliberately
//! simple `O(V^2)` and `O(V^3)` algorithms so they share no code with the
//! implementations under test.

use crate::{Edge, WeightedEdge};

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of forest edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Lightest edge weight per vertex pair, `INFINITY` when absent.
fn weight_matrix(vertex_count: usize, edges: &[WeightedEdge<usize>]) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![f64::INFINITY; vertex_count]; vertex_count];
    for edge in edges {
        let (left, right) = (*edge.vertex1(), *edge.vertex2());
        if left == right {
            continue;
        }
        let weight = edge.weight().min(matrix[left][right]);
        matrix[left][right] = weight;
        matrix[right][left] = weight;
    }
    matrix
}

/// Computes a minimum spanning forest with Prim's algorithm, restarting from
/// the lowest unreached vertex for every component.
pub(super) fn prim(vertex_count: usize, edges: &[WeightedEdge<usize>]) -> PrimResult {
    let matrix = weight_matrix(vertex_count, edges);
    let mut in_tree = vec![false; vertex_count];
    let mut best = vec![f64::INFINITY; vertex_count];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&vertex| !in_tree[vertex])
            .min_by(|&left, &right| best[left].total_cmp(&best[right]));
        let Some(vertex) = next else {
            break;
        };

        if best[vertex].is_finite() {
            total_weight += best[vertex];
            edge_count += 1;
        } else {
            component_count += 1;
        }
        in_tree[vertex] = true;

        for other in 0..vertex_count {
            if !in_tree[other] && matrix[vertex][other] < best[other] {
                best[other] = matrix[vertex][other];
            }
        }
    }

    PrimResult {
        total_weight,
        edge_count,
        component_count,
    }
}

/// All-pairs shortest distances via Floyd-Warshall; `INFINITY` marks
/// unreachable pairs.
pub(super) fn floyd_warshall(vertex_count: usize, edges: &[WeightedEdge<usize>]) -> Vec<Vec<f64>> {
    let mut distances = weight_matrix(vertex_count, edges);
    for (vertex, row) in distances.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }

    for via in 0..vertex_count {
        for from in 0..vertex_count {
            let head = distances[from][via];
            if head.is_infinite() {
                continue;
            }
            for to in 0..vertex_count {
                let candidate = head + distances[via][to];
                if candidate < distances[from][to] {
                    distances[from][to] = candidate;
                }
            }
        }
    }
    distances
}
