//! Single-source shortest paths (Dijkstra).
//!
//! Uses [`MinHeap`] without decrease-key: an improved cost pushes a fresh
//! frontier entry and superseded entries are discarded when extracted for an
//! already visited vertex. Requires non-negative weights, which graph
//! construction guarantees.

use std::{cmp::Ordering, fmt::Debug, hash::Hash};

use tracing::{debug, instrument};

use crate::{
    Result,
    edge::Edge,
    error::{GraphError, describe},
    heap::MinHeap,
};

use super::Graph;

/// Ordered edges of a minimum-weight path.
///
/// The first edge touches the start vertex and the last edge touches the end
/// vertex; consecutive edges share an endpoint.
#[derive(Clone, Debug)]
pub struct ShortestPath<'g, E> {
    edges: Vec<&'g E>,
    total_weight: f64,
}

impl<'g, E> ShortestPath<'g, E> {
    const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Returns the path edges from start to end.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Returns the summed weight of the path.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the path from a vertex to itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the path, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

/// Tentative cost of reaching a vertex, ordered by cost then vertex index.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    vertex: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query scratch state indexed by vertex position.
struct Search {
    costs: Vec<f64>,
    visited: Vec<bool>,
    via: Vec<Option<usize>>,
    frontier: MinHeap<Frontier>,
    pops: usize,
}

impl Search {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut costs = vec![f64::INFINITY; vertex_count];
        costs[source] = 0.0;
        let mut frontier = MinHeap::with_capacity(vertex_count);
        frontier.insert(Frontier {
            cost: 0.0,
            vertex: source,
        });
        Self {
            costs,
            visited: vec![false; vertex_count],
            via: vec![None; vertex_count],
            frontier,
            pops: 0,
        }
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V>,
{
    /// Returns the edges of a minimum-weight path from `start` to `end`.
    ///
    /// The path is empty when `start` and `end` are the same vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either vertex is not in the
    /// graph and [`GraphError::NoPathExists`] when `end` cannot be reached
    /// from `start`.
    #[instrument(
        name = "graph.shortest_path",
        err,
        skip(self),
        fields(vertices = self.num_vertices(), edges = self.num_edges()),
    )]
    pub fn find_shortest_path_between(&self, start: &V, end: &V) -> Result<ShortestPath<'_, E>> {
        #[cfg(feature = "metrics")]
        metrics::counter!("kumo_shortest_path_queries").increment(1);

        let source = self.vertex_index(start)?;
        let target = self.vertex_index(end)?;
        if source == target {
            return Ok(ShortestPath::empty());
        }

        let search = self.explore(source, target)?;

        #[cfg(feature = "metrics")]
        metrics::histogram!("kumo_shortest_path_heap_pops").record(search.pops as f64);

        let Some(edges) = self.trace_back(source, target, &search) else {
            #[cfg(feature = "metrics")]
            metrics::counter!("kumo_shortest_path_misses").increment(1);
            return Err(GraphError::NoPathExists {
                start: describe(start),
                end: describe(end),
            });
        };

        let total_weight = search.costs[target];
        debug!(
            hops = edges.len(),
            total_weight,
            heap_pops = search.pops,
            "shortest path found"
        );
        Ok(ShortestPath {
            edges,
            total_weight,
        })
    }

    /// Runs Dijkstra from `source` until `target` is settled or the frontier
    /// is exhausted.
    fn explore(&self, source: usize, target: usize) -> Result<Search> {
        let mut search = Search::new(self.num_vertices(), source);

        while !search.frontier.is_empty() {
            let Frontier { cost, vertex } =
                search
                    .frontier
                    .remove_min()
                    .map_err(|_| GraphError::InvariantViolation {
                        invariant: "non-empty frontier must yield a minimum",
                    })?;
            search.pops += 1;

            if search.visited[vertex] {
                continue;
            }
            search.visited[vertex] = true;
            if vertex == target {
                break;
            }

            for &edge in &self.adjacency[vertex] {
                let (left, right) = self.endpoints[edge];
                if left == right {
                    continue;
                }
                let next = if left == vertex { right } else { left };
                if search.visited[next] {
                    continue;
                }
                let candidate = cost + self.edges[edge].weight();
                // A sum of finite weights may overflow to infinity; the first
                // discovery still records a predecessor.
                if candidate < search.costs[next] || search.via[next].is_none() {
                    search.costs[next] = candidate;
                    search.via[next] = Some(edge);
                    search.frontier.insert(Frontier {
                        cost: candidate,
                        vertex: next,
                    });
                }
            }
        }

        Ok(search)
    }

    /// Follows predecessor edges from `target` back to `source`.
    ///
    /// Returns `None` when `target` was never settled or the chain breaks.
    fn trace_back(&self, source: usize, target: usize, search: &Search) -> Option<Vec<&E>> {
        if !search.visited[target] {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            if edges.len() >= self.num_vertices() {
                return None;
            }
            let edge = search.via[current]?;
            edges.push(&self.edges[edge]);
            current = self.opposite(edge, current);
        }
        edges.reverse();
        Some(edges)
    }
}
