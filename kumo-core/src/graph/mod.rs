//! Undirected weighted graph and its queries.
//!
//! A [`Graph`] owns the vertex and edge sequences handed to it, validates them
//! once, and derives an immutable adjacency view: every vertex index maps to
//! the indices of its incident edges. Queries never mutate the graph; each
//! builds its own scratch state.
//!
//! Self-loops and parallel edges are accepted. Spanning-tree queries skip
//! them naturally and shortest-path queries never relax along a self-loop.

mod mst;
mod shortest_path;

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
};

use tracing::{debug, instrument};

use crate::{
    Result,
    builder::{DisconnectedPolicy, GraphBuilder},
    edge::Edge,
    error::{GraphError, describe},
};

pub use self::{mst::MinimumSpanningForest, shortest_path::ShortestPath};

/// An undirected, weighted graph, possibly containing self-loops, parallel
/// edges, and unconnected components.
///
/// # Examples
/// ```
/// use kumo_core::{Graph, WeightedEdge};
///
/// let graph = Graph::new(
///     vec!["a", "b", "c", "d"],
///     vec![
///         WeightedEdge::new("a", "b", 1.0),
///         WeightedEdge::new("b", "c", 2.0),
///         WeightedEdge::new("a", "c", 4.0),
///         WeightedEdge::new("c", "d", 1.0),
///     ],
/// )?;
///
/// let tree = graph.find_minimum_spanning_tree()?;
/// assert_eq!(tree.total_weight(), 4.0);
///
/// let path = graph.find_shortest_path_between(&"a", &"d")?;
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.total_weight(), 4.0);
/// # Ok::<(), kumo_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    index: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
    disconnected_policy: DisconnectedPolicy,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V>,
{
    /// Constructs a graph with the default configuration.
    ///
    /// # Errors
    /// See [`GraphBuilder::build`].
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self> {
        GraphBuilder::new().build(vertices, edges)
    }

    #[instrument(
        name = "graph.build",
        err,
        skip_all,
        fields(vertices = vertices.len(), edges = edges.len(), policy = ?disconnected_policy),
    )]
    pub(crate) fn assemble(
        vertices: Vec<V>,
        edges: Vec<E>,
        disconnected_policy: DisconnectedPolicy,
    ) -> Result<Self> {
        let index = index_vertices(&vertices)?;

        let mut endpoints = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (position, edge) in edges.iter().enumerate() {
            let (left, right) = validate_edge(position, edge, &index)?;
            adjacency[left].push(position);
            if left != right {
                adjacency[right].push(position);
            }
            endpoints.push((left, right));
        }

        debug!(
            self_loops = endpoints.iter().filter(|(left, right)| left == right).count(),
            "graph validated"
        );

        Ok(Self {
            vertices,
            edges,
            index,
            endpoints,
            adjacency,
            disconnected_policy,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting self-loops and parallel edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices in the order they were supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges in the order they were supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns the policy applied to disconnected spanning-tree queries.
    #[must_use]
    #[rustfmt::skip]
    pub fn disconnected_policy(&self) -> DisconnectedPolicy { self.disconnected_policy }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the edges incident to `vertex`, each self-loop once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn incident_edges(&self, vertex: &V) -> Result<impl Iterator<Item = &E> + '_> {
        let position = self.vertex_index(vertex)?;
        Ok(self.adjacency[position]
            .iter()
            .map(|&edge| &self.edges[edge]))
    }

    /// Returns the number of edges incident to `vertex`, each self-loop once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        let position = self.vertex_index(vertex)?;
        Ok(self.adjacency[position].len())
    }

    /// Returns the distinct vertices adjacent to `vertex`.
    ///
    /// A vertex with a self-loop lists itself. Order follows the edge
    /// sequence.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<&V>> {
        let position = self.vertex_index(vertex)?;
        let mut seen = HashSet::new();
        Ok(self.adjacency[position]
            .iter()
            .map(|&edge| self.opposite(edge, position))
            .filter(|&neighbour| seen.insert(neighbour))
            .map(|neighbour| &self.vertices[neighbour])
            .collect())
    }

    pub(crate) fn vertex_index(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: describe(vertex),
            })
    }

    /// Returns the endpoint of `edge` opposite the vertex at `position`.
    fn opposite(&self, edge: usize, position: usize) -> usize {
        let (left, right) = self.endpoints[edge];
        if left == position { right } else { left }
    }
}

fn index_vertices<V>(vertices: &[V]) -> Result<HashMap<V, usize>>
where
    V: Eq + Hash + Clone + Debug,
{
    let mut index = HashMap::with_capacity(vertices.len());
    for (position, vertex) in vertices.iter().enumerate() {
        match index.entry(vertex.clone()) {
            Entry::Occupied(entry) => {
                return Err(GraphError::DuplicateVertex {
                    vertex: describe(vertex),
                    first: *entry.get(),
                    second: position,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    Ok(index)
}

fn validate_edge<V, E>(
    position: usize,
    edge: &E,
    index: &HashMap<V, usize>,
) -> Result<(usize, usize)>
where
    V: Eq + Hash + Debug,
    E: Edge<Vertex = V>,
{
    let weight = edge.weight();
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { edge: position });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            edge: position,
            weight: describe(&weight),
        });
    }

    let lookup = |vertex: &V| {
        index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownEndpoint {
                edge: position,
                vertex: describe(vertex),
            })
    };
    Ok((lookup(edge.vertex1())?, lookup(edge.vertex2())?))
}
