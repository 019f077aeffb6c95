//! Undirected weighted edges.
//!
//! Graphs are generic over any edge type implementing [`Edge`];
//! [`WeightedEdge`] is the ready-made implementation.

use std::cmp::Ordering;

/// An undirected connection between two vertices carrying a weight.
///
/// Endpoints are unordered: `vertex1` and `vertex2` only name the two ends.
pub trait Edge {
    /// Vertex type joined by the edge.
    type Vertex;

    /// Returns the first endpoint.
    fn vertex1(&self) -> &Self::Vertex;

    /// Returns the second endpoint.
    fn vertex2(&self) -> &Self::Vertex;

    /// Returns the edge weight.
    fn weight(&self) -> f64;

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint. A self-loop returns its single endpoint.
    fn other_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>
    where
        Self::Vertex: PartialEq,
    {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Returns `true` when `vertex` is one of the endpoints.
    fn touches(&self, vertex: &Self::Vertex) -> bool
    where
        Self::Vertex: PartialEq,
    {
        self.vertex1() == vertex || self.vertex2() == vertex
    }

    /// Returns `true` when both endpoints are the same vertex.
    fn is_self_loop(&self) -> bool
    where
        Self::Vertex: PartialEq,
    {
        self.vertex1() == self.vertex2()
    }
}

/// A plain undirected edge with an `f64` weight.
///
/// # Examples
/// ```
/// use kumo_core::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new("a", "b", 2.5);
/// assert_eq!(edge.other_vertex(&"a"), Some(&"b"));
/// assert_eq!(edge.other_vertex(&"c"), None);
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge between `vertex1` and `vertex2`.
    ///
    /// Weights are validated when the edge is handed to a graph.
    #[must_use]
    pub const fn new(vertex1: V, vertex2: V, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }

    /// Consumes the edge, returning `(vertex1, vertex2, weight)`.
    #[must_use]
    pub fn into_parts(self) -> (V, V, f64) {
        (self.vertex1, self.vertex2, self.weight)
    }
}

impl<V> Edge for WeightedEdge<V> {
    type Vertex = V;

    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.vertex1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.vertex2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

/// Weights compare by IEEE total order, so `0.0` and `-0.0` differ and a NaN
/// weight equals itself.
impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight).is_eq()
            && self.vertex1 == other.vertex1
            && self.vertex2 == other.vertex2
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex1.cmp(&other.vertex1))
            .then_with(|| self.vertex2.cmp(&other.vertex2))
    }
}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two edges by weight using IEEE total ordering.
pub(crate) fn cmp_weight<E: Edge>(left: &E, right: &E) -> Ordering {
    left.weight().total_cmp(&right.weight())
}

/// Returns the `k` lightest edges in ascending weight order.
///
/// `k` is clamped to `edges.len()`. Equal weights keep their input order, so
/// a single invocation is deterministic.
///
/// # Examples
/// ```
/// use kumo_core::{Edge, WeightedEdge, top_k_by_weight};
///
/// let edges = [
///     WeightedEdge::new(0, 1, 4.0),
///     WeightedEdge::new(1, 2, 1.0),
///     WeightedEdge::new(2, 3, 3.0),
/// ];
/// let lightest: Vec<f64> = top_k_by_weight(2, &edges)
///     .into_iter()
///     .map(Edge::weight)
///     .collect();
/// assert_eq!(lightest, [1.0, 3.0]);
/// ```
#[must_use]
pub fn top_k_by_weight<E: Edge>(k: usize, edges: &[E]) -> Vec<&E> {
    let k = k.min(edges.len());
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, &E)> = edges.iter().enumerate().collect();
    let by_weight_then_position = |left: &(usize, &E), right: &(usize, &E)| {
        cmp_weight(left.1, right.1).then_with(|| left.0.cmp(&right.0))
    };
    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, by_weight_then_position);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(by_weight_then_position);
    ranked.into_iter().map(|(_, edge)| edge).collect()
}
