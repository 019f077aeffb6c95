//! Minimum spanning tree construction (Kruskal).
//!
//! Edges are scanned in ascending weight order and accepted whenever they
//! join two different components of a disjoint set seeded with one singleton
//! per vertex. A redundant union marks the edge as cycle-forming.

use std::{fmt::Debug, hash::Hash};

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    builder::DisconnectedPolicy,
    disjoint_set::DisjointSet,
    edge::{Edge, top_k_by_weight},
    error::{DisjointSetError, GraphError},
};

use super::Graph;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are listed in ascending weight order.
#[derive(Clone, Debug)]
pub struct MinimumSpanningForest<'g, E> {
    edges: Vec<&'g E>,
    component_count: usize,
    total_weight: f64,
}

impl<'g, E> MinimumSpanningForest<'g, E> {
    /// Returns the MST/forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V>,
{
    /// Returns the edges of a minimum spanning tree.
    ///
    /// If several minimum spanning trees exist any one of them is returned.
    /// A disconnected graph yields a minimum spanning forest, or an error when
    /// the graph was built with [`DisconnectedPolicy::Reject`].
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] for a disconnected graph under
    /// [`DisconnectedPolicy::Reject`].
    #[instrument(
        name = "graph.mst",
        err,
        skip(self),
        fields(
            vertices = self.num_vertices(),
            edges = self.num_edges(),
            policy = ?self.disconnected_policy,
        ),
    )]
    pub fn find_minimum_spanning_tree(&self) -> Result<MinimumSpanningForest<'_, E>> {
        #[cfg(feature = "metrics")]
        metrics::counter!("kumo_mst_queries").increment(1);

        let mut components = DisjointSet::with_capacity(self.num_vertices());
        for vertex in &self.vertices {
            components
                .make_set(vertex)
                .map_err(|_| GraphError::InvariantViolation {
                    invariant: "graph vertices must be unique",
                })?;
        }

        let mut edges = Vec::with_capacity(self.num_vertices().saturating_sub(1));
        let mut total_weight = 0.0;
        for edge in top_k_by_weight(self.num_edges(), &self.edges) {
            if components.set_count() <= 1 {
                break;
            }
            match components.union(edge.vertex1(), edge.vertex2()) {
                Ok(_) => {
                    total_weight += edge.weight();
                    edges.push(edge);
                }
                Err(DisjointSetError::RedundantUnion { .. }) => {}
                Err(_) => {
                    return Err(GraphError::InvariantViolation {
                        invariant: "edge endpoints must be registered vertices",
                    });
                }
            }
        }

        let component_count = components.set_count();
        if component_count > 1 {
            match self.disconnected_policy {
                DisconnectedPolicy::Reject => {
                    return Err(GraphError::Disconnected {
                        components: component_count,
                    });
                }
                DisconnectedPolicy::SpanningForest => {
                    warn!(
                        components = component_count,
                        "graph is disconnected, returning a spanning forest"
                    );
                }
            }
        }

        debug!(
            accepted = edges.len(),
            components = component_count,
            total_weight,
            "minimum spanning forest computed"
        );
        Ok(MinimumSpanningForest {
            edges,
            component_count,
            total_weight,
        })
    }
}
