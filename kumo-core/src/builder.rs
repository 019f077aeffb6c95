//! Builder utilities for configuring [`Graph`] construction.
//!
//! Exposes the disconnected-input policy applied by spanning-tree queries and
//! the validation performed before a [`Graph`] is handed to callers.

use std::{fmt::Debug, hash::Hash};

use crate::{Result, edge::Edge, graph::Graph};

/// Controls how [`Graph::find_minimum_spanning_tree`] treats a graph with
/// more than one connected component.
///
/// # Examples
/// ```
/// use kumo_core::DisconnectedPolicy;
///
/// assert_eq!(DisconnectedPolicy::default(), DisconnectedPolicy::SpanningForest);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectedPolicy {
    /// Return a minimum spanning forest, one tree per component.
    #[default]
    SpanningForest,
    /// Fail with [`crate::GraphError::Disconnected`].
    Reject,
}

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use kumo_core::{DisconnectedPolicy, GraphBuilder, WeightedEdge};
///
/// let graph = GraphBuilder::new()
///     .with_disconnected_policy(DisconnectedPolicy::Reject)
///     .build(vec!['a', 'b'], vec![WeightedEdge::new('a', 'b', 1.0)])
///     .expect("edges reference known vertices");
/// assert_eq!(graph.disconnected_policy(), DisconnectedPolicy::Reject);
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    disconnected_policy: DisconnectedPolicy,
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{DisconnectedPolicy, GraphBuilder};
    ///
    /// let builder = GraphBuilder::new();
    /// assert_eq!(builder.disconnected_policy(), DisconnectedPolicy::SpanningForest);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the disconnected-input policy.
    #[must_use]
    pub fn with_disconnected_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.disconnected_policy = policy;
        self
    }

    /// Returns the configured disconnected-input policy.
    #[must_use]
    pub fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Validates the input and constructs a [`Graph`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::DuplicateVertex`] when a vertex is listed
    /// twice, [`crate::GraphError::NonFiniteWeight`] or
    /// [`crate::GraphError::NegativeWeight`] for an invalid weight, and
    /// [`crate::GraphError::UnknownEndpoint`] when an edge references a vertex
    /// outside `vertices`.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{GraphBuilder, GraphErrorCode, WeightedEdge};
    ///
    /// let err = GraphBuilder::new()
    ///     .build(vec![1, 2], vec![WeightedEdge::new(1, 3, 1.0)])
    ///     .expect_err("vertex 3 is missing");
    /// assert_eq!(err.code(), GraphErrorCode::UnknownEndpoint);
    /// ```
    pub fn build<V, E>(
        self,
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Graph<V, E>>
    where
        V: Eq + Hash + Clone + Debug,
        E: Edge<Vertex = V>,
    {
        Graph::assemble(
            vertices.into_iter().collect(),
            edges.into_iter().collect(),
            self.disconnected_policy,
        )
    }
}
