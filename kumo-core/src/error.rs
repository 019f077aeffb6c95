//! Error types for the kumo core library.
//!
//! Each public error enum is paired with a stable, machine-readable code enum
//! so callers can log or branch on failures without matching message text.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Misuse of a [`crate::DisjointSet`].
///
/// Every variant signals a logic error in the caller rather than bad data.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called for an element that is already registered.
    #[error("element is already registered (index {index})")]
    AlreadyRegistered {
        /// Index assigned to the element when it was first registered.
        index: usize,
    },
    /// The element was never passed to `make_set`.
    #[error("element was never registered with make_set")]
    Unregistered,
    /// Both elements already belong to the same set.
    #[error("elements already share set {root}")]
    RedundantUnion {
        /// Root index of the shared set.
        root: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// `make_set` was called twice for one element.
        AlreadyRegistered => AlreadyRegistered { .. } => "DISJOINT_SET_ALREADY_REGISTERED",
        /// The element was never registered.
        Unregistered => Unregistered => "DISJOINT_SET_UNREGISTERED",
        /// Both elements already share a set.
        RedundantUnion => RedundantUnion { .. } => "DISJOINT_SET_REDUNDANT_UNION",
    }
}

/// Empty-structure access on a [`crate::MinHeap`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// `peek_min` or `remove_min` was called on an empty heap.
    #[error("heap is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The heap held no elements.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// Error type produced when constructing or querying a [`crate::Graph`].
///
/// Vertices are named by their `Debug` rendering so the error stays
/// independent of the graph's vertex type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge carried a weight below zero.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending edge in the edge sequence.
        edge: usize,
        /// The rejected weight, rendered for display.
        weight: Arc<str>,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the edge sequence.
        edge: usize,
    },
    /// An edge endpoint does not appear in the vertex sequence.
    #[error("edge {edge} references vertex {vertex} which is not in the graph")]
    UnknownEndpoint {
        /// Position of the offending edge in the edge sequence.
        edge: usize,
        /// The dangling endpoint.
        vertex: Arc<str>,
    },
    /// The vertex sequence listed the same vertex twice.
    #[error("vertex {vertex} appears more than once (positions {first} and {second})")]
    DuplicateVertex {
        /// The repeated vertex.
        vertex: Arc<str>,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
    /// A query named a vertex that is not part of the graph.
    #[error("vertex {vertex} is not in the graph")]
    UnknownVertex {
        /// The vertex supplied by the caller.
        vertex: Arc<str>,
    },
    /// No path connects the requested vertices.
    #[error("no path exists from {start} to {end}")]
    NoPathExists {
        /// Start vertex of the query.
        start: Arc<str>,
        /// End vertex of the query.
        end: Arc<str>,
    },
    /// A spanning tree was requested for a disconnected graph while the
    /// graph is configured to reject spanning forests.
    #[error("graph has {components} connected components; a spanning tree needs exactly one")]
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("graph invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An edge endpoint does not appear in the vertex sequence.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT",
        /// The vertex sequence listed the same vertex twice.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// A query named a vertex that is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// No path connects the requested vertices.
        NoPathExists => NoPathExists { .. } => "GRAPH_NO_PATH",
        /// The graph is disconnected and forests are rejected.
        Disconnected => Disconnected { .. } => "GRAPH_DISCONNECTED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "GRAPH_INVARIANT_VIOLATION",
    }
}

impl GraphError {
    /// Returns `true` for the expected "unreachable" outcome of a
    /// shortest-path query.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(vec!["a", "b"], Vec::<WeightedEdge<&str>>::new())?;
    /// let err = graph
    ///     .find_shortest_path_between(&"a", &"b")
    ///     .expect_err("isolated vertices cannot be joined");
    /// assert!(err.is_no_path());
    /// # Ok::<(), kumo_core::GraphError>(())
    /// ```
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathExists { .. })
    }

    /// Returns `true` when the error was raised while validating graph input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NegativeWeight { .. }
                | Self::NonFiniteWeight { .. }
                | Self::UnknownEndpoint { .. }
                | Self::DuplicateVertex { .. }
        )
    }
}

/// Renders a value for inclusion in an error payload.
pub(crate) fn describe<T: fmt::Debug + ?Sized>(value: &T) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// Convenient result alias for graph operations.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
