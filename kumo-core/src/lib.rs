//! kumo core library.
//!
//! Generic undirected weighted graphs with minimum spanning tree (Kruskal)
//! and shortest path (Dijkstra) queries, together with the union-find and
//! binary min-heap structures those queries are built on.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled graph queries emit:
//!
//! - `kumo_mst_queries` (counter)
//! - `kumo_shortest_path_queries` (counter)
//! - `kumo_shortest_path_misses` (counter)
//! - `kumo_shortest_path_heap_pops` (histogram)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod edge;
mod error;
mod graph;
mod heap;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DisconnectedPolicy, GraphBuilder},
    disjoint_set::{DisjointSet, SetId},
    edge::{Edge, WeightedEdge, top_k_by_weight},
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, HeapError,
        HeapErrorCode, Result,
    },
    graph::{Graph, MinimumSpanningForest, ShortestPath},
    heap::MinHeap,
};
