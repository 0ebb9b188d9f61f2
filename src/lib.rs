//! adjgraph — a small in-memory adjacency-list graph.
//!
//! Vertices carry a payload (a `String` label by default) and live at stable
//! integer indices; deleting one leaves a tombstone rather than shifting the
//! rest. Arcs carry integer weights and the graph is either directed or
//! undirected, fixed at construction. On top of the storage sit depth-first
//! and breadth-first traversal and single-source shortest paths (Dijkstra).

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_order, bfs_traverse, bfs_traverse_until, dfs_order, dfs_traverse, dfs_traverse_until,
    dijkstra, AdjacencyGraph, GraphBuilder, ShortestPaths,
};
pub use types::{
    Distance, Edge, GraphError, GraphKind, GraphResult, Vertex, VertexId, Weight, DEFAULT_WEIGHT,
    INFINITY,
};
