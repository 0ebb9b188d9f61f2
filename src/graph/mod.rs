//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod shortest_path;
pub mod traversal;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use shortest_path::{dijkstra, ShortestPaths};
pub use traversal::{
    bfs_order, bfs_traverse, bfs_traverse_until, dfs_order, dfs_traverse, dfs_traverse_until,
};
