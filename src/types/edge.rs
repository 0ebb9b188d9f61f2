//! Graph mode and the adjacency entry struct.

use serde::Serialize;

use super::{VertexId, Weight};

/// Whether arcs are one-way or stored with their reciprocal.
///
/// Fixed when the graph is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Arcs are stored only in the source vertex's list.
    #[default]
    Directed,
    /// Every arc A -> B is mirrored by B -> A with the same weight.
    Undirected,
}

impl GraphKind {
    /// Return a human-readable name for this graph kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a graph kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "digraph" => Some(Self::Directed),
            "undirected" | "graph" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One outgoing entry in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Neighbor the arc points at.
    pub target: VertexId,
    /// Arc weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new adjacency entry.
    pub fn new(target: VertexId, weight: Weight) -> Self {
        Self { target, weight }
    }
}
