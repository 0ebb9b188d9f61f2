//! Error types for the adjgraph library.

use thiserror::Error;

use super::VertexId;

/// All recoverable failures reported by graph mutations.
///
/// Labels are carried pre-formatted (`{:?}` of the payload) so the error type
/// stays independent of the graph's payload type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Label does not resolve to a live vertex.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Label already names a live vertex.
    #[error("Vertex {0} already exists")]
    VertexExists(String),

    /// The arc (or, in undirected mode, its reciprocal) is already stored.
    #[error("Arc {from} -> {to} already exists")]
    ArcExists { from: String, to: String },

    /// The forward arc is not stored.
    #[error("Arc {from} -> {to} not found")]
    ArcNotFound { from: String, to: String },

    /// Undirected graph holds the forward arc but not its reciprocal.
    #[error("Reverse arc {to} -> {from} missing in undirected graph")]
    ReverseArcMissing { from: String, to: String },

    /// Index-based update outside the slot range.
    #[error("Vertex index {index} out of range (vertex count {len})")]
    IndexOutOfRange { index: VertexId, len: usize },

    /// Index-based update on a deleted slot.
    #[error("Vertex index {0} is a tombstone")]
    Tombstoned(VertexId),

    /// Bulk build given a weight list that does not line up with its arcs.
    #[error("Weight count mismatch: {arcs} arcs, {weights} weights")]
    WeightCountMismatch { arcs: usize, weights: usize },

    /// Bulk build stopped at the arc at `position`; earlier arcs stay inserted.
    #[error("Bulk build failed at arc {position}: {source}")]
    BulkArc {
        position: usize,
        #[source]
        source: Box<GraphError>,
    },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
