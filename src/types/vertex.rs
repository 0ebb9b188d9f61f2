//! Vertex slot stored in the graph arena.

use serde::Serialize;

use super::VertexId;

/// A vertex slot: its stable index plus the payload.
///
/// A deleted vertex keeps its slot with `data == None` (a tombstone) so that
/// indices held elsewhere stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex<V> {
    /// Position of this slot in the graph.
    pub id: VertexId,
    /// Payload, `None` once the vertex has been deleted.
    pub data: Option<V>,
}

impl<V> Vertex<V> {
    pub fn new(id: VertexId, data: V) -> Self {
        Self {
            id,
            data: Some(data),
        }
    }

    pub fn is_tombstone(&self) -> bool {
        self.data.is_none()
    }

    /// Payload of a live vertex.
    pub fn data(&self) -> Option<&V> {
        self.data.as_ref()
    }
}
