//! All data types for the adjgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, GraphKind};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Stable index of a vertex slot. Assigned at insertion, never reused.
pub type VertexId = usize;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Accumulated path length produced by shortest-path queries.
pub type Distance = u64;

/// Distance sentinel for vertices that were never reached.
pub const INFINITY: Distance = Distance::MAX;

/// Weight used for arcs when a bulk build supplies no weights.
pub const DEFAULT_WEIGHT: Weight = 0;
