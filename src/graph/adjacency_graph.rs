//! Core graph structure — vertex arena + per-vertex adjacency lists + name index.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{
    Edge, GraphError, GraphKind, GraphResult, Vertex, VertexId, Weight, DEFAULT_WEIGHT,
};

/// In-memory adjacency-list graph over labelled vertices.
///
/// Vertices live in an arena indexed by [`VertexId`]. Deleting a vertex
/// leaves a tombstone in its slot instead of compacting, so every index handed
/// out earlier stays valid for the lifetime of the graph.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V = String> {
    /// Vertex slots, indexed by ID. Tombstones keep their position.
    vertices: Vec<Vertex<V>>,
    /// Outgoing arcs per slot, insertion order preserved.
    adjacency: Vec<Vec<Edge>>,
    /// Payload -> slot, live vertices only.
    index: HashMap<V, VertexId>,
    /// Directed or undirected, fixed at construction.
    kind: GraphKind,
}

impl<V> AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Create a new empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            index: HashMap::new(),
            kind,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(kind: GraphKind, vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            kind,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Number of vertex slots, tombstones included.
    ///
    /// This is the length every visited/distance array must have.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of vertices that have not been deleted.
    pub fn live_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.is_tombstone()).count()
    }

    /// Number of edges. An undirected edge is counted once.
    pub fn edge_count(&self) -> usize {
        match self.kind {
            GraphKind::Directed => self.adjacency.iter().map(Vec::len).sum(),
            GraphKind::Undirected => self
                .adjacency
                .iter()
                .enumerate()
                .map(|(source, list)| list.iter().filter(|e| e.target >= source).count())
                .sum(),
        }
    }

    /// Resolve a payload to its vertex index.
    pub fn locate_vertex(&self, label: &V) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn contains_vertex(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }

    /// Payload stored at `id`, `None` for a tombstone.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a slot of this graph. Indices are only obtained
    /// from earlier lookups or inserts, so an out-of-range one is a caller bug.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        assert!(
            id < self.vertices.len(),
            "vertex index {} out of range (vertex count {})",
            id,
            self.vertices.len()
        );
        self.vertices[id].data()
    }

    /// The whole slot at `id`, tombstone or not.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn slot(&self, id: VertexId) -> &Vertex<V> {
        &self.vertices[id]
    }

    /// Outgoing arcs of `id` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Iterate live vertices in ascending index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> {
        self.vertices
            .iter()
            .filter_map(|v| v.data().map(|data| (v.id, data)))
    }

    /// Weight of the arc `from -> to`, if both labels resolve and the arc exists.
    pub fn arc_weight(&self, from: &V, to: &V) -> Option<Weight> {
        let source = self.locate_vertex(from)?;
        let target = self.locate_vertex(to)?;
        self.find_edge(source, target)
            .map(|pos| self.adjacency[source][pos].weight)
    }

    /// Insert a vertex with the next sequential index.
    ///
    /// Fails with [`GraphError::VertexExists`] if the label is already live.
    pub fn insert_vertex(&mut self, label: V) -> GraphResult<VertexId> {
        if self.index.contains_key(&label) {
            log::debug!("insert_vertex rejected: {:?} already exists", label);
            return Err(GraphError::VertexExists(format!("{:?}", label)));
        }
        let id = self.push_vertex(label);
        Ok(id)
    }

    /// Delete a vertex by label, returning its payload.
    ///
    /// Every arc pointing at the vertex is removed from all other lists, its
    /// own list is cleared and its slot becomes a tombstone. The index is
    /// never reused.
    pub fn delete_vertex(&mut self, label: &V) -> GraphResult<V> {
        let id = self
            .index
            .remove(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))?;

        for (source, list) in self.adjacency.iter_mut().enumerate() {
            if source == id {
                continue;
            }
            if let Some(pos) = list.iter().position(|e| e.target == id) {
                list.remove(pos);
            }
        }
        self.adjacency[id].clear();

        let data = self.vertices[id].data.take();
        log::debug!("Deleted vertex {:?} at index {}", label, id);
        // The name index only holds live slots, so the payload is present.
        Ok(data.unwrap_or_else(|| label.clone()))
    }

    /// Replace the payload at `id`, re-keying the name index.
    ///
    /// Fails if `id` is out of range, the slot is a tombstone, or `value`
    /// already labels a different vertex. Returns the previous payload.
    pub fn put_vertex(&mut self, id: VertexId, value: V) -> GraphResult<V> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get(id)
            .ok_or(GraphError::IndexOutOfRange { index: id, len })?;
        if slot.is_tombstone() {
            return Err(GraphError::Tombstoned(id));
        }
        if let Some(&owner) = self.index.get(&value) {
            if owner != id {
                return Err(GraphError::VertexExists(format!("{:?}", value)));
            }
        }

        let old = self.vertices[id]
            .data
            .replace(value.clone())
            .ok_or(GraphError::Tombstoned(id))?;
        if self.index.get(&old) == Some(&id) {
            self.index.remove(&old);
        }
        self.index.insert(value, id);
        log::debug!("Vertex {} relabelled from {:?}", id, old);
        Ok(old)
    }

    /// Insert the arc `from -> to`.
    ///
    /// In undirected mode the reciprocal `to -> from` is stored as well. Both
    /// directions are checked before either list is touched, so a rejected
    /// insert leaves the graph unchanged.
    pub fn insert_arc(&mut self, from: &V, to: &V, weight: Weight) -> GraphResult<()> {
        let (source, target) = self.resolve_arc(from, to)?;

        let forward_exists = self.find_edge(source, target).is_some();
        let reverse_exists = self.kind == GraphKind::Undirected
            && source != target
            && self.find_edge(target, source).is_some();
        if forward_exists || reverse_exists {
            log::debug!("insert_arc rejected: {:?} -> {:?} already exists", from, to);
            return Err(GraphError::ArcExists {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            });
        }

        self.adjacency[source].push(Edge::new(target, weight));
        if self.kind == GraphKind::Undirected && source != target {
            self.adjacency[target].push(Edge::new(source, weight));
        }
        log::debug!("Inserted arc {} -> {} (weight {})", source, target, weight);
        Ok(())
    }

    /// Delete the arc `from -> to`, returning its weight.
    ///
    /// In undirected mode the reciprocal must also exist; it is checked before
    /// the forward arc is removed, so a failure leaves both lists intact.
    pub fn delete_arc(&mut self, from: &V, to: &V) -> GraphResult<Weight> {
        let (source, target) = self.resolve_arc(from, to)?;

        let forward = self.find_edge(source, target).ok_or_else(|| GraphError::ArcNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        })?;

        let reverse = if self.kind == GraphKind::Undirected && source != target {
            Some(
                self.find_edge(target, source)
                    .ok_or_else(|| GraphError::ReverseArcMissing {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                    })?,
            )
        } else {
            None
        };

        let removed = self.adjacency[source].remove(forward);
        if let Some(pos) = reverse {
            self.adjacency[target].remove(pos);
        }
        log::debug!("Deleted arc {} -> {}", source, target);
        Ok(removed.weight)
    }

    /// Bulk build: append `labels` as vertices in order, then insert `arcs`.
    ///
    /// `weights`, when given, must be parallel to `arcs`; otherwise every arc
    /// gets weight 0. A repeated label is appended anyway and takes over the
    /// name mapping from the earlier slot. Not atomic: an arc failure stops
    /// the build with the preceding arcs already inserted.
    pub fn create_graph<I>(
        &mut self,
        labels: I,
        arcs: &[(V, V)],
        weights: Option<&[Weight]>,
    ) -> GraphResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        if let Some(w) = weights {
            if w.len() != arcs.len() {
                return Err(GraphError::WeightCountMismatch {
                    arcs: arcs.len(),
                    weights: w.len(),
                });
            }
        }

        let labels = labels.into_iter();
        self.vertices.reserve(labels.size_hint().0);
        for label in labels {
            if self.index.contains_key(&label) {
                log::warn!(
                    "Duplicate label {:?} in bulk build; name index now points at the new slot",
                    label
                );
            }
            self.push_vertex(label);
        }

        for (position, (from, to)) in arcs.iter().enumerate() {
            let weight = weights.map_or(DEFAULT_WEIGHT, |w| w[position]);
            self.insert_arc(from, to, weight)
                .map_err(|source| GraphError::BulkArc {
                    position,
                    source: Box::new(source),
                })?;
        }

        log::info!(
            "Built {} graph: {} vertices, {} edges",
            self.kind,
            self.vertex_count(),
            self.edge_count()
        );
        Ok(())
    }

    /// Append a slot and map its label, overwriting any earlier mapping.
    fn push_vertex(&mut self, label: V) -> VertexId {
        let id = self.vertices.len();
        log::debug!("Inserted vertex {:?} at index {}", label, id);
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(id, label));
        self.adjacency.push(Vec::new());
        id
    }

    fn resolve_arc(&self, from: &V, to: &V) -> GraphResult<(VertexId, VertexId)> {
        let source = self
            .locate_vertex(from)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", from)))?;
        let target = self
            .locate_vertex(to)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", to)))?;
        Ok((source, target))
    }

    /// Position of the `source -> target` entry in `source`'s list.
    fn find_edge(&self, source: VertexId, target: VertexId) -> Option<usize> {
        self.adjacency[source].iter().position(|e| e.target == target)
    }
}

impl<V> Default for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn arc(from: &str, to: &str) -> (String, String) {
        (from.to_string(), to.to_string())
    }

    #[test]
    fn undirected_reverse_collision_leaves_lists_untouched() {
        let mut g: AdjacencyGraph = AdjacencyGraph::undirected();
        g.create_graph(labels(&["A", "B"]), &[], None).unwrap();
        // Plant a one-way entry that an undirected graph would never create.
        g.adjacency[1].push(Edge::new(0, 5));

        let err = g.insert_arc(&"A".into(), &"B".into(), 1).unwrap_err();
        assert!(matches!(err, GraphError::ArcExists { .. }));
        assert!(g.edges(0).is_empty());
        assert_eq!(g.edges(1), &[Edge::new(0, 5)]);
    }

    #[test]
    fn undirected_delete_with_missing_reverse_keeps_forward() {
        let mut g: AdjacencyGraph = AdjacencyGraph::undirected();
        g.create_graph(labels(&["A", "B"]), &[arc("A", "B")], Some(&[4][..]))
            .unwrap();
        g.adjacency[1].clear();

        let err = g.delete_arc(&"A".into(), &"B".into()).unwrap_err();
        assert!(matches!(err, GraphError::ReverseArcMissing { .. }));
        assert_eq!(g.edges(0), &[Edge::new(1, 4)]);
    }

    #[test]
    fn undirected_self_loop_stored_once() {
        let mut g: AdjacencyGraph = AdjacencyGraph::undirected();
        g.insert_vertex("A".into()).unwrap();
        g.insert_arc(&"A".into(), &"A".into(), 2).unwrap();
        assert_eq!(g.edges(0).len(), 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.delete_arc(&"A".into(), &"A".into()), Ok(2));
        assert!(g.edges(0).is_empty());
    }

    #[test]
    fn duplicate_bulk_label_remaps_index() {
        let mut g: AdjacencyGraph = AdjacencyGraph::directed();
        g.create_graph(labels(&["A", "B", "A"]), &[], None).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.locate_vertex(&"A".into()), Some(2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn vertex_out_of_range_panics() {
        let g: AdjacencyGraph = AdjacencyGraph::directed();
        g.vertex(0);
    }
}
