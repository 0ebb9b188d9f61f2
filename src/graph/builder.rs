//! Fluent API for building AdjacencyGraph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphKind, GraphResult, Weight, DEFAULT_WEIGHT};

use super::AdjacencyGraph;

/// Fluent builder collecting vertices and arcs for one bulk build.
///
/// Vertices receive indices in the order they were added. Arcs are inserted
/// afterwards, in order, through [`AdjacencyGraph::create_graph`].
pub struct GraphBuilder<V = String> {
    kind: GraphKind,
    labels: Vec<V>,
    arcs: Vec<(V, V)>,
    weights: Vec<Weight>,
}

impl<V> GraphBuilder<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Create a new builder for a graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            arcs: Vec::new(),
            weights: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Add a vertex.
    pub fn vertex(&mut self, label: V) -> &mut Self {
        self.labels.push(label);
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.labels.extend(labels);
        self
    }

    /// Add a weighted arc.
    pub fn arc(&mut self, from: V, to: V, weight: Weight) -> &mut Self {
        self.arcs.push((from, to));
        self.weights.push(weight);
        self
    }

    /// Add an arc with the default weight of 0.
    pub fn link(&mut self, from: V, to: V) -> &mut Self {
        self.arc(from, to, DEFAULT_WEIGHT)
    }

    /// Build the final graph.
    pub fn build(self) -> GraphResult<AdjacencyGraph<V>> {
        let mut graph = AdjacencyGraph::with_capacity(self.kind, self.labels.len());
        graph.create_graph(self.labels, &self.arcs, Some(self.weights.as_slice()))?;
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V>
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
    use crate::types::GraphError;

    #[test]
    fn builds_in_insertion_order() {
        let mut builder = GraphBuilder::undirected();
        builder.vertices(["x", "y"]).vertex("z").arc("x", "z", 3).link("y", "z");
        let g = builder.build().unwrap();
        assert_eq!(g.locate_vertex(&"z"), Some(2));
        assert_eq!(g.arc_weight(&"z", &"x"), Some(3));
        assert_eq!(g.arc_weight(&"y", &"z"), Some(0));
    }

    #[test]
    fn failing_arc_reports_position() {
        let mut builder = GraphBuilder::directed();
        builder.vertices(["x", "y"]).link("x", "y").link("x", "y");
        match builder.build() {
            Err(GraphError::BulkArc { position, source }) => {
                assert_eq!(position, 1);
                assert!(matches!(*source, GraphError::ArcExists { .. }));
            }
            other => panic!("Expected BulkArc error, got {:?}", other.map(|g| g.edge_count())),
        }
    }
}
