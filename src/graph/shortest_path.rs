//! Single-source shortest paths (Dijkstra, array-scan variant).

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::types::{Distance, VertexId, INFINITY};

use super::AdjacencyGraph;

/// Result of a single-source shortest-path run.
///
/// All three arrays are indexed by [`VertexId`] and have one entry per slot.
/// Unreached vertices keep `distance == INFINITY` and `parent == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub visited: Vec<bool>,
    pub distance: Vec<Distance>,
    pub parent: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn unreached(source: VertexId, len: usize) -> Self {
        Self {
            source,
            visited: vec![false; len],
            distance: vec![INFINITY; len],
            parent: vec![None; len],
        }
    }

    /// Finite distance from the source, `None` if unreachable.
    pub fn distance(&self, id: VertexId) -> Option<Distance> {
        self.distance
            .get(id)
            .copied()
            .filter(|&d| d != INFINITY)
    }

    /// Predecessor on the shortest path. The source is its own parent.
    pub fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.parent.get(id).copied().flatten()
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    /// Vertices on the shortest path from the source to `target`, both ends
    /// included. `None` if `target` was not reached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.parent(current)?;
            path.push(current);
            if path.len() > self.parent.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from the vertex labelled `source`.
///
/// Each round relaxes every arc out of the frontier vertex, then scans all
/// slots for the unvisited vertex with the smallest finite distance. Ties go
/// to the lowest index, so output is reproducible. O(V²), which suits the
/// small graphs this structure is meant for.
///
/// Returns `None` without doing any work if `source` does not resolve.
pub fn dijkstra<V>(graph: &AdjacencyGraph<V>, source: &V) -> Option<ShortestPaths>
where
    V: Clone + Eq + Hash + Debug,
{
    let Some(start) = graph.locate_vertex(source) else {
        log::debug!("dijkstra: source {:?} not found", source);
        return None;
    };

    let n = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(start, n);
    paths.visited[start] = true;
    paths.distance[start] = 0;
    paths.parent[start] = Some(start);

    let mut frontier = start;
    loop {
        let base = paths.distance[frontier];
        for edge in graph.edges(frontier) {
            let candidate = base.saturating_add(Distance::from(edge.weight));
            if paths.distance[edge.target] > candidate {
                log::trace!(
                    "relax {} -> {}: {} => {}",
                    frontier,
                    edge.target,
                    paths.distance[edge.target],
                    candidate
                );
                paths.distance[edge.target] = candidate;
                paths.parent[edge.target] = Some(frontier);
            }
        }

        let mut next = None;
        let mut best = INFINITY;
        for (j, &d) in paths.distance.iter().enumerate() {
            if !paths.visited[j] && d < best {
                best = d;
                next = Some(j);
            }
        }

        match next {
            Some(j) => {
                paths.visited[j] = true;
                frontier = j;
            }
            None => break,
        }
    }

    Some(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_lowest_index() {
        // s reaches x (index 2) and y (index 1) at equal cost.
        let mut g = AdjacencyGraph::directed();
        g.create_graph(
            ["s", "y", "x", "t"],
            &[("s", "x"), ("s", "y"), ("x", "t"), ("y", "t")],
            Some(&[1, 1, 1, 1][..]),
        )
        .unwrap();
        let paths = dijkstra(&g, &"s").unwrap();
        assert_eq!(paths.distance(3), Some(2));
        // y is finalized first and relaxes t before x can.
        assert_eq!(paths.parent(3), Some(1));
    }

    #[test]
    fn unknown_source_is_noop() {
        let g: AdjacencyGraph<&str> = AdjacencyGraph::directed();
        assert!(dijkstra(&g, &"nope").is_none());
    }

    #[test]
    fn path_to_source_is_single_vertex() {
        let mut g = AdjacencyGraph::undirected();
        g.insert_vertex("only").unwrap();
        let paths = dijkstra(&g, &"only").unwrap();
        assert_eq!(paths.path_to(0), Some(vec![0]));
    }
}
