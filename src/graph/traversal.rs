//! Graph traversal algorithms (DFS, BFS).
//!
//! Both walks share the same outer loop: every slot is tried in ascending
//! index order and each still-unvisited live vertex starts a fresh walk, so
//! disconnected components are all covered. Tombstones are never visited.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::VertexId;

use super::AdjacencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    DepthFirst,
    BreadthFirst,
}

/// Depth-first traversal over every component.
///
/// Pre-order: a vertex is marked and passed to `visit` before any of its
/// neighbors, which are then explored in adjacency-list order. `visited` is
/// grown to [`AdjacencyGraph::vertex_count`] if shorter; entries already
/// `true` are skipped. The value returned by `visit` is ignored.
pub fn dfs_traverse<V, F>(graph: &AdjacencyGraph<V>, visited: &mut Vec<bool>, mut visit: F)
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    walk(graph, visited, Strategy::DepthFirst, false, |id, data| {
        visit(id, data);
        true
    });
}

/// Breadth-first traversal over every component.
///
/// A vertex is marked and visited when it is enqueued, so within a component
/// the visit order is layer by layer. The value returned by `visit` is ignored.
pub fn bfs_traverse<V, F>(graph: &AdjacencyGraph<V>, visited: &mut Vec<bool>, mut visit: F)
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    walk(graph, visited, Strategy::BreadthFirst, false, |id, data| {
        visit(id, data);
        true
    });
}

/// Like [`dfs_traverse`], but stops the whole traversal as soon as `visit`
/// returns `false`. Returns `true` if the traversal ran to completion.
pub fn dfs_traverse_until<V, F>(
    graph: &AdjacencyGraph<V>,
    visited: &mut Vec<bool>,
    visit: F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    walk(graph, visited, Strategy::DepthFirst, true, visit)
}

/// Like [`bfs_traverse`], but stops the whole traversal as soon as `visit`
/// returns `false`. Returns `true` if the traversal ran to completion.
pub fn bfs_traverse_until<V, F>(
    graph: &AdjacencyGraph<V>,
    visited: &mut Vec<bool>,
    visit: F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    walk(graph, visited, Strategy::BreadthFirst, true, visit)
}

/// Vertex ids in depth-first visit order, starting from an empty visited set.
pub fn dfs_order<V>(graph: &AdjacencyGraph<V>) -> Vec<VertexId>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut visited = vec![false; graph.vertex_count()];
    dfs_traverse(graph, &mut visited, |id, _| {
        order.push(id);
        true
    });
    order
}

/// Vertex ids in breadth-first visit order, starting from an empty visited set.
pub fn bfs_order<V>(graph: &AdjacencyGraph<V>) -> Vec<VertexId>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut visited = vec![false; graph.vertex_count()];
    bfs_traverse(graph, &mut visited, |id, _| {
        order.push(id);
        true
    });
    order
}

fn walk<V, F>(
    graph: &AdjacencyGraph<V>,
    visited: &mut Vec<bool>,
    strategy: Strategy,
    stop_on_false: bool,
    mut visit: F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    if visited.len() < graph.vertex_count() {
        visited.resize(graph.vertex_count(), false);
    }

    for start in 0..graph.vertex_count() {
        if visited[start] || graph.slot(start).is_tombstone() {
            continue;
        }
        log::trace!("{:?} component walk from vertex {}", strategy, start);
        let completed = match strategy {
            Strategy::DepthFirst => dfs_component(graph, start, visited, &mut visit),
            Strategy::BreadthFirst => bfs_component(graph, start, visited, &mut visit),
        };
        if stop_on_false && !completed {
            return false;
        }
    }
    true
}

/// Mark and visit `id`. Returns what the visitor returned.
fn mark<V, F>(
    graph: &AdjacencyGraph<V>,
    id: VertexId,
    visited: &mut [bool],
    visit: &mut F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    visited[id] = true;
    match graph.vertex(id) {
        Some(data) => visit(id, data),
        None => true,
    }
}

/// Iterative pre-order DFS. Each stack frame is (vertex, next edge position),
/// which reproduces the recursive visit order without recursion depth limits.
fn dfs_component<V, F>(
    graph: &AdjacencyGraph<V>,
    start: VertexId,
    visited: &mut [bool],
    visit: &mut F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    if !mark(graph, start, visited, visit) {
        return false;
    }
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, pos) = *frame;
        match graph.edges(node).get(pos) {
            Some(edge) => {
                frame.1 += 1;
                let next = edge.target;
                if !visited[next] {
                    if !mark(graph, next, visited, visit) {
                        return false;
                    }
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    true
}

fn bfs_component<V, F>(
    graph: &AdjacencyGraph<V>,
    start: VertexId,
    visited: &mut [bool],
    visit: &mut F,
) -> bool
where
    V: Clone + Eq + Hash + Debug,
    F: FnMut(VertexId, &V) -> bool,
{
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    if !mark(graph, start, visited, visit) {
        return false;
    }
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges(current) {
            let next = edge.target;
            if visited[next] {
                continue;
            }
            if !mark(graph, next, visited, visit) {
                return false;
            }
            queue.push_back(next);
        }
    }
    true
}
