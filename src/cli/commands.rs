//! CLI command implementations.

use crate::graph::{bfs_order, dfs_order, dijkstra, AdjacencyGraph, GraphBuilder, ShortestPaths};
use crate::types::{GraphError, GraphKind, GraphResult, VertexId, Weight, DEFAULT_WEIGHT};

/// One `--arc FROM:TO[:WEIGHT]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Parse `FROM:TO` or `FROM:TO:WEIGHT`. Used as a clap value parser.
pub fn parse_arc(s: &str) -> Result<ArcSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, DEFAULT_WEIGHT),
        [from, to, w] => {
            let weight = w
                .trim()
                .parse::<Weight>()
                .map_err(|e| format!("invalid weight {:?}: {}", w, e))?;
            (*from, *to, weight)
        }
        _ => return Err(format!("expected FROM:TO[:WEIGHT], got {:?}", s)),
    };
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty vertex label in {:?}", s));
    }
    Ok(ArcSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Build a graph from CLI vertex and arc arguments.
pub fn build_graph(
    kind: GraphKind,
    vertices: &[String],
    arcs: &[ArcSpec],
) -> GraphResult<AdjacencyGraph> {
    let mut builder = GraphBuilder::new(kind);
    builder.vertices(vertices.iter().cloned());
    for arc in arcs {
        builder.arc(arc.from.clone(), arc.to.clone(), arc.weight);
    }
    builder.build()
}

/// The six-vertex weighted scenario: A..F with eight undirected edges.
pub fn demo_graph() -> GraphResult<AdjacencyGraph> {
    let labels: Vec<String> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let arcs: Vec<(String, String)> = [
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "C"),
        ("B", "F"),
        ("C", "E"),
        ("E", "F"),
        ("E", "D"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    let weights: [Weight; 8] = [7, 9, 11, 8, 20, 6, 1, 3];

    let mut graph = AdjacencyGraph::undirected();
    graph.create_graph(labels, &arcs, Some(&weights[..]))?;
    Ok(graph)
}

/// Print a summary of the graph.
pub fn cmd_info(graph: &AdjacencyGraph, json: bool) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "kind": graph.kind(),
            "vertices": graph.vertex_count(),
            "live_vertices": graph.live_vertex_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Kind: {}", graph.kind());
        println!("Vertices: {}", graph.vertex_count());
        println!("Live vertices: {}", graph.live_vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Depth-first visit order over all components.
pub fn cmd_dfs(graph: &AdjacencyGraph, json: bool) -> GraphResult<()> {
    print_order("dfs", graph, &dfs_order(graph), json);
    Ok(())
}

/// Breadth-first visit order over all components.
pub fn cmd_bfs(graph: &AdjacencyGraph, json: bool) -> GraphResult<()> {
    print_order("bfs", graph, &bfs_order(graph), json);
    Ok(())
}

/// Shortest distances and parents from `source`.
pub fn cmd_dijkstra(graph: &AdjacencyGraph, source: &str, json: bool) -> GraphResult<()> {
    let paths = dijkstra(graph, &source.to_string())
        .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", source)))?;
    print_paths(graph, &paths, json);
    Ok(())
}

/// Run Dijkstra from `A`, then DFS and BFS, on the demo graph.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = demo_graph()?;
    if json {
        let paths = dijkstra(&graph, &"A".to_string())
            .ok_or_else(|| GraphError::VertexNotFound("\"A\"".to_string()))?;
        let report = serde_json::json!({
            "dijkstra": paths_json(&graph, &paths),
            "dfs": labels_of(&graph, &dfs_order(&graph)),
            "bfs": labels_of(&graph, &bfs_order(&graph)),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
        return Ok(());
    }
    cmd_dijkstra(&graph, "A", false)?;
    cmd_dfs(&graph, false)?;
    cmd_bfs(&graph, false)
}

fn label_of(graph: &AdjacencyGraph, id: VertexId) -> String {
    graph.vertex(id).cloned().unwrap_or_default()
}

fn labels_of(graph: &AdjacencyGraph, ids: &[VertexId]) -> Vec<String> {
    ids.iter().map(|&id| label_of(graph, id)).collect()
}

fn print_order(name: &str, graph: &AdjacencyGraph, order: &[VertexId], json: bool) {
    let labels = labels_of(graph, order);
    if json {
        let out = serde_json::json!({ name: labels });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{} traverse:", name);
        println!("{} -> NULL", labels.join(" -> "));
    }
}

fn paths_json(graph: &AdjacencyGraph, paths: &ShortestPaths) -> Vec<serde_json::Value> {
    graph
        .vertices()
        .map(|(id, label)| {
            serde_json::json!({
                "vertex": label,
                "visited": paths.is_visited(id),
                "distance": paths.distance(id),
                "parent": paths.parent(id).map(|p| label_of(graph, p)),
            })
        })
        .collect()
}

fn print_paths(graph: &AdjacencyGraph, paths: &ShortestPaths, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&paths_json(graph, paths)).unwrap_or_default()
        );
        return;
    }
    for (id, label) in graph.vertices() {
        let distance = paths
            .distance(id)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        let parent = paths
            .parent(id)
            .map(|p| label_of(graph, p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} -> {} -> {} -> {}",
            label,
            paths.is_visited(id),
            distance,
            parent
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arc_specs() {
        assert_eq!(
            parse_arc("A:B:7"),
            Ok(ArcSpec {
                from: "A".into(),
                to: "B".into(),
                weight: 7
            })
        );
        assert_eq!(parse_arc("A:B").map(|a| a.weight), Ok(0));
        assert!(parse_arc("A").is_err());
        assert!(parse_arc("A:B:-1").is_err());
        assert!(parse_arc(":B").is_err());
    }

    #[test]
    fn demo_graph_has_expected_shape() {
        let g = demo_graph().unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 8);
    }
}
