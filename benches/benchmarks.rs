//! Criterion benchmarks for adjgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::{bfs_order, dfs_order, dijkstra, AdjacencyGraph};
use adjgraph::types::{GraphKind, Weight};

/// Random graph over labels 0..vertex_count with up to `arcs_per_vertex`
/// outgoing arcs each. Rejected duplicates are simply skipped.
fn make_graph(kind: GraphKind, vertex_count: u32, arcs_per_vertex: u32) -> AdjacencyGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut arcs: Vec<(u32, u32)> = Vec::with_capacity((vertex_count * arcs_per_vertex) as usize);
    for from in 0..vertex_count {
        for _ in 0..arcs_per_vertex {
            arcs.push((from, rng.gen_range(0..vertex_count)));
        }
    }

    let mut graph = AdjacencyGraph::with_capacity(kind, vertex_count as usize);
    graph.create_graph(0..vertex_count, &[], None).unwrap();
    for (from, to) in arcs {
        let _ = graph.insert_arc(&from, &to, rng.gen_range(0..100));
    }
    graph
}

fn bench_bulk_build(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let arcs: Vec<(u32, u32)> = (0..10_000u32)
        .map(|i| (i, (i + rng.gen_range(1..10_000)) % 10_000))
        .collect();
    let weights: Vec<Weight> = arcs.iter().map(|_| rng.gen_range(0..100)).collect();

    c.bench_function("bulk_build_10k", |b| {
        b.iter(|| {
            let mut graph = AdjacencyGraph::with_capacity(GraphKind::Directed, 10_000);
            let _ = graph.create_graph(0..10_000u32, &arcs, Some(weights.as_slice()));
            black_box(graph.edge_count())
        })
    });
}

fn bench_insert_arc(c: &mut Criterion) {
    let mut graph = make_graph(GraphKind::Undirected, 10_000, 3);

    c.bench_function("insert_arc_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let from = rng.gen_range(0..10_000u32);
            let to = rng.gen_range(0..10_000u32);
            let _ = graph.insert_arc(&from, &to, 1);
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_graph(GraphKind::Directed, 100_000, 3);

    c.bench_function("dfs_100k", |b| b.iter(|| black_box(dfs_order(&graph))));
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_graph(GraphKind::Directed, 100_000, 3);

    c.bench_function("bfs_100k", |b| b.iter(|| black_box(bfs_order(&graph))));
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_graph(GraphKind::Undirected, 2_000, 4);

    c.bench_function("dijkstra_2k", |b| {
        b.iter(|| black_box(dijkstra(&graph, &0)))
    });
}

criterion_group!(
    benches,
    bench_bulk_build,
    bench_insert_arc,
    bench_dfs,
    bench_bfs,
    bench_dijkstra,
);
criterion_main!(benches);
