use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undigraph::UndirectedGraph;

/// A `side` x `side` grid; the far corner is the last vertex any search meets.
fn grid(side: usize) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                graph.add_edge(v, v + 1).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(v, v + side).unwrap();
            }
        }
    }
    graph
}

fn bench_graph_edges(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("adj_graph_chain_build", |b| {
        b.iter(|| {
            let mut graph = UndirectedGraph::new(size);
            for i in 0..size - 1 {
                graph.add_edge(i, i + 1).unwrap();
            }
            black_box(graph)
        });
    });

    c.bench_function("adj_graph_star_remove", |b| {
        b.iter(|| {
            let mut graph = UndirectedGraph::new(size);
            for i in 1..size {
                graph.add_edge(0, i).unwrap();
            }
            // Oldest edges sit at the back of the hub's list.
            for i in 1..size {
                black_box(graph.remove_edge(0, i).unwrap());
            }
        });
    });
}

fn bench_graph_search(c: &mut Criterion) {
    let graph = grid(60);
    let far = graph.vertex_count() - 1;

    c.bench_function("adj_graph_bfs_grid", |b| {
        b.iter(|| black_box(graph.bfs(black_box(0), far).unwrap()));
    });

    c.bench_function("adj_graph_dfs_grid", |b| {
        b.iter(|| black_box(graph.dfs(black_box(0), far).unwrap()));
    });

    let mut split = UndirectedGraph::new(2000);
    for i in 0..999 {
        split.add_edge(i, i + 1).unwrap();
    }
    c.bench_function("adj_graph_bfs_unreachable", |b| {
        b.iter(|| black_box(split.bfs(0, 1999).unwrap()));
    });
}

criterion_group!(benches, bench_graph_edges, bench_graph_search);
criterion_main!(benches);
