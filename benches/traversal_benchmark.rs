use criterion::{black_box, criterion_group, criterion_main, Criterion};

use csgraph::{
    breadth_first_order, connected_components, depth_first_order, Connection, CsrGraph,
};

/// Ring of `n` nodes with a chord every `stride` nodes; strongly connected.
fn ring_with_chords(n: usize, stride: usize) -> CsrGraph<f64> {
    let mut edges = Vec::with_capacity(n * 2);
    for i in 0..n {
        edges.push((i as i32, ((i + 1) % n) as i32, 1.0));
        if i % stride == 0 {
            edges.push((i as i32, ((i + n / 2) % n) as i32, 1.0));
        }
    }
    CsrGraph::from_edges(n, &edges).unwrap()
}

/// Directed grid: every cell points right and down; many small components
/// under strong connectivity, one under weak.
fn grid(side: usize) -> CsrGraph<f64> {
    let n = side * side;
    let mut edges = Vec::with_capacity(n * 2);
    for r in 0..side {
        for c in 0..side {
            let v = (r * side + c) as i32;
            if c + 1 < side {
                edges.push((v, v + 1, 1.0));
            }
            if r + 1 < side {
                edges.push((v, v + side as i32, 1.0));
            }
        }
    }
    CsrGraph::from_edges(n, &edges).unwrap()
}

fn bench_orders(c: &mut Criterion) {
    let ring = ring_with_chords(10_000, 7);
    let lattice = grid(100);

    c.bench_function("bfs_order_ring_10k", |b| {
        b.iter(|| black_box(breadth_first_order(&ring, 0, true).unwrap()));
    });

    c.bench_function("dfs_order_ring_10k", |b| {
        b.iter(|| black_box(depth_first_order(&ring, 0, true).unwrap()));
    });

    c.bench_function("bfs_order_grid_100x100_undirected", |b| {
        b.iter(|| black_box(breadth_first_order(&lattice, 0, false).unwrap()));
    });
}

fn bench_components(c: &mut Criterion) {
    let ring = ring_with_chords(10_000, 7);
    let lattice = grid(100);

    c.bench_function("strong_components_ring_10k", |b| {
        b.iter(|| black_box(connected_components(&ring, true, Connection::Strong)));
    });

    c.bench_function("strong_components_grid_100x100", |b| {
        b.iter(|| black_box(connected_components(&lattice, true, Connection::Strong)));
    });

    c.bench_function("weak_components_grid_100x100", |b| {
        b.iter(|| black_box(connected_components(&lattice, true, Connection::Weak)));
    });
}

criterion_group!(benches, bench_orders, bench_components);
criterion_main!(benches);
