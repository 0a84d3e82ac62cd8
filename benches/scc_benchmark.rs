//! Comparative Tarjan vs. Kosaraju timing over generated graphs of
//! varying size and density, exercising [`scc_core::benchmark::run`].

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use scc_core::benchmark;
use scc_core::graph::Graph;

fn chain_graph(n: usize) -> Graph {
    let mut g: Graph = Graph::with_vertices(n);
    for i in 0..n.saturating_sub(1) {
        g.add_edge(i, i + 1).unwrap();
    }
    g
}

fn dense_graph(n: usize, out_degree: usize) -> Graph {
    let mut g: Graph = Graph::with_vertices(n);
    for i in 0..n {
        for j in 1..=out_degree {
            let dst = (i + j) % n;
            let _ = g.add_edge(i, dst);
        }
    }
    g
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for &n in &[100usize, 1_000, 10_000] {
        let graph = chain_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| benchmark::run(graph).unwrap());
        });
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense");
    for &n in &[1_200usize, 2_000] {
        let graph = dense_graph(n, n / 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| benchmark::run(graph).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_dense);
criterion_main!(benches);
