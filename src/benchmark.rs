//! An observational benchmark record (§9 "Benchmark record"): runs both
//! engines on the same graph and reports timings, estimated peak memory,
//! Tarjan's maximum explicit-stack depth, Kosaraju's transpose edge
//! count, and whether the two engines agree.
//!
//! This is diagnostic, not authoritative — tests must still compare
//! partitions directly (§8.3), never `results_match` alone.

use std::time::Instant;

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::kosaraju::kosaraju_scc;
use crate::tarjan::tarjan_scc_with_depth;

/// One run's worth of comparative timing and memory data for Tarjan vs.
/// Kosaraju on the same graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub tarjan_time_ms: f64,
    pub kosaraju_time_ms: f64,
    pub tarjan_peak_bytes_estimate: usize,
    pub kosaraju_peak_bytes_estimate: usize,
    pub tarjan_max_stack_depth: usize,
    pub kosaraju_transpose_edge_count: usize,
    pub results_match: bool,
}

/// Runs both engines on `graph` and returns a [`Benchmark`] record.
/// Fails if `graph` is empty, since neither engine accepts one.
pub fn run<U>(graph: &Graph<U>) -> GraphResult<Benchmark> {
    let n = graph.num_vertices();

    let start = Instant::now();
    let (tarjan_result, tarjan_max_stack_depth) = tarjan_scc_with_depth(graph)?;
    let tarjan_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let kosaraju_result = kosaraju_scc(graph)?;
    let kosaraju_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let results_match = {
        let mut a: Vec<Vec<usize>> = tarjan_result
            .components()
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect();
        let mut b: Vec<Vec<usize>> = kosaraju_result
            .components()
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect();
        a.sort();
        b.sort();
        a == b
    };

    // Tarjan keeps an index/lowlink/on_stack array of size n plus an
    // explicit frame and component stack bounded by n; Kosaraju keeps two
    // visited bitmaps of size n, a finish-order list of size n, and the
    // transpose adjacency. Both are O(n + m) estimates in machine words.
    let word = std::mem::size_of::<usize>();
    let tarjan_peak_bytes_estimate = word * (3 * n + n);
    let kosaraju_transpose_edge_count = graph.num_edges();
    let kosaraju_peak_bytes_estimate =
        word * (2 * n + n) + word * kosaraju_transpose_edge_count;

    Ok(Benchmark {
        tarjan_time_ms,
        kosaraju_time_ms,
        tarjan_peak_bytes_estimate,
        kosaraju_peak_bytes_estimate,
        tarjan_max_stack_depth,
        kosaraju_transpose_edge_count,
        results_match,
    })
}
