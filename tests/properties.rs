//! Property-based checks of the universal invariants in §8: partition,
//! algorithm equivalence, transpose involution, copy independence, edge
//! counting, and the heuristic's determinism. Each property is checked
//! against randomly generated graphs via `quickcheck`, rather than the
//! fixed scenarios in `tests/scenarios.rs`.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use scc_core::dispatcher::{build_condensation, find, recommend_algorithm};
use scc_core::graph::Graph;
use scc_core::kosaraju::kosaraju_scc;
use scc_core::tarjan::tarjan_scc;

/// A small random directed graph, generated by picking a vertex count and
/// then a handful of candidate edges (duplicates and self-loops allowed,
/// same as `Graph::add_edge` itself tolerates self-loops and rejects
/// duplicates without erroring the generator).
#[derive(Debug, Clone)]
struct RandomGraph {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = 1 + (usize::arbitrary(g) % 24);
        let num_edges = usize::arbitrary(g) % (num_vertices * 3 + 1);
        let edges = (0..num_edges)
            .map(|_| {
                let src = usize::arbitrary(g) % num_vertices;
                let dst = usize::arbitrary(g) % num_vertices;
                (src, dst)
            })
            .collect();
        RandomGraph { num_vertices, edges }
    }
}

impl RandomGraph {
    fn build(&self) -> Graph {
        let mut g = Graph::with_vertices(self.num_vertices);
        for &(src, dst) in &self.edges {
            let _ = g.add_edge(src, dst);
        }
        g
    }
}

fn sorted_partition(result: &scc_core::result::SccResult) -> Vec<Vec<usize>> {
    let mut partition: Vec<Vec<usize>> = result
        .components()
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.sort_unstable();
            c
        })
        .collect();
    partition.sort();
    partition
}

#[quickcheck]
fn partition_covers_every_vertex_exactly_once(rg: RandomGraph) -> bool {
    let g = rg.build();
    let result = match find(&g) {
        Ok(r) => r,
        Err(_) => return true,
    };

    let mut seen = vec![false; g.num_vertices()];
    for component in result.components() {
        for &v in component {
            if seen[v] {
                return false;
            }
            seen[v] = true;
        }
    }
    seen.iter().all(|&s| s)
}

#[quickcheck]
fn vertex_to_component_map_agrees_with_components(rg: RandomGraph) -> bool {
    let g = rg.build();
    let result = match find(&g) {
        Ok(r) => r,
        Err(_) => return true,
    };

    for (c, members) in result.components().iter().enumerate() {
        for &v in members {
            if result.vertex_component(v).unwrap() != c {
                return false;
            }
        }
    }
    true
}

#[quickcheck]
fn tarjan_and_kosaraju_agree_on_the_unordered_partition(rg: RandomGraph) -> bool {
    let g = rg.build();
    match (tarjan_scc(&g), kosaraju_scc(&g)) {
        (Ok(t), Ok(k)) => sorted_partition(&t) == sorted_partition(&k),
        (Err(_), Err(_)) => true,
        _ => false,
    }
}

#[quickcheck]
fn transpose_of_transpose_is_edge_set_equal(rg: RandomGraph) -> bool {
    let g = rg.build();
    let back = g.transpose().transpose();

    let mut original: Vec<_> = g.edges().collect();
    let mut round_tripped: Vec<_> = back.edges().collect();
    original.sort_unstable();
    round_tripped.sort_unstable();
    original == round_tripped
}

#[quickcheck]
fn copy_is_independent_of_mutations_to_the_original(rg: RandomGraph) -> bool {
    let mut g = rg.build();
    let copy = g.copy();
    let before: Vec<_> = copy.edges().collect();

    if g.num_vertices() > 0 {
        let _ = g.add_edge(0, g.num_vertices() - 1);
        let _ = g.remove_edge(0, 0);
    }

    let after: Vec<_> = copy.edges().collect();
    before == after
}

#[quickcheck]
fn num_edges_matches_sum_of_out_degrees(rg: RandomGraph) -> bool {
    let g = rg.build();
    let sum: usize = (0..g.num_vertices())
        .map(|v| g.out_degree(v).unwrap())
        .sum();
    sum == g.num_edges() && g.integrity_check().is_ok()
}

#[quickcheck]
fn recommend_algorithm_is_a_total_deterministic_function(rg: RandomGraph) -> bool {
    let g = rg.build();
    recommend_algorithm(&g) == recommend_algorithm(&g)
}

#[quickcheck]
fn condensation_of_the_condensation_is_all_singletons(rg: RandomGraph) -> bool {
    let g = rg.build();
    let result = match find(&g) {
        Ok(r) => r,
        Err(_) => return true,
    };
    let condensation = build_condensation(&g, &result).unwrap();
    let condensation_result = match find(&condensation) {
        Ok(r) => r,
        Err(_) => return false,
    };
    condensation_result.component_count() == condensation.num_vertices()
}
