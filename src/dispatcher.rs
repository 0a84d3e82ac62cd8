//! Algorithm selection, top-level `find`, strong-connectivity queries,
//! and condensation-graph construction (§4.5).

use log::debug;

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::kosaraju::kosaraju_scc;
use crate::result::SccResult;
use crate::tarjan::tarjan_scc;

/// Density above which [`recommend_algorithm`] prefers Kosaraju over
/// Tarjan for graphs at or above [`DENSITY_CUTOFF_VERTEX_THRESHOLD`]
/// vertices. Preserved verbatim from the source heuristic; the exact
/// calibration point is undocumented upstream, so treat this as tunable
/// rather than load-bearing (§9 Open Questions).
pub const DENSITY_CUTOFF: f64 = 0.1;

/// Vertex count below which [`recommend_algorithm`] always selects
/// Tarjan, regardless of density.
pub const DENSITY_CUTOFF_VERTEX_THRESHOLD: usize = 1000;

/// Which SCC engine a given graph should be run through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Tarjan,
    Kosaraju,
}

/// Chooses Tarjan or Kosaraju for `graph` using a deterministic,
/// size-and-density heuristic:
///
/// - `num_vertices == 0` or `< 1000` → Tarjan.
/// - Otherwise, `density = num_edges / num_vertices²`; `density > 0.1` →
///   Kosaraju, else Tarjan.
///
/// Depends only on `(num_vertices, num_edges)`, so it is a total,
/// deterministic function of the graph's shape (§8.9).
pub fn recommend_algorithm<U>(graph: &Graph<U>) -> Algorithm {
    let n = graph.num_vertices();
    if n == 0 || n < DENSITY_CUTOFF_VERTEX_THRESHOLD {
        return Algorithm::Tarjan;
    }

    let density = graph.num_edges() as f64 / (n as f64 * n as f64);
    if density > DENSITY_CUTOFF {
        Algorithm::Kosaraju
    } else {
        Algorithm::Tarjan
    }
}

/// Computes the strongly connected components of `graph`, delegating to
/// whichever engine [`recommend_algorithm`] selects.
pub fn find<U>(graph: &Graph<U>) -> GraphResult<SccResult> {
    match recommend_algorithm(graph) {
        Algorithm::Tarjan => {
            debug!(
                "find: dispatching to Tarjan (n={}, m={})",
                graph.num_vertices(),
                graph.num_edges()
            );
            tarjan_scc(graph)
        }
        Algorithm::Kosaraju => {
            debug!(
                "find: dispatching to Kosaraju (n={}, m={})",
                graph.num_vertices(),
                graph.num_edges()
            );
            kosaraju_scc(graph)
        }
    }
}

/// Returns whether `graph` is strongly connected: every vertex reaches
/// every other. `false` for an empty graph.
pub fn is_strongly_connected<U>(graph: &Graph<U>) -> bool {
    if graph.num_vertices() == 0 {
        return false;
    }
    match find(graph) {
        Ok(result) => result.component_count() == 1,
        Err(_) => false,
    }
}

/// Builds the condensation of `graph` given its SCC partition `result`:
/// one vertex per component, and for every original edge `(u, v)` whose
/// endpoints fall in distinct components, at most one edge between those
/// two components in the result, even if many original edges cross the
/// same component pair. The condensation is guaranteed acyclic.
pub fn build_condensation<U>(graph: &Graph<U>, result: &SccResult) -> GraphResult<Graph> {
    let k = result.component_count();
    let mut condensation = Graph::with_capacity(k.max(1));
    for _ in 0..k {
        condensation.add_vertex();
    }

    for (src, dst) in graph.edges() {
        let a = result.vertex_component(src)?;
        let b = result.vertex_component(dst)?;
        if a != b && !condensation.has_edge(a, b) {
            condensation.add_edge(a, b)?;
        }
    }

    debug!(
        "build_condensation: {} components, {} cross-component edges",
        k,
        condensation.num_edges()
    );

    Ok(condensation)
}
