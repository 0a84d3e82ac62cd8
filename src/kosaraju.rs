//! Kosaraju's strongly connected components algorithm (§4.4): two DFS
//! passes, the first computing a finish order on `G`, the second
//! exploring `Gᵀ` in reverse finish order.
//!
//! Both passes are realized iteratively with an explicit, heap-allocated
//! stack (§9), matching the stack-overflow-avoidance requirement placed
//! on Tarjan's engine in §4.3. The transpose is built as a lightweight
//! adjacency list private to this module rather than a full
//! [`crate::graph::Graph`], so this engine places no `Clone` bound on the
//! host graph's opaque vertex payload and owns the transpose only for the
//! duration of the run (§4.4 "Memory note").

use crate::error::{record, GraphError, GraphResult};
use crate::graph::Graph;
use crate::result::SccResult;

fn transpose_adjacency<U>(graph: &Graph<U>) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); graph.num_vertices()];
    for (src, dst) in graph.edges() {
        adjacency[dst].push(src);
    }
    adjacency
}

/// Computes the strongly connected components of `graph` using
/// Kosaraju's algorithm.
///
/// Components are emitted in an order that is also reverse topological
/// in the condensation, though it need not agree with Tarjan's emission
/// order component-for-component (§4.4); vertices within a component are
/// in pass-two discovery order. Returns [`GraphError::GraphEmpty`] for a
/// graph with no vertices.
pub fn kosaraju_scc<U>(graph: &Graph<U>) -> GraphResult<SccResult> {
    let n = graph.num_vertices();
    if n == 0 {
        return Err(record(GraphError::GraphEmpty));
    }

    // Pass 1: post-order DFS on G, recording the finish order.
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        frames.push((root, 0));

        while let Some(&(v, cursor)) = frames.last() {
            let out_edges = graph.out_edges(v).expect("v came from this graph");

            if cursor < out_edges.len() {
                let w = out_edges[cursor];
                let top = frames.len() - 1;
                frames[top].1 = cursor + 1;

                if !visited[w] {
                    visited[w] = true;
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
                finish_order.push(v);
            }
        }
    }

    // Construct G^T.
    let transpose = transpose_adjacency(graph);

    // Pass 2: DFS on G^T in reverse finish order; each tree is one SCC.
    let mut visited = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut work_stack: Vec<usize> = Vec::new();

    for &root in finish_order.iter().rev() {
        if visited[root] {
            continue;
        }

        let mut component = Vec::new();
        visited[root] = true;
        component.push(root);
        work_stack.push(root);

        while let Some(v) = work_stack.pop() {
            for &w in &transpose[v] {
                if !visited[w] {
                    visited[w] = true;
                    component.push(w);
                    work_stack.push(w);
                }
            }
        }

        components.push(component);
    }

    Ok(SccResult::from_components(components))
}
