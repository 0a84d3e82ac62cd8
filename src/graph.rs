//! The mutable directed-graph store (§3/§4.1 of the design spec).
//!
//! Vertices are dense integer ids assigned in insertion order and never
//! reused. Each vertex owns an ordered `Vec` of destination ids for its
//! out-edges (the source's singly linked edge list, generalized per §9:
//! a contiguous `Vec` preserves insertion order, keeps duplicate
//! detection linear in out-degree, and makes iteration deterministic and
//! restartable without giving up anything the original structure
//! promised).

use crate::arena::BlockArena;
use crate::error::{record, GraphError, GraphResult};

/// Default capacity used when `Graph::with_capacity(0)` is requested.
const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
struct Vertex<U> {
    id: usize,
    out_edges: Vec<usize>,
    user_data: Option<U>,
}

impl<U> Vertex<U> {
    fn new(id: usize) -> Self {
        Vertex {
            id,
            out_edges: Vec::new(),
            user_data: None,
        }
    }
}

/// A mutable, adjacency-list directed graph over dense integer vertex
/// ids.
///
/// `U` is an opaque per-vertex payload (the spec's "user pointer"); the
/// algorithms in this crate never read it. Defaults to `()` for graphs
/// that carry no side channel.
#[derive(Debug, Clone)]
pub struct Graph<U = ()> {
    vertices: Vec<Vertex<U>>,
    num_edges: usize,
    arena: Option<BlockArena<()>>,
}

impl<U> Default for Graph<U> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<U> Graph<U> {
    /// Creates an empty graph able to hold `capacity` vertices without
    /// reallocating. `capacity == 0` is rounded up to an implementation
    /// default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Graph {
            vertices: Vec::with_capacity(capacity),
            num_edges: 0,
            arena: None,
        }
    }

    /// Creates a graph with `len` vertices and no edges, for callers who
    /// already know their final vertex count up front.
    pub fn with_vertices(len: usize) -> Self {
        let mut graph = Self::with_capacity(len);
        for _ in 0..len {
            graph.add_vertex();
        }
        graph
    }

    /// Creates an empty graph whose vertex slots are additionally tracked
    /// through a [`BlockArena`], growing the arena in batches of
    /// `block_size`.
    ///
    /// Vertex storage itself stays a dense `Vec` (required so that
    /// `vertices[i].id == i` holds and lookups stay O(1)); the arena is
    /// the "optional back-reference" of §3, used here purely to track
    /// vertex-slot usage through [`Graph::arena_used`] /
    /// [`Graph::arena_total`]. Vertices are never individually freed
    /// back to the arena: ids are never reused, so every vertex slot
    /// lives exactly as long as the graph does.
    pub fn with_arena(capacity: usize, block_size: usize) -> Self {
        let mut graph = Self::with_capacity(capacity);
        graph.arena = Some(BlockArena::with_block_size(block_size));
        graph
    }

    /// Number of live vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges currently in the graph.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Current vertex-table capacity without reallocating.
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Number of vertex slots currently tracked by this graph's arena
    /// back-reference, or `0` if it was not built `with_arena`.
    pub fn arena_used(&self) -> usize {
        self.arena.as_ref().map_or(0, BlockArena::used_size)
    }

    /// Number of vertex slots ever tracked by this graph's arena
    /// back-reference, or `0` if it was not built `with_arena`.
    pub fn arena_total(&self) -> usize {
        self.arena.as_ref().map_or(0, BlockArena::total_size)
    }

    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v < self.vertices.len() {
            Ok(())
        } else {
            Err(record(GraphError::InvalidVertex(v)))
        }
    }

    /// Adds a new vertex with no user data and returns its id.
    ///
    /// The new id equals the previous vertex count; ids are never
    /// reused.
    pub fn add_vertex(&mut self) -> usize {
        self.add_vertex_with_data(None)
    }

    /// Adds a new vertex carrying `data` as its opaque user payload.
    pub fn add_vertex_with(&mut self, data: U) -> usize {
        self.add_vertex_with_data(Some(data))
    }

    fn add_vertex_with_data(&mut self, data: Option<U>) -> usize {
        let id = self.vertices.len();
        let mut vertex = Vertex::new(id);
        vertex.user_data = data;
        self.vertices.push(vertex);
        if let Some(arena) = &mut self.arena {
            arena.alloc(());
        }
        id
    }

    /// Returns the opaque user payload attached to vertex `v`, if any.
    pub fn vertex_data(&self, v: usize) -> GraphResult<Option<&U>> {
        self.check_vertex(v)?;
        Ok(self.vertices[v].user_data.as_ref())
    }

    /// Adds the directed edge `src -> dst`.
    ///
    /// Returns [`GraphError::EdgeExists`] without modifying the graph if
    /// the edge is already present. Self-loops (`src == dst`) are
    /// permitted.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        if self.vertices[src].out_edges.contains(&dst) {
            return Err(record(GraphError::EdgeExists(src, dst)));
        }

        self.vertices[src].out_edges.push(dst);
        self.num_edges += 1;
        Ok(())
    }

    /// Removes the directed edge `src -> dst`.
    ///
    /// Returns [`GraphError::EdgeNotFound`] without modifying the graph
    /// if no such edge exists.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let edges = &mut self.vertices[src].out_edges;
        match edges.iter().position(|&d| d == dst) {
            Some(pos) => {
                edges.remove(pos);
                self.num_edges -= 1;
                Ok(())
            }
            None => Err(record(GraphError::EdgeNotFound(src, dst))),
        }
    }

    /// Returns whether the directed edge `src -> dst` exists.
    ///
    /// Out-of-range indices yield `false` rather than an error: this is
    /// a query about an invariant ("has this edge?"), not an assertion
    /// that the graph is well-formed.
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.vertices
            .get(src)
            .is_some_and(|v| v.out_edges.contains(&dst))
    }

    /// Out-degree of vertex `v`.
    pub fn out_degree(&self, v: usize) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.vertices[v].out_edges.len())
    }

    /// Destination ids of `v`'s out-edges, in insertion order.
    pub fn out_edges(&self, v: usize) -> GraphResult<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.vertices[v].out_edges)
    }

    /// Returns a lazy, restartable iterator over every `(src, dst)` edge
    /// in the graph, in vertex-major, then insertion, order.
    pub fn edges(&self) -> EdgeIter<'_, U> {
        EdgeIter {
            graph: self,
            vertex: 0,
            edge_index: 0,
        }
    }

    /// Checks invariants (1)-(5) of §3: every edge endpoint is in range,
    /// `out_degree` matches the stored edge list length, `num_edges`
    /// matches the sum of out-degrees, vertex ids match their slot
    /// index, and no duplicate edge exists.
    ///
    /// O(V+E); intended for tests, not hot-path use.
    pub fn integrity_check(&self) -> GraphResult<()> {
        let mut total_edges = 0usize;

        for (i, vertex) in self.vertices.iter().enumerate() {
            if vertex.id != i {
                return Err(record(GraphError::InvalidParameter(
                    "vertex id does not match its slot index",
                )));
            }

            for &dst in &vertex.out_edges {
                if dst >= self.vertices.len() {
                    return Err(record(GraphError::InvalidVertex(dst)));
                }
            }

            let mut seen = std::collections::HashSet::with_capacity(vertex.out_edges.len());
            for &dst in &vertex.out_edges {
                if !seen.insert(dst) {
                    return Err(record(GraphError::EdgeExists(i, dst)));
                }
            }

            total_edges += vertex.out_edges.len();
        }

        if total_edges != self.num_edges {
            return Err(record(GraphError::InvalidParameter(
                "num_edges does not match the sum of out-degrees",
            )));
        }

        Ok(())
    }
}

impl<U: Clone> Graph<U> {
    /// Builds the transpose graph: same vertex count, every edge
    /// reversed. Insertion order within the result's adjacency lists is
    /// implementation-defined.
    pub fn transpose(&self) -> Graph<U> {
        let mut result = Graph::with_capacity(self.vertices.len().max(1));
        for vertex in &self.vertices {
            result.add_vertex_with_data(vertex.user_data.clone());
        }
        for (src, vertex) in self.vertices.iter().enumerate() {
            for &dst in &vertex.out_edges {
                // Edge existence was already validated in `self`; a
                // reversed edge set over a graph without duplicates
                // cannot itself contain duplicates.
                result.vertices[dst].out_edges.push(src);
                result.num_edges += 1;
            }
        }
        result
    }

    /// Builds a structurally identical copy. The two graphs share no
    /// mutable state; per-vertex user payloads are shallow-copied via
    /// `Clone`.
    pub fn copy(&self) -> Graph<U> {
        self.clone()
    }
}

/// Lazy, restartable iterator over every `(src, dst)` edge pair in a
/// [`Graph`], in vertex-major, then insertion, order.
///
/// Borrows the graph; any attempt to mutate the graph while an iterator
/// is alive is rejected at compile time by the borrow checker.
pub struct EdgeIter<'g, U> {
    graph: &'g Graph<U>,
    vertex: usize,
    edge_index: usize,
}

impl<'g, U> Iterator for EdgeIter<'g, U> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.vertex < self.graph.vertices.len() {
            let out_edges = &self.graph.vertices[self.vertex].out_edges;
            if self.edge_index < out_edges.len() {
                let dst = out_edges[self.edge_index];
                let item = (self.vertex, dst);
                self.edge_index += 1;
                return Some(item);
            }
            self.vertex += 1;
            self.edge_index = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_triangle() -> Graph {
        let mut g = Graph::with_capacity(3);
        g.add_vertex();
        g.add_vertex();
        g.add_vertex();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        g
    }

    #[test]
    fn add_vertex_assigns_sequential_ids() {
        let mut g: Graph = Graph::with_capacity(0);
        assert_eq!(g.add_vertex(), 0);
        assert_eq!(g.add_vertex(), 1);
        assert_eq!(g.add_vertex(), 2);
        assert_eq!(g.num_vertices(), 3);
    }

    #[test]
    fn zero_capacity_uses_a_default() {
        let g: Graph = Graph::with_capacity(0);
        assert!(g.capacity() >= 1);
    }

    #[test]
    fn add_edge_is_idempotent_and_reports_duplicates() {
        let mut g = build_triangle();
        assert_eq!(g.num_edges(), 3);
        assert_eq!(
            g.add_edge(0, 1),
            Err(GraphError::EdgeExists(0, 1))
        );
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn self_loops_are_allowed() {
        let mut g: Graph = Graph::with_capacity(1);
        g.add_vertex();
        g.add_edge(0, 0).unwrap();
        assert!(g.has_edge(0, 0));
        assert_eq!(g.out_degree(0).unwrap(), 1);
    }

    #[test]
    fn remove_edge_reports_missing_edges() {
        let mut g = build_triangle();
        assert_eq!(
            g.remove_edge(0, 2),
            Err(GraphError::EdgeNotFound(0, 2))
        );
        assert_eq!(g.num_edges(), 3);

        g.remove_edge(0, 1).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn has_edge_on_invalid_vertex_is_false_not_an_error() {
        let g = build_triangle();
        assert!(!g.has_edge(99, 0));
        assert!(!g.has_edge(0, 99));
    }

    #[test]
    fn out_of_range_vertex_is_invalid_vertex() {
        let g = build_triangle();
        assert_eq!(g.out_degree(99), Err(GraphError::InvalidVertex(99)));
    }

    #[test]
    fn edges_iterator_visits_every_edge_once_in_layout_order() {
        let g = build_triangle();
        let collected: Vec<_> = g.edges().collect();
        assert_eq!(collected, vec![(0, 1), (1, 2), (2, 0)]);
        // restartable
        let collected_again: Vec<_> = g.edges().collect();
        assert_eq!(collected, collected_again);
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let g = build_triangle();
        let t = g.transpose();
        assert_eq!(t.num_vertices(), 3);
        assert_eq!(t.num_edges(), 3);
        assert!(t.has_edge(1, 0));
        assert!(t.has_edge(2, 1));
        assert!(t.has_edge(0, 2));
    }

    #[test]
    fn transpose_is_an_involution_on_the_edge_set() {
        let g = build_triangle();
        let back = g.transpose().transpose();
        let mut original: Vec<_> = g.edges().collect();
        let mut round_tripped: Vec<_> = back.edges().collect();
        original.sort_unstable();
        round_tripped.sort_unstable();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn copy_is_independent_of_the_original() {
        let mut g = build_triangle();
        let copy = g.copy();
        g.add_edge(1, 0).unwrap();
        assert!(g.has_edge(1, 0));
        assert!(!copy.has_edge(1, 0));
    }

    #[test]
    fn integrity_check_passes_on_a_well_formed_graph() {
        let g = build_triangle();
        assert_eq!(g.integrity_check(), Ok(()));
    }

    #[test]
    fn arena_backed_graph_tracks_vertex_slot_usage() {
        let mut g: Graph = Graph::with_arena(0, 4);
        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.arena_used(), 2);
        assert_eq!(g.arena_total(), 2);
    }

    #[test]
    fn user_data_is_an_opaque_side_channel() {
        let mut g: Graph<&str> = Graph::with_capacity(0);
        let v = g.add_vertex_with("payload");
        assert_eq!(g.vertex_data(v).unwrap(), Some(&"payload"));
    }
}
