//! Optional integration with the `id-arena` crate (feature `id-arena`).
//!
//! Lets a host that already manages its own nodes in an
//! `id_arena::Arena<T, A>` get an SCC partition back in terms of its own
//! typed ids, without adopting [`crate::arena::BlockArena`] or changing
//! how it stores its nodes. Adapted from the teacher crate's own
//! `ArenaGraph`/`ArenaGraphBuilder` pair, generalized from a single
//! topological-sort-or-cycles result to the full SCC partition.

use std::marker::PhantomData;

use id_arena::Arena;
use id_arena::ArenaBehavior;

use crate::dispatcher;
use crate::error::GraphResult;
use crate::graph::Graph;

/// A proxy graph built from an `id_arena::Arena<T, A>`'s nodes, whose SCC
/// partition can be read back out in terms of the arena's own `A::Id`.
#[derive(Debug)]
pub struct ArenaGraph<'a, T, A: ArenaBehavior> {
    graph: Graph,
    arena_id: u32,
    phantom: PhantomData<&'a Arena<T, A>>,
}

/// Passed to the closure in [`ArenaGraph::from_arena`] so it can record
/// out-edges for the node currently being visited.
#[derive(Debug)]
pub struct ArenaGraphBuilder<'g, 'a, T, A: ArenaBehavior> {
    graph: &'g mut Graph,
    index: usize,
    phantom: PhantomData<&'a Arena<T, A>>,
}

impl<'a, T, A: ArenaBehavior> ArenaGraphBuilder<'_, 'a, T, A> {
    /// Records an edge from the node under construction to `index`.
    ///
    /// Does not check for duplicate edges at the host-arena-id level:
    /// `Graph::add_edge`'s own duplicate check still applies.
    pub fn add_out_edge(&mut self, index: A::Id) {
        let _ = self.graph.add_edge(self.index, A::index(index));
    }

    /// Records an edge from `index` to the node under construction.
    pub fn add_in_edge(&mut self, index: A::Id) {
        let _ = self.graph.add_edge(A::index(index), self.index);
    }
}

impl<'a, T, A: ArenaBehavior> ArenaGraph<'a, T, A> {
    /// Builds a proxy graph with one vertex per element of `g`, calling
    /// `f` once per element so it can add out-/in-edges through the
    /// provided builder.
    pub fn from_arena<F>(g: &'a Arena<T, A>, mut f: F) -> ArenaGraph<'a, T, A>
    where
        F: FnMut(ArenaGraphBuilder<'_, 'a, T, A>, &T),
    {
        let mut arena_graph = ArenaGraph {
            graph: Graph::with_vertices(g.len()),
            arena_id: 0,
            phantom: PhantomData,
        };

        for (idx, (id, element)) in g.iter().enumerate() {
            arena_graph.arena_id = A::arena_id(id);

            let builder = ArenaGraphBuilder {
                graph: &mut arena_graph.graph,
                index: idx,
                phantom: PhantomData,
            };

            f(builder, element);
        }

        arena_graph
    }

    /// Computes the SCC partition of the proxy graph and translates it
    /// back into the host arena's own id type.
    pub fn find(&self) -> GraphResult<Vec<Vec<A::Id>>> {
        let arena_id = self.arena_id;
        let result = dispatcher::find(&self.graph)?;
        Ok(result
            .components()
            .iter()
            .map(|component| {
                component
                    .iter()
                    .map(|&idx| A::new_id(arena_id, idx))
                    .collect()
            })
            .collect())
    }

    /// Returns whether the proxy graph is strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        dispatcher::is_strongly_connected(&self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use id_arena::Arena;

    #[test]
    fn translates_components_back_into_arena_ids() {
        let mut arena: Arena<&str> = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");
        let d = arena.alloc("d");

        // a -> b -> c -> a is one SCC; d is isolated.
        let edges = [(a, b), (b, c), (c, a)];

        let arena_graph = ArenaGraph::from_arena(&arena, |mut builder, element| {
            for &(from, to) in &edges {
                if arena[from] == *element {
                    builder.add_out_edge(to);
                }
            }
        });

        let components = arena_graph.find().unwrap();
        assert_eq!(components.len(), 2);

        let cycle = components.iter().find(|c| c.len() == 3).unwrap();
        let mut cycle_members: Vec<&str> = cycle.iter().map(|&id| arena[id]).collect();
        cycle_members.sort_unstable();
        assert_eq!(cycle_members, vec!["a", "b", "c"]);

        let singleton = components.iter().find(|c| c.len() == 1).unwrap();
        assert_eq!(arena[singleton[0]], "d");
    }
}
