// Copyright 2020 Ferdinand Bachmann
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Strongly connected components of a finite directed graph.
//!
//! Given a graph G=(V,E), this crate partitions V into maximal subsets
//! such that every vertex within a subset reaches every other, and builds
//! the acyclic *condensation* graph whose nodes are those subsets. It
//! provides:
//!
//! - [`graph::Graph`], a mutable adjacency-list directed graph with
//!   add/remove edge, transpose, copy, and an O(V+E) integrity check.
//! - two independent, complete SCC engines: [`tarjan::tarjan_scc`]
//!   (single DFS, index/lowlink) and [`kosaraju::kosaraju_scc`] (two DFS
//!   passes over G and Gᵀ). Both are realized iteratively with an
//!   explicit frame stack, so neither overflows the call stack on long
//!   chain graphs.
//! - [`dispatcher::find`], which picks whichever engine
//!   [`dispatcher::recommend_algorithm`] recommends for a given graph's
//!   size and density, [`dispatcher::is_strongly_connected`], and
//!   [`dispatcher::build_condensation`].
//! - [`result::SccResult`], the read-only component list plus
//!   vertex→component map returned by every engine.
//!
//! The `id-arena` feature adds [`arena_graph::ArenaGraph`], a proxy graph
//! that computes an SCC partition over an existing `id_arena::Arena<T,
//! A>`'s nodes and returns it in terms of the arena's own id type.
//!
//! Errors are a closed [`error::GraphError`] enum; every fallible public
//! operation also records its error in a per-thread slot readable via
//! [`error::last_error`], mirroring the set-and-inspect-later convention
//! common to C graph libraries.

pub mod arena;
pub mod benchmark;
pub mod dispatcher;
pub mod error;
pub mod graph;
pub mod io;
pub mod kosaraju;
pub mod result;
pub mod tarjan;

#[cfg(feature = "id-arena")]
pub mod arena_graph;

/// Commonly used types for easy importing: `use scc_core::prelude::*;`.
pub mod prelude {
    pub use crate::dispatcher::{build_condensation, find, is_strongly_connected, recommend_algorithm, Algorithm};
    pub use crate::error::{GraphError, GraphResult};
    pub use crate::graph::Graph;
    pub use crate::result::SccResult;

    #[cfg(feature = "id-arena")]
    pub use crate::arena_graph::ArenaGraph;
}
