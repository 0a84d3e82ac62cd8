//! Persisted graph formats (§6): edge list and adjacency list readers/
//! writers, plus a write-only DOT emitter. Free functions over `&Graph`
//! and `std::io::{Read, Write}`, so the hard-core algorithms never
//! depend on any I/O type — this module only ever calls [`Graph`]'s
//! public constructors and accessors.

use std::io::{self, BufRead, Write};

use crate::error::{record, GraphError, GraphResult};
use crate::graph::Graph;

fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parses an edge list: one edge per line, two whitespace-separated
/// non-negative integers `src dst`. Lines whose first non-whitespace
/// character is `#` are comments; blank lines are ignored. The largest
/// vertex id seen across every line defines `num_vertices`, so a trailing
/// vertex with no edges at all (and never a destination) cannot be
/// represented by this format (§6).
pub fn read_edge_list<R: BufRead>(reader: R) -> GraphResult<Graph> {
    let mut edges = Vec::new();
    let mut max_vertex = None;

    for line in reader.lines() {
        let line = line.map_err(|_| record(GraphError::InvalidParameter("I/O error reading edge list")))?;
        if is_comment_or_blank(&line) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let src = parse_vertex_id(fields.next())?;
        let dst = parse_vertex_id(fields.next())?;

        max_vertex = Some(max_vertex.map_or(src.max(dst), |m: usize| m.max(src).max(dst)));
        edges.push((src, dst));
    }

    let num_vertices = max_vertex.map_or(0, |m| m + 1);
    let mut graph = Graph::with_vertices(num_vertices);
    for (src, dst) in edges {
        match graph.add_edge(src, dst) {
            Ok(()) | Err(GraphError::EdgeExists(_, _)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(graph)
}

/// Parses an adjacency list: one source per line, the first integer is
/// the source vertex and the remaining whitespace-separated integers are
/// its destinations. A source with no out-edges may be omitted, which
/// also omits that vertex id unless it appears as someone else's
/// destination (§6) — this format is therefore lossy for isolated
/// trailing vertices; use the edge list format if that matters.
pub fn read_adjacency_list<R: BufRead>(reader: R) -> GraphResult<Graph> {
    let mut adjacency: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut max_vertex = None;

    for line in reader.lines() {
        let line = line.map_err(|_| {
            record(GraphError::InvalidParameter(
                "I/O error reading adjacency list",
            ))
        })?;
        if is_comment_or_blank(&line) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let src = parse_vertex_id(fields.next())?;
        let mut dsts = Vec::new();
        for field in fields {
            let dst = parse_vertex_id(Some(field))?;
            max_vertex = Some(max_vertex.map_or(dst, |m: usize| m.max(dst)));
            dsts.push(dst);
        }
        max_vertex = Some(max_vertex.map_or(src, |m: usize| m.max(src)));
        adjacency.push((src, dsts));
    }

    let num_vertices = max_vertex.map_or(0, |m| m + 1);
    let mut graph = Graph::with_vertices(num_vertices);
    for (src, dsts) in adjacency {
        for dst in dsts {
            match graph.add_edge(src, dst) {
                Ok(()) | Err(GraphError::EdgeExists(_, _)) => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(graph)
}

fn parse_vertex_id(field: Option<&str>) -> GraphResult<usize> {
    field
        .and_then(|f| f.parse::<usize>().ok())
        .ok_or_else(|| record(GraphError::InvalidParameter("expected a non-negative integer")))
}

/// Writes `graph` as an edge list, one `src dst` pair per line, in the
/// graph's own edge-iteration order.
pub fn write_edge_list<U, W: Write>(graph: &Graph<U>, mut writer: W) -> io::Result<()> {
    for (src, dst) in graph.edges() {
        writeln!(writer, "{src} {dst}")?;
    }
    Ok(())
}

/// Writes `graph` as an adjacency list, one line per vertex that has at
/// least one out-edge (per §6, vertices with no out-edges are omitted).
pub fn write_adjacency_list<U, W: Write>(graph: &Graph<U>, mut writer: W) -> io::Result<()> {
    for v in 0..graph.num_vertices() {
        let out_edges = graph.out_edges(v).expect("v is in range by construction");
        if out_edges.is_empty() {
            continue;
        }
        write!(writer, "{v}")?;
        for &dst in out_edges {
            write!(writer, " {dst}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes `graph` as a `digraph G { ... }` DOT block: one `id
/// [label="id"];` statement per vertex, then one `src -> dst;` statement
/// per edge. Write-only, per §6.
pub fn write_dot<U, W: Write>(graph: &Graph<U>, mut writer: W) -> io::Result<()> {
    writeln!(writer, "digraph G {{")?;
    for v in 0..graph.num_vertices() {
        writeln!(writer, "    {v} [label=\"{v}\"];")?;
    }
    for (src, dst) in graph.edges() {
        writeln!(writer, "    {src} -> {dst};")?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}
