//! Test-runner CLI surface (§6): accepts module selectors as positional
//! arguments and exits 0 iff every selected module's checks pass.
//!
//! This binary is a collaborator, not part of the hard core: it only
//! ever calls public entry points in [`scc_core`], never reaches into
//! their internals. It exists alongside (not instead of) the library's
//! own `#[cfg(test)]` unit tests and the `tests/` integration suite; it
//! re-runs a representative smoke check per module so the library can be
//! exercised without a `cargo test` harness present.

use clap::{Parser, ValueEnum};
use log::info;

use scc_core::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Module {
    Graph,
    Scc,
    Tarjan,
    Kosaraju,
    Memory,
    Utils,
    Io,
    Integration,
    Performance,
    All,
}

/// Strongly connected components test driver.
#[derive(Debug, Parser)]
#[command(name = "scc-test-runner")]
struct Cli {
    /// Modules to check. `all` runs every module.
    #[arg(value_enum, required = true, num_args = 1..)]
    modules: Vec<Module>,
}

type CheckResult = Result<(), String>;

fn check_graph() -> CheckResult {
    let mut g: Graph = Graph::with_vertices(3);
    g.add_edge(0, 1).map_err(|e| e.to_string())?;
    g.add_edge(1, 2).map_err(|e| e.to_string())?;

    if g.num_edges() != 2 {
        return Err("expected 2 edges after two add_edge calls".into());
    }
    if g.add_edge(0, 1).is_ok() {
        return Err("duplicate add_edge should fail".into());
    }
    g.integrity_check().map_err(|e| e.to_string())?;
    Ok(())
}

fn check_tarjan() -> CheckResult {
    let mut g: Graph = Graph::with_vertices(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();

    let result = scc_core::tarjan::tarjan_scc(&g).map_err(|e| e.to_string())?;
    if result.component_count() != 1 {
        return Err("3-cycle should be one component".into());
    }
    Ok(())
}

fn check_kosaraju() -> CheckResult {
    let mut g: Graph = Graph::with_vertices(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();

    let result = scc_core::kosaraju::kosaraju_scc(&g).map_err(|e| e.to_string())?;
    if result.component_count() != 1 {
        return Err("3-cycle should be one component".into());
    }
    Ok(())
}

fn check_scc() -> CheckResult {
    let mut g: Graph = Graph::with_vertices(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();

    let result = find(&g).map_err(|e| e.to_string())?;
    if result.component_count() != 2 {
        return Err("expected {0,1,2} and {3}".into());
    }
    if is_strongly_connected(&g) {
        return Err("graph with an isolated vertex is not strongly connected".into());
    }
    Ok(())
}

fn check_memory() -> CheckResult {
    use scc_core::arena::BlockArena;

    let mut arena: BlockArena<i32> = BlockArena::with_block_size(4);
    let a = arena.alloc(1);
    let b = arena.alloc(2);
    arena.free(a);
    if arena.get(a).is_some() {
        return Err("freed handle should be invalid".into());
    }
    if arena.get(b) != Some(&2) {
        return Err("live handle should still resolve".into());
    }
    Ok(())
}

fn check_utils() -> CheckResult {
    if recommend_algorithm(&Graph::<()>::with_capacity(0)) != Algorithm::Tarjan {
        return Err("empty graph should recommend Tarjan".into());
    }
    Ok(())
}

fn check_io() -> CheckResult {
    use std::io::Cursor;
    let graph = scc_core::io::read_edge_list(Cursor::new("0 1\n1 2\n2 0\n"))
        .map_err(|e| e.to_string())?;
    if graph.num_vertices() != 3 || graph.num_edges() != 3 {
        return Err("edge list parse mismatch".into());
    }
    let mut out = Vec::new();
    scc_core::io::write_dot(&graph, &mut out).map_err(|e| e.to_string())?;
    if !String::from_utf8_lossy(&out).starts_with("digraph G {") {
        return Err("DOT output should start with digraph G {".into());
    }
    Ok(())
}

fn check_integration() -> CheckResult {
    let mut g: Graph = Graph::with_vertices(6);
    for (src, dst) in [(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (1, 2), (4, 5)] {
        g.add_edge(src, dst).unwrap();
    }
    let result = find(&g).map_err(|e| e.to_string())?;
    if result.component_count() != 3 {
        return Err("expected 3 components".into());
    }
    let condensation = build_condensation(&g, &result).map_err(|e| e.to_string())?;
    if condensation.num_edges() != 2 {
        return Err("condensation should have exactly 2 cross-component edges".into());
    }
    Ok(())
}

fn check_performance() -> CheckResult {
    let n = 5000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let mut g: Graph = Graph::with_vertices(n);
    for (src, dst) in edges {
        g.add_edge(src, dst).unwrap();
    }
    let bench = scc_core::benchmark::run(&g).map_err(|e| e.to_string())?;
    if !bench.results_match {
        return Err("Tarjan and Kosaraju disagreed on a chain graph".into());
    }
    Ok(())
}

fn run_module(module: Module) -> Vec<(&'static str, CheckResult)> {
    match module {
        Module::Graph => vec![("graph", check_graph())],
        Module::Scc => vec![("scc", check_scc())],
        Module::Tarjan => vec![("tarjan", check_tarjan())],
        Module::Kosaraju => vec![("kosaraju", check_kosaraju())],
        Module::Memory => vec![("memory", check_memory())],
        Module::Utils => vec![("utils", check_utils())],
        Module::Io => vec![("io", check_io())],
        Module::Integration => vec![("integration", check_integration())],
        Module::Performance => vec![("performance", check_performance())],
        Module::All => {
            let mut all = Vec::new();
            for module in [
                Module::Graph,
                Module::Scc,
                Module::Tarjan,
                Module::Kosaraju,
                Module::Memory,
                Module::Utils,
                Module::Io,
                Module::Integration,
                Module::Performance,
            ] {
                all.extend(run_module(module));
            }
            all
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut failed = false;
    for module in &cli.modules {
        for (name, outcome) in run_module(*module) {
            match outcome {
                Ok(()) => {
                    info!("[PASS] {name}");
                    println!("[PASS] {name}");
                }
                Err(reason) => {
                    failed = true;
                    eprintln!("[FAIL] {name}: {reason}");
                }
            }
        }
    }

    std::process::exit(if failed { 1 } else { 0 });
}
