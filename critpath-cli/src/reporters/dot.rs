//! Graphviz export for the input graph and its condensation

use anyhow::{Context, Result};
use critpath_fast::{Graph, SccResult};
use std::fmt::Write;
use std::path::{Path, PathBuf};

fn write_edges(out: &mut String, graph: &Graph) {
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "    {} -> {} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        );
    }
}

/// `digraph G`, one node per vertex, edges labelled with their weight
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::from("digraph G {\n    rankdir=LR;\n");
    for v in graph.vertices() {
        let _ = writeln!(out, "    {v} [label=\"{v}\"];");
    }
    write_edges(&mut out, graph);
    out.push_str("}\n");
    out
}

/// `digraph CondensationGraph`, one box per component listing its members
pub fn render_condensation(condensation: &Graph, scc: &SccResult) -> String {
    let mut out = String::from("digraph CondensationGraph {\n    rankdir=LR;\n");
    for (id, members) in scc.components().iter().enumerate() {
        let names: Vec<String> = members.iter().map(usize::to_string).collect();
        let _ = writeln!(
            out,
            "    {id} [shape=box, label=\"SCC {id}\\n{{{}}}\"];",
            names.join(",")
        );
    }
    write_edges(&mut out, condensation);
    out.push_str("}\n");
    out
}

/// Write `<base>_original.dot` and `condensed_<base>.dot` into `dir`.
pub fn export(dir: &Path, base: &str, graph: &Graph, condensation: &Graph, scc: &SccResult) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create DOT directory {}", dir.display()))?;

    let original = dir.join(format!("{base}_original.dot"));
    std::fs::write(&original, render_graph(graph))
        .with_context(|| format!("Failed to write {}", original.display()))?;

    let condensed = dir.join(format!("condensed_{base}.dot"));
    std::fs::write(&condensed, render_condensation(condensation, scc))
        .with_context(|| format!("Failed to write {}", condensed.display()))?;

    Ok((original, condensed))
}
