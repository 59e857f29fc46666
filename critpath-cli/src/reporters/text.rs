//! Text (terminal) reporter
//!
//! One block per dataset, four sections in pipeline order. Styling goes
//! through `console`, so it disappears when stdout is not a terminal.

use super::LabelledReport;
use anyhow::Result;
use console::style;
use critpath_fast::PathResult;
use std::fmt::Write;

const RULE: &str = "=================================================";

fn format_ids(ids: &[usize]) -> String {
    let parts: Vec<String> = ids.iter().map(usize::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn write_path(out: &mut String, entry: &LabelledReport, result: &PathResult, label: &str) -> Result<()> {
    let report = &entry.report;
    let distance = match result.distance {
        Some(d) => style(d.to_string()).bold().to_string(),
        None => style("unreachable".to_string()).yellow().to_string(),
    };
    writeln!(
        out,
        "{} from Source Node {} (SCC {}) to Target Node {} (SCC {}): {}",
        label, report.source, report.source_component, report.target, report.target_component, distance
    )?;
    writeln!(out, "Path in SCCs: {}", format_ids(&result.path))?;
    writeln!(out, "{} {}", style("Metrics:").dim(), result.metrics)?;
    Ok(())
}

/// Render one dataset's results
pub fn render(entry: &LabelledReport) -> Result<String> {
    let report = &entry.report;
    let mut out = String::new();

    writeln!(out, "{}", style(RULE).dim())?;
    writeln!(out, "Processing: {}", style(&entry.label).bold())?;
    writeln!(out, "Vertices: {}, Edges: {}", entry.node_count, entry.edge_count)?;

    writeln!(out, "\n{}", style("[SCC & Condensation]").cyan().bold())?;
    writeln!(
        out,
        "Found {} SCCs. {} {}",
        report.scc.component_count(),
        style("Metrics:").dim(),
        report.scc_metrics
    )?;
    for (id, members) in report.scc.components().iter().enumerate() {
        if members.len() > 1 {
            writeln!(out, "  SCC {} (size {}): {}", id, members.len(), format_ids(members))?;
        }
    }
    writeln!(
        out,
        "Condensation Graph V={} E={}",
        report.condensation.node_count(),
        report.condensation.edge_count()
    )?;

    writeln!(out, "\n{}", style("[Topological Sort]").cyan().bold())?;
    writeln!(out, "Order of SCCs: {}", format_ids(&report.order))?;
    writeln!(out, "{} {}", style("Metrics:").dim(), report.topo_metrics)?;

    writeln!(out, "\n{}", style("[Shortest Path]").cyan().bold())?;
    write_path(&mut out, entry, &report.shortest, "Shortest distance")?;

    writeln!(out, "\n{}", style("[Longest Path / Critical Path]").cyan().bold())?;
    write_path(&mut out, entry, &report.longest, "Critical path length")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;
    use console::strip_ansi_codes;

    #[test]
    fn test_text_render_sections_in_order() {
        let out = render(&test_report()).unwrap();
        let plain = strip_ansi_codes(&out);

        let sections = [
            "[SCC & Condensation]",
            "[Topological Sort]",
            "[Shortest Path]",
            "[Longest Path / Critical Path]",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| plain.find(s).unwrap_or_else(|| panic!("missing {s}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_text_render_contents() {
        let entry = test_report();
        let middle = entry.report.scc.component_of(1).unwrap();
        let out = render(&entry).unwrap();
        let plain = strip_ansi_codes(&out);

        assert!(plain.contains("Processing: fixture.json"));
        assert!(plain.contains("Vertices: 5, Edges: 6"));
        assert!(plain.contains("Found 3 SCCs."));
        assert!(plain.contains(&format!("SCC {middle} (size 3)")));
        assert!(plain.contains("Condensation Graph V=3"));
        assert!(plain.contains("Shortest distance from Source Node 0"));
        assert!(plain.contains(": 1\n"));
        assert!(plain.contains("Critical path length from Source Node 0"));
        assert!(plain.contains(": 9\n"));
        assert!(plain.contains("Relaxations:"));
    }

    #[test]
    fn test_text_render_unreachable() {
        let mut entry = test_report();
        entry.report.longest.distance = None;
        entry.report.longest.path.clear();
        let plain = strip_ansi_codes(&render(&entry).unwrap()).to_string();
        assert!(plain.contains("unreachable"));
        assert!(plain.contains("Path in SCCs: []"));
    }

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[]), "[]");
        assert_eq!(format_ids(&[3, 1, 2]), "[3, 1, 2]");
    }
}
