//! Output reporters for pipeline results
//!
//! Supports:
//! - `text` - Terminal summary with colors
//! - `json` - Machine-readable JSON
//!
//! Graphviz export lives in [`dot`]; it renders graphs, not reports.

pub mod dot;
mod json;
mod text;

use anyhow::{anyhow, Result};
use critpath_fast::PipelineReport;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One processed dataset, labelled for output.
#[derive(Debug, Clone)]
pub struct LabelledReport {
    pub label: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub report: PipelineReport,
}

/// Render a set of results. Text output concatenates one block per dataset;
/// JSON output is a single array so it stays parseable.
pub fn render(reports: &[LabelledReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let blocks: Result<Vec<String>> = reports.iter().map(text::render).collect();
            Ok(blocks?.concat())
        }
        OutputFormat::Json => json::render(reports),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use critpath_fast::{run_pipeline, Graph};

    /// Pipeline result for 0 → {1,2,3 cycle} → 4 with a direct 0 → 4 shortcut
    pub(crate) fn test_report() -> LabelledReport {
        let graph = Graph::from_edges(
            5,
            &[(0, 1, 2), (1, 2, 1), (2, 3, 1), (3, 1, 1), (3, 4, 7), (0, 4, 1)],
        )
        .expect("graph");
        LabelledReport {
            label: "fixture.json".into(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            report: run_pipeline(&graph, 0, 4).expect("pipeline"),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("terminal").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_render_multiple_text_blocks() {
        let reports = vec![test_report(), test_report()];
        let out = render(&reports, OutputFormat::Text).unwrap();
        assert_eq!(out.matches("Processing:").count(), 2);
    }
}
