//! JSON reporter
//!
//! Outputs every labelled report as one pretty-printed JSON array.
//! The condensation graph itself is omitted; its size is included.

use super::LabelledReport;
use anyhow::Result;
use serde_json::{json, Value};

fn to_value(entry: &LabelledReport) -> Result<Value> {
    let condensation = &entry.report.condensation;
    Ok(json!({
        "dataset": entry.label,
        "vertices": entry.node_count,
        "edges": entry.edge_count,
        "condensation": {
            "vertices": condensation.node_count(),
            "edges": condensation.edge_count(),
        },
        "report": serde_json::to_value(&entry.report)?,
    }))
}

/// Render reports as a JSON array
pub fn render(reports: &[LabelledReport]) -> Result<String> {
    let values: Result<Vec<Value>> = reports.iter().map(to_value).collect();
    Ok(serde_json::to_string_pretty(&Value::Array(values?))?)
}
