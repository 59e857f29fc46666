//! Graph datasets on disk
//!
//! A dataset is a JSON document:
//!
//! ```json
//! {
//!   "directed": true,
//!   "n": 4,
//!   "edges": [{ "u": 0, "v": 1, "w": 3 }, { "u": 1, "v": 2 }],
//!   "source": 0,
//!   "weight_model": "edge"
//! }
//! ```
//!
//! `w` defaults to 1. Edges are always loaded as directed; a document marked
//! `"directed": false` is accepted with a warning.

use critpath_fast::generator::{standard_suite, Dataset};
use critpath_fast::{Edge, Graph, GraphError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid graph document: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} describes an invalid graph: {source}")]
    Invalid {
        path: String,
        #[source]
        source: GraphError,
    },
}

fn default_weight() -> i64 {
    1
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: usize,
    pub v: usize,
    #[serde(default = "default_weight")]
    pub w: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    pub n: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_model: Option<String>,
}

impl GraphDocument {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            directed: true,
            n: dataset.node_count,
            edges: dataset
                .edges
                .iter()
                .map(|e| EdgeRecord {
                    u: e.source,
                    v: e.target,
                    w: e.weight,
                })
                .collect(),
            source: Some(dataset.source),
            weight_model: Some("edge".to_string()),
        }
    }

    /// Build the in-memory graph. An out-of-range endpoint or a vertex
    /// count above `MAX_NODES` fails the whole document.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        Graph::try_from_edges(self.n, self.edges.iter().map(|e| Edge::new(e.u, e.v, e.w)))
    }
}

/// Parse a JSON document. `origin` only labels errors.
pub fn parse_graph(raw: &str, origin: &str) -> Result<(GraphDocument, Graph), DatasetError> {
    let doc: GraphDocument = serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
        path: origin.to_string(),
        source,
    })?;
    if !doc.directed {
        warn!("{} is marked undirected; edges are loaded as directed", origin);
    }
    let graph = doc.to_graph().map_err(|source| DatasetError::Invalid {
        path: origin.to_string(),
        source,
    })?;
    Ok((doc, graph))
}

pub fn load_graph(path: &Path) -> Result<(GraphDocument, Graph), DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (doc, graph) = parse_graph(&raw, &path.display().to_string())?;
    debug!(
        "Loaded graph from {}: V={}, E={}, model={}",
        path.display(),
        graph.node_count(),
        graph.edge_count(),
        doc.weight_model.as_deref().unwrap_or("unspecified")
    );
    Ok((doc, graph))
}

pub fn save_graph(path: &Path, doc: &GraphDocument) -> Result<(), DatasetError> {
    let io_err = |source: std::io::Error| DatasetError::Io {
        path: path.display().to_string(),
        source,
    };
    let pretty = serde_json::to_string_pretty(doc).map_err(|e| io_err(e.into()))?;
    std::fs::write(path, pretty).map_err(io_err)
}

/// Write the nine generated demo datasets into `dir` as `<name>.json`.
pub fn generate_suite(dir: &Path, seed: u64) -> Result<Vec<PathBuf>, DatasetError> {
    std::fs::create_dir_all(dir).map_err(|source| DatasetError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let suite = standard_suite(seed).map_err(|source| DatasetError::Invalid {
        path: dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::with_capacity(suite.len());
    for dataset in &suite {
        let path = dir.join(format!("{}.json", dataset.name));
        save_graph(&path, &GraphDocument::from_dataset(dataset))?;
        written.push(path);
    }
    Ok(written)
}
