//! Configuration support
//!
//! Loads optional defaults from `critpath.toml` in the working directory.
//! Command-line flags always win over file values.
//!
//! # Configuration Format
//!
//! ```toml
//! # critpath.toml
//!
//! [run]
//! source = 0         # used when the dataset has no "source" field
//! target = "last"    # "last" (vertex n-1) or an explicit vertex id
//! format = "text"    # text or json
//!
//! [export]
//! dot_dir = "data"   # write Graphviz files here; omit to skip
//!
//! [generate]
//! seed = 42
//! out_dir = "data"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "critpath.toml";

/// Which vertex the paths are computed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "TargetValue")]
pub enum TargetSelector {
    /// The highest-numbered vertex, `n - 1`
    #[default]
    Last,
    Vertex(usize),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TargetValue {
    Id(usize),
    Keyword(String),
}

impl TryFrom<TargetValue> for TargetSelector {
    type Error = String;

    fn try_from(value: TargetValue) -> Result<Self, Self::Error> {
        match value {
            TargetValue::Id(v) => Ok(TargetSelector::Vertex(v)),
            TargetValue::Keyword(k) if k.eq_ignore_ascii_case("last") => Ok(TargetSelector::Last),
            TargetValue::Keyword(k) => Err(format!(
                "invalid target '{k}': expected \"last\" or a vertex id"
            )),
        }
    }
}

impl TargetSelector {
    /// Resolve against a graph of `node_count` vertices. `None` for an empty
    /// graph.
    pub fn resolve(self, node_count: usize) -> Option<usize> {
        match self {
            TargetSelector::Last => node_count.checked_sub(1),
            TargetSelector::Vertex(v) => Some(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub source: Option<usize>,
    pub target: TargetSelector,
    pub format: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: None,
            target: TargetSelector::Last,
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dot_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub seed: u64,
    pub out_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            out_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub run: RunConfig,
    pub export: ExportConfig,
    pub generate: GenerateConfig,
}

/// Load `critpath.toml` from `dir`, falling back to defaults if the file is
/// missing or broken.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        return ProjectConfig::default();
    }
    match load_config_file(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load a config file, reporting any problem to the caller.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}
