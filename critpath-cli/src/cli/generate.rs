//! `critpath generate` - write the demo dataset suite

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use tracing::info;

use crate::config::ProjectConfig;
use crate::dataset::generate_suite;

pub(crate) fn run(config: &ProjectConfig, out_dir: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let dir = out_dir.unwrap_or_else(|| config.generate.out_dir.clone());
    let seed = seed.unwrap_or(config.generate.seed);

    let written = generate_suite(&dir, seed)
        .with_context(|| format!("Failed to generate datasets in {}", dir.display()))?;
    info!("Generated {} datasets with seed {}", written.len(), seed);

    for path in &written {
        println!("{} {}", style("wrote").green(), path.display());
    }
    Ok(())
}
