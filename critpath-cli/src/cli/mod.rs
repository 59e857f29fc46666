//! CLI command definitions and handlers

mod generate;
mod run;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{load_config_file, load_project_config, ProjectConfig};

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// critpath - SCC condensation and critical paths for weighted digraphs
#[derive(Parser, Debug)]
#[command(name = "critpath")]
#[command(
    version,
    about = "Condense a weighted digraph into strongly connected components and report shortest and critical paths",
    after_help = "\
Examples:
  critpath generate                          Write the nine demo datasets to ./data
  critpath run data/*.json                   Analyze every dataset
  critpath run tasks.json --source 4         Paths from vertex 4 to the last vertex
  critpath run g.json --format json          JSON output for scripting
  critpath run g.json --dot-dir out          Also export Graphviz files"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG wins when set.
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./critpath.toml if present)
    #[arg(long, global = true, env = "CRITPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of parallel workers (1-64)
    #[arg(long, global = true, default_value = "4", value_parser = parse_workers)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the SCC / topological sort / path pipeline on graph files
    Run {
        /// JSON graph documents
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Source vertex (default: the document's "source", then config, then 0)
        #[arg(long, short = 's')]
        source: Option<usize>,

        /// Target vertex (default: config, then the last vertex)
        #[arg(long, short = 't')]
        target: Option<usize>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Write <name>_original.dot and condensed_<name>.dot here
        #[arg(long)]
        dot_dir: Option<PathBuf>,
    },

    /// Generate the demo dataset suite
    Generate {
        /// Output directory (default: config, then ./data)
        #[arg(long, short = 'o')]
        out_dir: Option<PathBuf>,

        /// RNG seed (default: config, then 42)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// An explicitly named config file must load; the implicit
/// `./critpath.toml` falls back to defaults.
fn resolve_config(explicit: Option<&PathBuf>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display())),
        None => Ok(load_project_config(&std::env::current_dir()?)),
    }
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Run {
            files,
            source,
            target,
            format,
            dot_dir,
        } => run::run(
            &config,
            run::RunOptions {
                files,
                source,
                target,
                format,
                dot_dir,
                workers: cli.workers,
            },
        ),

        Commands::Generate { out_dir, seed } => generate::run(&config, out_dir, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("8"), Ok(8));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "critpath", "run", "a.json", "b.json", "--source", "2", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                files,
                source,
                target,
                format,
                ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(source, Some(2));
                assert_eq!(target, None);
                assert_eq!(format.as_deref(), Some("json"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_files() {
        assert!(Cli::try_parse_from(["critpath", "run"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["critpath", "run", "a.json", "--format", "sarif"]).is_err());
    }

    #[test]
    fn test_explicit_config_is_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[run\nformat = ").unwrap();

        let err = resolve_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
        assert!(resolve_config(Some(&dir.path().join("missing.toml"))).is_err());

        std::fs::write(&path, "[run]\nformat = \"json\"\n").unwrap();
        assert_eq!(resolve_config(Some(&path)).unwrap().run.format, "json");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["critpath", "generate", "--log-level", "debug", "--workers", "2"])
            .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.workers, 2);
    }
}
