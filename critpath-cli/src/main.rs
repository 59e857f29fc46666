//! critpath - SCC condensation and critical path analysis CLI
//!
//! Loads weighted digraphs from JSON, collapses strongly connected
//! components, orders the condensation and reports the shortest and
//! longest (critical) path between two vertices.

mod cli;
mod config;
mod dataset;
mod reporters;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
