//! `critpath run` - analyze one or more graph documents

use anyhow::{bail, Context, Result};
use console::style;
use critpath_fast::run_pipeline;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};

use crate::config::{ProjectConfig, TargetSelector};
use crate::dataset::load_graph;
use crate::reporters::{self, dot, LabelledReport, OutputFormat};

pub(crate) struct RunOptions {
    pub files: Vec<PathBuf>,
    pub source: Option<usize>,
    pub target: Option<usize>,
    pub format: Option<String>,
    pub dot_dir: Option<PathBuf>,
    pub workers: usize,
}

/// Settings shared by every file in one invocation
struct Resolved<'a> {
    source: Option<usize>,
    target: TargetSelector,
    config_source: Option<usize>,
    dot_dir: Option<&'a Path>,
}

fn process_file(path: &Path, settings: &Resolved<'_>) -> Result<LabelledReport> {
    let (doc, graph) = load_graph(path)?;
    let n = graph.node_count();

    let source = settings
        .source
        .or(doc.source)
        .or(settings.config_source)
        .unwrap_or(0);
    let target = settings
        .target
        .resolve(n)
        .with_context(|| format!("{} has no vertices", path.display()))?;

    let report = run_pipeline(&graph, source, target)
        .with_context(|| format!("Pipeline failed for {}", path.display()))?;
    info!(
        "{}: {} SCCs, shortest {:?}, critical {:?}",
        path.display(),
        report.scc.component_count(),
        report.shortest.distance,
        report.longest.distance
    );

    if let Some(dir) = settings.dot_dir {
        let base = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_string());
        let (original, condensed) = dot::export(dir, &base, &graph, &report.condensation, &report.scc)?;
        info!("Exported {} and {}", original.display(), condensed.display());
    }

    Ok(LabelledReport {
        label: path.display().to_string(),
        node_count: n,
        edge_count: graph.edge_count(),
        report,
    })
}

pub(crate) fn run(config: &ProjectConfig, options: RunOptions) -> Result<()> {
    let format_name = options.format.as_deref().unwrap_or(&config.run.format);
    let format = OutputFormat::from_str(format_name)?;

    let settings = Resolved {
        source: options.source,
        target: options
            .target
            .map(TargetSelector::Vertex)
            .unwrap_or(config.run.target),
        config_source: config.run.source,
        dot_dir: options.dot_dir.as_deref().or(config.export.dot_dir.as_deref()),
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .build()?;
    let results: Vec<Result<LabelledReport>> = pool.install(|| {
        options
            .files
            .par_iter()
            .map(|path| process_file(path, &settings))
            .collect()
    });

    let total = results.len();
    let mut reports = Vec::with_capacity(total);
    for (path, result) in options.files.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                eprintln!(
                    "{} {}: {:#}",
                    style("FAILED").red().bold(),
                    path.display(),
                    e
                );
            }
        }
    }

    let rendered = reporters::render(&reports, format)?;
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }

    let failed = total - reports.len();
    if failed > 0 {
        bail!("{} of {} files failed", failed, total);
    }
    Ok(())
}
