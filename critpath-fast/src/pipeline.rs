//! End-to-end analysis of one graph.
//!
//! SCC → condensation → topological order → shortest and critical path
//! between the components holding `source` and `target`. Every stage gets
//! its own `Metrics`, and the two path runs use independent solvers.

use serde::Serialize;
use tracing::debug;

use crate::dag_path::{DagPathSolver, PathMode};
use crate::errors::GraphError;
use crate::graph::Graph;
use crate::metrics::Metrics;
use crate::scc::{find_sccs, SccResult};
use crate::topo::topological_sort;

/// One path run over the condensation graph.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub mode: PathMode,
    /// `None` when the target component is unreachable.
    pub distance: Option<i64>,
    /// Component ids, source first. Empty when unreachable.
    pub path: Vec<usize>,
    pub metrics: Metrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub source: usize,
    pub target: usize,
    pub source_component: usize,
    pub target_component: usize,
    pub scc: SccResult,
    #[serde(skip)]
    pub condensation: Graph,
    pub order: Vec<usize>,
    pub scc_metrics: Metrics,
    pub topo_metrics: Metrics,
    pub shortest: PathResult,
    pub longest: PathResult,
}

fn solve(
    condensation: &Graph,
    order: &[usize],
    mode: PathMode,
    from: usize,
    to: usize,
) -> Result<PathResult, GraphError> {
    let mut metrics = Metrics::new();
    let mut solver = DagPathSolver::new(condensation, order);
    solver.run(from, mode, &mut metrics)?;
    Ok(PathResult {
        mode,
        distance: solver.distance(to),
        path: solver.reconstruct_path(to)?,
        metrics,
    })
}

/// Run every stage on `graph`.
///
/// # Errors
/// - `NodeOutOfBounds` if `source` or `target` is not a vertex
/// - `CycleDetected` if the condensation is not a DAG (internal bug upstream)
/// - `WeightOverflow` / `BrokenPredecessorChain` from the path solver
pub fn run_pipeline(graph: &Graph, source: usize, target: usize) -> Result<PipelineReport, GraphError> {
    let n = graph.node_count();
    for v in [source, target] {
        if v >= n {
            return Err(GraphError::NodeOutOfBounds(v, n));
        }
    }

    let mut scc_metrics = Metrics::new();
    let scc = find_sccs(graph, &mut scc_metrics);
    debug!(
        "scc: {} components over {} vertices ({})",
        scc.component_count(),
        n,
        scc_metrics
    );

    let condensation = scc.condensation(graph)?;
    debug!(
        "condensation: {} vertices, {} edges",
        condensation.node_count(),
        condensation.edge_count()
    );

    let mut topo_metrics = Metrics::new();
    let order = topological_sort(&condensation, &mut topo_metrics)?;
    debug!("topological order of {} components ({})", order.len(), topo_metrics);

    let source_component = scc
        .component_of(source)
        .ok_or(GraphError::NodeOutOfBounds(source, n))?;
    let target_component = scc
        .component_of(target)
        .ok_or(GraphError::NodeOutOfBounds(target, n))?;

    let shortest = solve(
        &condensation,
        &order,
        PathMode::Shortest,
        source_component,
        target_component,
    )?;
    let longest = solve(
        &condensation,
        &order,
        PathMode::Longest,
        source_component,
        target_component,
    )?;
    debug!(
        "paths {} -> {}: shortest {:?}, longest {:?}",
        source_component, target_component, shortest.distance, longest.distance
    );

    Ok(PipelineReport {
        source,
        target,
        source_component,
        target_component,
        scc,
        condensation,
        order,
        scc_metrics,
        topo_metrics,
        shortest,
        longest,
    })
}
