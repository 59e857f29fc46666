//! Synthetic graph generation for benchmarks and demo datasets.
//!
//! All generators take the RNG as an argument, so the same seed always gives
//! the same graph. `standard_suite` seeds a `ChaCha8Rng`, whose stream is
//! stable across platforms and `rand` releases.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use crate::errors::GraphError;
use crate::graph::{Edge, Graph};

/// A generated edge list plus the metadata stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub node_count: usize,
    pub edges: Vec<Edge>,
    pub source: usize,
}

impl Dataset {
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        Graph::try_from_edges(self.node_count, self.edges.iter().copied())
    }
}

/// Keep the first edge for each (source, target) pair.
fn first_per_pair(edges: Vec<Edge>) -> Vec<Edge> {
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    edges
        .into_iter()
        .filter(|e| seen.insert((e.source, e.target)))
        .collect()
}

fn require_nodes(n: usize) -> Result<(), GraphError> {
    if n == 0 {
        return Err(GraphError::InvalidParameter("node count must be at least 1".into()));
    }
    Ok(())
}

/// Up to `e` forward edges `u → v` with `u < v`, weights 1..=10.
/// Draws that land on `u == v` are dropped, so the result is acyclic.
pub fn random_dag<R: Rng>(n: usize, e: usize, rng: &mut R) -> Result<Vec<Edge>, GraphError> {
    require_nodes(n)?;
    let mut edges = Vec::with_capacity(e);
    for _ in 0..e {
        let u = rng.gen_range(0..n);
        let v = u + rng.gen_range(0..n - u);
        if u == v {
            continue;
        }
        edges.push(Edge::new(u, v, rng.gen_range(1..=10)));
    }
    Ok(first_per_pair(edges))
}

/// Random non-loop edges (weights 1..=10) plus `cycles` two-vertex cycles
/// of weight 1.
pub fn random_mixed<R: Rng>(n: usize, e: usize, cycles: usize, rng: &mut R) -> Result<Vec<Edge>, GraphError> {
    if n < 2 {
        return Err(GraphError::InvalidParameter(
            "mixed graphs need at least 2 nodes".into(),
        ));
    }
    let mut edges = Vec::with_capacity(e + cycles);
    for _ in 0..e.saturating_sub(cycles) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        edges.push(Edge::new(u, v, rng.gen_range(1..=10)));
    }
    for _ in 0..cycles {
        let start = rng.gen_range(0..n);
        let other = (start + 1 + rng.gen_range(0..n - 1)) % n;
        edges.push(Edge::new(start, other, 1));
        edges.push(Edge::new(other, start, 1));
    }
    Ok(first_per_pair(edges))
}

/// `clusters` rings of `cluster_size` vertices each (with extra random
/// chords, weights 1..=5), chained cluster to cluster. Leftover vertices
/// hang off the last cluster as a simple chain, then random filler edges
/// (weights 1..=10) are drawn until `e` edges were attempted.
pub fn clustered_sccs<R: Rng>(
    n: usize,
    e: usize,
    clusters: usize,
    cluster_size: usize,
    rng: &mut R,
) -> Result<Vec<Edge>, GraphError> {
    require_nodes(n)?;
    if clusters == 0 || cluster_size == 0 {
        return Err(GraphError::InvalidParameter(
            "need at least one non-empty cluster".into(),
        ));
    }
    let clustered = clusters
        .checked_mul(cluster_size)
        .filter(|&total| total <= n)
        .ok_or_else(|| {
            GraphError::InvalidParameter(format!(
                "{clusters} clusters of {cluster_size} do not fit in {n} nodes"
            ))
        })?;

    let mut edges = Vec::new();
    for c in 0..clusters {
        let start = c * cluster_size;
        let end = start + cluster_size;

        for i in start..end {
            let next = if i + 1 >= end { start } else { i + 1 };
            edges.push(Edge::new(i, next, 1));
        }
        for _ in 0..cluster_size * 2 {
            let u = start + rng.gen_range(0..cluster_size);
            let v = start + rng.gen_range(0..cluster_size);
            if u != v {
                edges.push(Edge::new(u, v, rng.gen_range(1..=5)));
            }
        }
        if c > 0 {
            edges.push(Edge::new(start - 1, start + rng.gen_range(0..cluster_size), 1));
        }
    }

    let mut last = clustered - 1;
    for v in clustered..n {
        edges.push(Edge::new(last, v, 1));
        last = v;
    }

    for _ in 0..e.saturating_sub(edges.len()) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.push(Edge::new(u, v, rng.gen_range(1..=10)));
        }
    }
    Ok(first_per_pair(edges))
}

fn dataset(name: &str, node_count: usize, edges: Vec<Edge>) -> Dataset {
    Dataset {
        name: name.to_string(),
        node_count,
        edges,
        source: 0,
    }
}

/// The nine demo datasets: DAG / cyclic / dense variants at 10, 25 and 50
/// vertices.
pub fn standard_suite(seed: u64) -> Result<Vec<Dataset>, GraphError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(vec![
        dataset("small_dag_1", 10, random_dag(10, 12, &mut rng)?),
        dataset("small_cycle_1", 10, random_mixed(10, 15, 1, &mut rng)?),
        dataset("small_mixed_1", 10, random_mixed(10, 30, 2, &mut rng)?),
        dataset("medium_dag_1", 25, random_dag(25, 30, &mut rng)?),
        dataset("medium_scc_1", 25, clustered_sccs(25, 40, 2, 10, &mut rng)?),
        dataset("medium_dense_1", 25, random_mixed(25, 150, 5, &mut rng)?),
        dataset("large_dag_1", 50, random_dag(50, 70, &mut rng)?),
        dataset("large_scc_1", 50, clustered_sccs(50, 90, 3, 15, &mut rng)?),
        dataset("large_dense_1", 50, random_mixed(50, 50 * 49 / 4, 5, &mut rng)?),
    ])
}
