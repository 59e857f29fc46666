// Single-source shortest / longest paths over a DAG
//
// Given a topological order, one sweep is enough: by the time a vertex is
// reached in the order, every edge into it has already been relaxed, so its
// distance is final. The same sweep computes the critical (longest) path by
// flipping the comparison.
//
// Only valid for the order of the graph it is paired with. Cycles are not
// detected here; that is the topological sorter's job.

use serde::Serialize;

use crate::errors::GraphError;
use crate::graph::Graph;
use crate::metrics::Metrics;

/// Which extreme a run computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    Shortest,
    Longest,
}

impl PathMode {
    fn improves(self, candidate: i64, current: Option<i64>) -> bool {
        match (self, current) {
            (_, None) => true,
            (PathMode::Shortest, Some(current)) => candidate < current,
            (PathMode::Longest, Some(current)) => candidate > current,
        }
    }
}

/// Distance and predecessor state for one graph + topological order.
///
/// Every `find_*` call resets both arrays, so a solver can be reused for a
/// second run, but two results can never be read from one solver at once.
#[derive(Debug, Clone)]
pub struct DagPathSolver<'a> {
    graph: &'a Graph,
    order: &'a [usize],
    dist: Vec<Option<i64>>,
    pred: Vec<Option<usize>>,
    last_run: Option<(PathMode, usize)>,
}

impl<'a> DagPathSolver<'a> {
    pub fn new(graph: &'a Graph, order: &'a [usize]) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            order,
            dist: vec![None; n],
            pred: vec![None; n],
            last_run: None,
        }
    }

    /// Minimum total weight from `source` to every reachable vertex.
    pub fn find_shortest_paths(&mut self, source: usize, metrics: &mut Metrics) -> Result<(), GraphError> {
        self.run(source, PathMode::Shortest, metrics)
    }

    /// Maximum total weight (critical path) from `source` to every
    /// reachable vertex.
    pub fn find_longest_paths(&mut self, source: usize, metrics: &mut Metrics) -> Result<(), GraphError> {
        self.run(source, PathMode::Longest, metrics)
    }

    /// # Errors
    /// - `NodeOutOfBounds` if `source` or any vertex of the order is not in the graph
    /// - `WeightOverflow` if a path weight leaves the `i64` range
    pub fn run(&mut self, source: usize, mode: PathMode, metrics: &mut Metrics) -> Result<(), GraphError> {
        let n = self.graph.node_count();
        if source >= n {
            return Err(GraphError::NodeOutOfBounds(source, n));
        }
        if let Some(&bad) = self.order.iter().find(|&&v| v >= n) {
            return Err(GraphError::NodeOutOfBounds(bad, n));
        }

        self.dist.iter_mut().for_each(|d| *d = None);
        self.pred.iter_mut().for_each(|p| *p = None);
        self.dist[source] = Some(0);
        self.last_run = Some((mode, source));

        metrics.start_timer();
        let result = self.relax_in_order(mode, metrics);
        metrics.stop_timer();
        result
    }

    fn relax_in_order(&mut self, mode: PathMode, metrics: &mut Metrics) -> Result<(), GraphError> {
        for &u in self.order {
            // Unreachable from the source
            let Some(dist_u) = self.dist[u] else {
                continue;
            };

            for edge in self.graph.adj(u) {
                let v = edge.target;
                let candidate = dist_u
                    .checked_add(edge.weight)
                    .ok_or(GraphError::WeightOverflow { from: u, to: v })?;

                if mode.improves(candidate, self.dist[v]) {
                    self.dist[v] = Some(candidate);
                    self.pred[v] = Some(u);
                    metrics.increment_relaxations();
                }
            }
        }
        Ok(())
    }

    /// Path from the last run's source to `target`, source first.
    ///
    /// An unreached target (or no run yet) gives an empty path.
    ///
    /// # Errors
    /// - `NodeOutOfBounds` if `target` is not in the graph
    /// - `BrokenPredecessorChain` if the predecessor links do not lead back
    ///   to the source; this only happens if solver state was corrupted
    pub fn reconstruct_path(&self, target: usize) -> Result<Vec<usize>, GraphError> {
        let n = self.graph.node_count();
        if target >= n {
            return Err(GraphError::NodeOutOfBounds(target, n));
        }
        let Some((_, source)) = self.last_run else {
            return Ok(Vec::new());
        };
        if self.dist[target].is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.pred[current] {
            // A simple path never has more than n vertices
            if path.len() >= n {
                return Err(GraphError::BrokenPredecessorChain(target));
            }
            path.push(prev);
            current = prev;
        }

        if current != source {
            return Err(GraphError::BrokenPredecessorChain(target));
        }

        path.reverse();
        Ok(path)
    }

    /// Distance of `v` from the last run's source; `None` if unreached.
    pub fn distance(&self, v: usize) -> Option<i64> {
        self.dist.get(v).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<i64>] {
        &self.dist
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.pred.get(v).copied().flatten()
    }

    pub fn mode(&self) -> Option<PathMode> {
        self.last_run.map(|(mode, _)| mode)
    }

    pub fn source(&self) -> Option<usize> {
        self.last_run.map(|(_, source)| source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn diamond() -> Graph {
        Graph::from_edges(4, &[(0, 1, 3), (0, 2, 1), (1, 3, 2), (2, 3, 5)]).unwrap()
    }

    /// Sum of a path's weights. Parallel edges resolve to the one the
    /// solver would pick: lightest for shortest, heaviest for longest.
    fn path_weight(g: &Graph, path: &[usize], mode: PathMode) -> i64 {
        path.windows(2)
            .map(|w| {
                let parallel = g.adj(w[0]).iter().filter(|e| e.target == w[1]).map(|e| e.weight);
                match mode {
                    PathMode::Shortest => parallel.min().unwrap(),
                    PathMode::Longest => parallel.max().unwrap(),
                }
            })
            .sum()
    }

    #[test]
    fn test_shortest_on_diamond() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut m = Metrics::new();
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_shortest_paths(0, &mut m).unwrap();

        // 0→1→3 weighs 5, 0→2→3 weighs 6
        assert_eq!(solver.distance(3), Some(5));
        assert_eq!(solver.reconstruct_path(3).unwrap(), vec![0, 1, 3]);
        assert_eq!(solver.mode(), Some(PathMode::Shortest));
        // 2→3 offers 6, which does not beat 5
        assert_eq!(m.relaxations(), 3);
    }

    #[test]
    fn test_longest_on_diamond() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut m = Metrics::new();
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_longest_paths(0, &mut m).unwrap();

        assert_eq!(solver.distance(3), Some(6));
        assert_eq!(solver.reconstruct_path(3).unwrap(), vec![0, 2, 3]);
        assert_eq!(m.relaxations(), 4);
    }

    #[test]
    fn test_rerun_resets_state() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_longest_paths(0, &mut Metrics::new()).unwrap();
        solver.find_shortest_paths(1, &mut Metrics::new()).unwrap();

        assert_eq!(solver.distance(0), None);
        assert_eq!(solver.distance(2), None);
        assert_eq!(solver.distance(3), Some(2));
        assert_eq!(solver.predecessor(2), None);
        assert_eq!(solver.reconstruct_path(3).unwrap(), vec![1, 3]);
        assert_eq!(solver.source(), Some(1));
    }

    #[test]
    fn test_unreachable_target_is_empty_path() {
        let g = Graph::from_edges(3, &[(0, 1, 1)]).unwrap();
        let order = vec![0, 1, 2];
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_shortest_paths(0, &mut Metrics::new()).unwrap();

        assert_eq!(solver.distance(2), None);
        assert!(solver.reconstruct_path(2).unwrap().is_empty());
        assert_eq!(solver.distances(), &[Some(0), Some(1), None]);
    }

    #[test]
    fn test_source_to_itself() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_longest_paths(2, &mut Metrics::new()).unwrap();
        assert_eq!(solver.reconstruct_path(2).unwrap(), vec![2]);
        assert_eq!(solver.distance(2), Some(0));
    }

    #[test]
    fn test_no_run_yet_gives_empty_path() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let solver = DagPathSolver::new(&g, &order);
        assert!(solver.reconstruct_path(3).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut solver = DagPathSolver::new(&g, &order);
        assert_eq!(
            solver.find_shortest_paths(9, &mut Metrics::new()),
            Err(GraphError::NodeOutOfBounds(9, 4))
        );
        assert_eq!(solver.reconstruct_path(4), Err(GraphError::NodeOutOfBounds(4, 4)));

        let bad_order = vec![0, 7];
        let mut solver = DagPathSolver::new(&g, &bad_order);
        assert_eq!(
            solver.find_shortest_paths(0, &mut Metrics::new()),
            Err(GraphError::NodeOutOfBounds(7, 4))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let g = Graph::from_edges(3, &[(0, 1, i64::MAX), (1, 2, 1)]).unwrap();
        let order = vec![0, 1, 2];
        let mut solver = DagPathSolver::new(&g, &order);
        assert_eq!(
            solver.find_longest_paths(0, &mut Metrics::new()),
            Err(GraphError::WeightOverflow { from: 1, to: 2 })
        );
    }

    #[test]
    fn test_corrupted_chain_is_detected() {
        let g = diamond();
        let order = vec![0, 1, 2, 3];
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_shortest_paths(0, &mut Metrics::new()).unwrap();

        // Cut the chain: 2 no longer leads to 0
        solver.pred[2] = None;
        assert_eq!(solver.reconstruct_path(3), Err(GraphError::BrokenPredecessorChain(3)));

        // Loop in the chain
        solver.pred[2] = Some(3);
        assert_eq!(solver.reconstruct_path(3), Err(GraphError::BrokenPredecessorChain(3)));
    }

    #[test]
    fn test_negative_weights() {
        let g = Graph::from_edges(3, &[(0, 1, -4), (1, 2, -1), (0, 2, -3)]).unwrap();
        let order = vec![0, 1, 2];
        let mut solver = DagPathSolver::new(&g, &order);
        solver.find_shortest_paths(0, &mut Metrics::new()).unwrap();
        assert_eq!(solver.distance(2), Some(-5));
        assert_eq!(solver.reconstruct_path(2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_random_dags_path_weights_match_distances() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let n = rng.gen_range(2..30);
            let mut g = Graph::new(n);
            for _ in 0..n * 3 {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                if u < v {
                    g.add_edge(u, v, rng.gen_range(-10..=20)).unwrap();
                }
            }
            let order: Vec<usize> = (0..n).collect();

            let mut shortest = DagPathSolver::new(&g, &order);
            shortest.find_shortest_paths(0, &mut Metrics::new()).unwrap();
            let mut longest = DagPathSolver::new(&g, &order);
            longest.find_longest_paths(0, &mut Metrics::new()).unwrap();

            for t in 0..n {
                match (shortest.distance(t), longest.distance(t)) {
                    (Some(lo), Some(hi)) => {
                        assert!(hi >= lo);
                        let sp = shortest.reconstruct_path(t).unwrap();
                        let lp = longest.reconstruct_path(t).unwrap();
                        assert_eq!(sp.first(), Some(&0));
                        assert_eq!(sp.last(), Some(&t));
                        assert_eq!(path_weight(&g, &sp, PathMode::Shortest), lo);
                        assert_eq!(path_weight(&g, &lp, PathMode::Longest), hi);
                    }
                    (None, None) => {
                        assert!(shortest.reconstruct_path(t).unwrap().is_empty());
                        assert!(longest.reconstruct_path(t).unwrap().is_empty());
                    }
                    other => panic!("reachability differs between runs: {other:?}"),
                }
            }
        }
    }
}
