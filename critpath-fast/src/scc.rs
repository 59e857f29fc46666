// Strongly connected components and the condensation graph
//
// ============================================================================
// TARJAN'S ALGORITHM (iterative)
// ============================================================================
//
// What is an SCC?
// A maximal group of vertices where EVERY vertex can reach EVERY other one.
//
// Example:
//   0 → 1 → 2 → 3 → 1, 3 → 4
//   {1, 2, 3} is one SCC (a cycle), {0} and {4} are singletons.
//
// One depth-first pass:
// 1. On entering u, give it a discovery index and set low[u] to the same value
// 2. Push u on the active stack
// 3. For each edge u → v:
//      v unvisited   → descend, then low[u] = min(low[u], low[v])
//      v on stack    → low[u] = min(low[u], disc[v])
//      otherwise     → v lives in an already closed SCC, ignore
// 4. When u is finished and low[u] == disc[u], u roots an SCC: pop the active
//    stack down to and including u
//
// Components are numbered in the order they close, which is the REVERSE of a
// topological order of the condensation graph.
//
// The descent uses an explicit work stack of (vertex, edge cursor) frames so
// deep graphs cannot overflow the call stack.
//
// Time complexity: O(V + E)
// ============================================================================

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::GraphError;
use crate::graph::Graph;
use crate::metrics::Metrics;

/// Partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SccResult {
    components: Vec<Vec<usize>>,
    component_of: Vec<usize>,
}

impl SccResult {
    /// Components in closing order. Members appear in the order they were
    /// popped off the active stack (the root last).
    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component id owning vertex `v`, or `None` if `v` is not a vertex.
    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.component_of.get(v).copied()
    }

    /// Full vertex → component mapping.
    pub fn component_map(&self) -> &[usize] {
        &self.component_of
    }

    /// Ids of components that contain a cycle: more than one vertex, or a
    /// single vertex with a self-loop.
    pub fn cyclic_components(&self, graph: &Graph) -> Vec<usize> {
        self.components
            .iter()
            .enumerate()
            .filter(|(_, members)| match members.as_slice() {
                [only] => graph.adj(*only).iter().any(|e| e.target == *only),
                _ => members.len() > 1,
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Contract every component to one vertex.
    ///
    /// For each ordered pair of distinct components only the heaviest
    /// crossing edge survives. Edges inside a component are dropped. Edges
    /// are inserted forward-only, sorted by (from, to).
    ///
    /// # Errors
    /// - `InvalidParameter` if `graph` is not the graph this partition came from
    pub fn condensation(&self, graph: &Graph) -> Result<Graph, GraphError> {
        if graph.node_count() != self.component_of.len() {
            return Err(GraphError::InvalidParameter(format!(
                "partition covers {} vertices but graph has {}",
                self.component_of.len(),
                graph.node_count()
            )));
        }

        let mut max_weight: FxHashMap<(usize, usize), i64> = FxHashMap::default();
        for edge in graph.edges() {
            let from = self.component_of[edge.source];
            let to = self.component_of[edge.target];
            if from == to {
                continue;
            }
            max_weight
                .entry((from, to))
                .and_modify(|w| *w = (*w).max(edge.weight))
                .or_insert(edge.weight);
        }

        let mut pairs: Vec<_> = max_weight.into_iter().collect();
        pairs.sort_unstable_by_key(|&(key, _)| key);

        let mut condensed = Graph::new(self.component_count());
        for ((from, to), weight) in pairs {
            condensed.add_directed_only(from, to, weight)?;
        }
        Ok(condensed)
    }
}

/// One frame of the simulated recursion.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    cursor: usize,
}

struct TarjanState {
    counter: usize,
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component_of: Vec<Option<usize>>,
    components: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            counter: 0,
            disc: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            component_of: vec![None; n],
            components: Vec::new(),
        }
    }

    fn enter(&mut self, u: usize, metrics: &mut Metrics) {
        metrics.increment_dfs_visits();
        self.disc[u] = Some(self.counter);
        self.low[u] = self.counter;
        self.counter += 1;
        self.stack.push(u);
        self.on_stack[u] = true;
    }

    fn is_root(&self, u: usize) -> bool {
        self.disc[u] == Some(self.low[u])
    }

    fn close_component(&mut self, root: usize) {
        let id = self.components.len();
        let mut members = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            debug_assert!(self.component_of[w].is_none(), "vertex {w} assigned twice");
            self.component_of[w] = Some(id);
            members.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(members);
    }

    fn into_result(self) -> SccResult {
        // Every vertex is closed into exactly one component by now
        debug_assert!(self.component_of.iter().all(Option::is_some));
        let component_of = self
            .component_of
            .into_iter()
            .map(|id| id.unwrap_or_default())
            .collect();
        SccResult {
            components: self.components,
            component_of,
        }
    }
}

/// Find all strongly connected components of `graph`.
///
/// Records one DFS visit per vertex entered and one processed edge per
/// outgoing edge examined. Vertices with no edges become singleton
/// components; self-loops never split a component.
pub fn find_sccs(graph: &Graph, metrics: &mut Metrics) -> SccResult {
    metrics.start_timer();

    let mut state = TarjanState::new(graph.node_count());
    let mut work: Vec<Frame> = Vec::new();

    for start in graph.vertices() {
        if state.disc[start].is_some() {
            continue;
        }
        state.enter(start, metrics);
        work.push(Frame {
            vertex: start,
            cursor: 0,
        });

        while let Some(frame) = work.last_mut() {
            let u = frame.vertex;

            if let Some(edge) = graph.adj(u).get(frame.cursor) {
                frame.cursor += 1;
                metrics.increment_edges_processed(1);
                let v = edge.target;

                match state.disc[v] {
                    None => {
                        state.enter(v, metrics);
                        work.push(Frame { vertex: v, cursor: 0 });
                    }
                    Some(disc_v) if state.on_stack[v] => {
                        state.low[u] = state.low[u].min(disc_v);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All edges of u examined: close or hand low-link to the parent.
            work.pop();
            if state.is_root(u) {
                state.close_component(u);
            }
            if let Some(parent) = work.last() {
                let p = parent.vertex;
                state.low[p] = state.low[p].min(state.low[u]);
            }
        }
    }

    metrics.stop_timer();
    state.into_result()
}
