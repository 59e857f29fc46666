// Topological ordering (Kahn's algorithm)
//
// 1. Count in-degrees with a single scan of every adjacency list
// 2. Seed a FIFO queue with all zero in-degree vertices, ascending id
// 3. Pop a vertex, append it to the order, decrement each target's in-degree,
//    enqueue targets that just reached zero
//
// If fewer than V vertices come out, the leftovers sit on a cycle. That is
// reported as CycleDetected; a truncated order is never returned.

use std::collections::VecDeque;

use crate::errors::GraphError;
use crate::graph::Graph;
use crate::metrics::Metrics;

/// Order the vertices of a DAG so every edge points forward.
///
/// # Errors
/// - `CycleDetected` if the graph has a cycle. For a condensation graph this
///   means the upstream SCC stage is broken.
pub fn topological_sort(graph: &Graph, metrics: &mut Metrics) -> Result<Vec<usize>, GraphError> {
    let n = graph.node_count();

    let mut in_degree = vec![0usize; n];
    for edge in graph.edges() {
        in_degree[edge.target] += 1;
    }

    metrics.start_timer();

    let mut queue = VecDeque::new();
    for v in graph.vertices() {
        if in_degree[v] == 0 {
            queue.push_back(v);
            metrics.increment_queue_pushes();
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        metrics.increment_queue_pops();
        order.push(u);

        for edge in graph.adj(u) {
            metrics.increment_edges_processed(1);
            let v = edge.target;
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
                metrics.increment_queue_pushes();
            }
        }
    }

    metrics.stop_timer();

    if order.len() != n {
        return Err(GraphError::CycleDetected {
            sorted: order.len(),
            total: n,
        });
    }
    Ok(order)
}
