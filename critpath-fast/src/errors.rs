// Error types for the graph pipeline
//
// Every stage returns Result<T, GraphError> instead of sentinel values.
// An unreachable target is NOT an error: it is an Ok result with no distance
// and an empty path.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id outside `[0, node_count)` was passed in.
    #[error("node index {0} out of bounds (graph has {1} nodes)")]
    NodeOutOfBounds(usize, usize),

    /// Kahn's pass could not order every vertex, so the graph has a cycle.
    #[error("cycle detected: only {sorted} of {total} vertices could be ordered")]
    CycleDetected { sorted: usize, total: usize },

    /// Predecessor walk from this vertex never reached the run's source.
    #[error("predecessor chain from vertex {0} does not reach the source")]
    BrokenPredecessorChain(usize),

    #[error("path weight overflowed relaxing edge {from} -> {to}")]
    WeightOverflow { from: usize, to: usize },

    /// Requested vertex count is above `graph::MAX_NODES`.
    #[error("graph of {requested} nodes exceeds the limit of {limit}")]
    TooLarge { requested: usize, limit: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
