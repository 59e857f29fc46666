// Adjacency-list graph store
//
// Vertices are the dense range 0..V, fixed at construction. Edges are
// append-only. Forward and reverse adjacency are kept in lockstep by
// add_edge; add_directed_only skips the reverse side and is only used when
// materializing a condensation graph, which is never walked backwards.

use serde::Serialize;

use crate::errors::GraphError;

/// Largest vertex count accepted from untrusted input.
pub const MAX_NODES: usize = 1 << 24;

/// A directed, weighted edge. `source` is the vertex whose list holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    reverse_adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create `node_count` isolated vertices.
    pub fn new(node_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); node_count],
            reverse_adj: vec![Vec::new(); node_count],
        }
    }

    /// Like `new`, but refuses vertex counts above `MAX_NODES` instead of
    /// attempting the allocation. Use this for counts read from input.
    pub fn try_new(node_count: usize) -> Result<Self, GraphError> {
        if node_count > MAX_NODES {
            return Err(GraphError::TooLarge {
                requested: node_count,
                limit: MAX_NODES,
            });
        }
        Ok(Self::new(node_count))
    }

    /// Build a graph from edges, mirroring each into the reverse lists.
    ///
    /// # Errors
    /// - `TooLarge` if `node_count` exceeds `MAX_NODES`
    /// - `NodeOutOfBounds` if any edge references a node >= node_count
    pub fn try_from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::try_new(node_count)?;
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Build a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Same as `try_from_edges`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, i64)]) -> Result<Self, GraphError> {
        Self::try_from_edges(node_count, edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)))
    }

    fn check_bounds(&self, u: usize, v: usize) -> Result<(), GraphError> {
        let n = self.node_count();
        if u >= n {
            return Err(GraphError::NodeOutOfBounds(u, n));
        }
        if v >= n {
            return Err(GraphError::NodeOutOfBounds(v, n));
        }
        Ok(())
    }

    /// Append `u -> v` to the forward list and the mirrored `v -> u` to the
    /// reverse list. Nothing is written if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<(), GraphError> {
        self.check_bounds(u, v)?;
        self.adj[u].push(Edge::new(u, v, weight));
        self.reverse_adj[v].push(Edge::new(v, u, weight));
        Ok(())
    }

    /// Forward-only insertion, used when building a condensation graph.
    pub fn add_directed_only(&mut self, u: usize, v: usize, weight: i64) -> Result<(), GraphError> {
        self.check_bounds(u, v)?;
        self.adj[u].push(Edge::new(u, v, weight));
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of forward edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|list| list.len()).sum()
    }

    /// Outgoing edges of `v`. Out-of-range ids have no edges.
    pub fn adj(&self, v: usize) -> &[Edge] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `v`, stored with `source == v` and `target` set to
    /// the original tail.
    pub fn reverse_adj(&self, v: usize) -> &[Edge] {
        self.reverse_adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.node_count()
    }

    /// All forward edges, grouped by source in ascending vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adj.iter().flatten()
    }
}
