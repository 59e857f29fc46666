//! critpath_fast - strongly connected components, condensation,
//! topological ordering and DAG shortest / critical paths.
//!
//! Pure in-memory graph algorithms. No I/O, no global state: every
//! algorithm takes the graph by reference and a caller-owned `Metrics`.
//!
//! ```
//! use critpath_fast::{run_pipeline, Graph};
//!
//! let graph = Graph::from_edges(4, &[(0, 1, 3), (0, 2, 1), (1, 3, 2), (2, 3, 5)]).unwrap();
//! let report = run_pipeline(&graph, 0, 3).unwrap();
//! assert_eq!(report.shortest.distance, Some(5));
//! assert_eq!(report.longest.distance, Some(6));
//! ```

pub mod dag_path;
mod errors;
pub mod generator;
pub mod graph;
pub mod metrics;
pub mod pipeline;
pub mod scc;
pub mod topo;

pub use dag_path::{DagPathSolver, PathMode};
pub use errors::GraphError;
pub use graph::{Edge, Graph};
pub use metrics::Metrics;
pub use pipeline::{run_pipeline, PathResult, PipelineReport};
pub use scc::{find_sccs, SccResult};
pub use topo::topological_sort;
