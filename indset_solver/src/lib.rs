//! Exact maximum independent set search for small graphs.
//!
//! The solver enumerates independent subsets with an exclude-first
//! backtracking engine and spreads the top of the search tree across a rayon
//! pool. It answers either with the independence number ([`solve_count`]) or
//! with one maximum independent set ([`solve_set`]).
//!
//! ```
//! use indset_solver::{AdjacencyMatrix, VertexIdx, solve_count, solve_set};
//!
//! // 0 - 1 - 2 - 3
//! let adj = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert_eq!(solve_count(&adj), 2);
//! assert_eq!(solve_set(&adj), vec![VertexIdx::new(1), VertexIdx::new(3)]);
//! ```
//!
//! Work is exponential in the vertex count; there is no pruning beyond the
//! adjacency check.

mod candidate;
mod engine;
mod error;
mod fanout;
mod graph;
mod labeled;
mod solver;
mod stats;
mod vertex;

pub use candidate::CandidateSet;
pub use engine::{Backtracker, LocalBest};
pub use error::{GraphError, SolverError};
pub use fanout::SearchCore;
pub use graph::AdjacencyMatrix;
pub use labeled::LabeledGraph;
pub use solver::{Solution, Solver, solve_count, solve_set};
pub use stats::{BranchCounter, SearchStats, StatsSnapshot};
pub use vertex::{MAX_VERTEX, VertexIdx};

pub use indset_common::{Config, FanOut};

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::{
        AdjacencyMatrix, Config, FanOut, GraphError, LabeledGraph, Solution, Solver, SolverError,
        VertexIdx, solve_count, solve_set,
    };
}
