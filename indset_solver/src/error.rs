//! Error types for graph construction and solver setup.
//!
//! Malformed input is rejected once, when an [`AdjacencyMatrix`] is built
//! or a [`LabeledGraph`] is turned into one. The search itself is total over
//! a validated matrix and has no error path.
//!
//! [`AdjacencyMatrix`]: crate::AdjacencyMatrix
//! [`LabeledGraph`]: crate::LabeledGraph

use thiserror::Error;

/// Errors raised while building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A row does not have one entry per vertex.
    #[error("Row {row} has {got} entries, expected {expected}")]
    NonSquare {
        /// Offending row.
        row: usize,
        /// Number of rows, which every row must match.
        expected: usize,
        /// Entries found in the row.
        got: usize,
    },

    /// `adj[row][col]` and `adj[col][row]` disagree.
    #[error("Adjacency is not symmetric at ({row}, {col})")]
    NotSymmetric {
        /// Row of the first disagreeing entry.
        row: usize,
        /// Column of the first disagreeing entry.
        col: usize,
    },

    /// An edge endpoint is not a vertex of the graph.
    #[error("Vertex {vertex} is out of range for a graph with {len} vertices")]
    VertexOutOfRange {
        /// The endpoint as given.
        vertex: usize,
        /// Number of vertices in the graph.
        len: usize,
    },

    /// The graph has more vertices than a [`VertexIdx`](crate::VertexIdx)
    /// can address.
    #[error("Graph has {len} vertices, at most {max} are supported")]
    TooManyVertices {
        /// Requested vertex count.
        len: usize,
        /// Largest supported vertex count.
        max: usize,
    },

    /// A matrix text entry is neither `0` nor `1`.
    #[error("Invalid matrix entry {ch:?} at ({row}, {col})")]
    InvalidEntry {
        /// Line of the entry, blank lines skipped.
        row: usize,
        /// Position of the entry within its line, whitespace skipped.
        col: usize,
        /// The character found.
        ch: char,
    },

    /// An edge names a vertex that was never added.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// The same vertex name was added twice.
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    /// A labeled graph document could not be parsed.
    #[error("Failed to parse graph: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an unknown vertex error.
    pub fn unknown_vertex(name: impl Into<String>) -> Self {
        Self::UnknownVertex(name.into())
    }

    /// Create a duplicate vertex error.
    pub fn duplicate_vertex(name: impl Into<String>) -> Self {
        Self::DuplicateVertex(name.into())
    }
}

/// Errors raised while setting up a solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The dedicated worker pool could not be created.
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
