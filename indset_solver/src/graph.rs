//! Adjacency-matrix graph model.
//!
//! Vertices are `0..n`. The matrix is square and symmetric; the diagonal
//! carries no meaning and is cleared on construction, so a vertex is never
//! adjacent to itself.

use std::str::FromStr;

use contracts::*;
use itertools::Itertools;

use crate::error::GraphError;
use crate::vertex::{MAX_VERTEX, VertexIdx};

/// Largest vertex count a matrix can be built with.
const MAX_LEN: usize = MAX_VERTEX.saturating_add(1);

fn check_len(len: usize) -> Result<(), GraphError> {
    if len > MAX_LEN {
        return Err(GraphError::TooManyVertices { len, max: MAX_LEN });
    }
    Ok(())
}

/// Immutable square boolean adjacency matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Number of vertices.
    len: usize,
    /// Row-major `len * len` cells.
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Graph on `len` vertices with no edges.
    pub fn edgeless(len: usize) -> Self {
        Self {
            len,
            cells: vec![false; len * len],
        }
    }

    /// Graph on `len` vertices where every pair is adjacent.
    pub fn complete(len: usize) -> Self {
        let mut cells = vec![true; len * len];
        for v in 0..len {
            cells[v * len + v] = false;
        }
        Self { len, cells }
    }

    /// Build from dense rows, rejecting non-square or asymmetric input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GraphError> {
        let len = rows.len();
        check_len(len)?;
        if let Some((row, entries)) = rows.iter().enumerate().find(|(_, r)| r.len() != len) {
            return Err(GraphError::NonSquare {
                row,
                expected: len,
                got: entries.len(),
            });
        }

        let mut cells = Vec::with_capacity(len * len);
        for (row, entries) in rows.iter().enumerate() {
            for (col, &cell) in entries.iter().enumerate() {
                if row != col && cell != rows[col][row] {
                    return Err(GraphError::NotSymmetric { row, col });
                }
                cells.push(cell && row != col);
            }
        }

        Ok(Self { len, cells })
    }

    /// Build from an undirected edge list. Self-loops are ignored.
    pub fn from_edges<I>(len: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        check_len(len)?;
        let mut graph = Self::edgeless(len);
        for (a, b) in edges {
            for vertex in [a, b] {
                if vertex >= len {
                    return Err(GraphError::VertexOutOfRange { vertex, len });
                }
            }
            if a != b {
                graph.cells[a * len + b] = true;
                graph.cells[b * len + a] = true;
            }
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for the graph with no vertices.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexIdx> + use<> {
        (0..self.len).map(VertexIdx::from)
    }

    /// True iff `a` and `b` share an edge.
    #[debug_requires(a.as_usize() < self.len && b.as_usize() < self.len, "vertex out of range")]
    #[inline]
    pub fn is_adjacent(&self, a: VertexIdx, b: VertexIdx) -> bool {
        self.cells[a.as_usize() * self.len + b.as_usize()]
    }

    /// True iff no vertex of `candidate` is adjacent to `v`.
    ///
    /// Runs in `O(|candidate|)` and never compares `v` with itself unless the
    /// caller put it in `candidate`.
    #[debug_requires(v.as_usize() < self.len, "vertex out of range")]
    #[inline]
    pub fn is_safe(&self, v: VertexIdx, candidate: &[VertexIdx]) -> bool {
        let row = &self.cells[v.as_usize() * self.len..(v.as_usize() + 1) * self.len];
        candidate.iter().all(|u| !row[u.as_usize()])
    }

    /// True iff no two vertices of `set` are adjacent.
    pub fn is_independent(&self, set: &[VertexIdx]) -> bool {
        set.iter()
            .tuple_combinations()
            .all(|(&a, &b)| !self.is_adjacent(a, b))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count() / 2
    }

    /// Copy of the matrix as dense rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.len.max(1)).map(<[bool]>::to_vec).collect()
    }
}

/// Parses a 0/1 matrix, one row per line. Blank lines and whitespace between
/// entries are ignored; empty text is the graph with no vertices.
impl FromStr for AdjacencyMatrix {
    type Err = GraphError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '0' => Ok(false),
                        '1' => Ok(true),
                        _ => Err(GraphError::InvalidEntry { row, col, ch }),
                    })
                    .collect::<Result<Vec<bool>, GraphError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}
