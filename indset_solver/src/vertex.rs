//! Vertex identifiers.
//!
//! Vertices are the row/column positions `0..n` of an
//! [`AdjacencyMatrix`](crate::AdjacencyMatrix). They are kept as `u32` so
//! candidate stacks and result sets stay compact; a graph with more vertices
//! than that is rejected when it is built.

use contracts::*;
use std::fmt;

/// Largest vertex position a [`VertexIdx`] can represent.
pub const MAX_VERTEX: usize = u32::MAX as usize;

/// Position of a vertex in the adjacency matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIdx {
    /// Row of the vertex.
    row: u32,
}

impl VertexIdx {
    /// Vertex at matrix row `row`.
    #[ensures(ret.row == row)]
    pub const fn new(row: u32) -> Self {
        Self { row }
    }

    /// Matrix row of this vertex.
    #[ensures(ret == self.row as usize)]
    pub const fn as_usize(self) -> usize {
        self.row as usize
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.row)
    }
}

/// Matrix positions come from `0..n` with `n` already bounded by
/// [`MAX_VERTEX`] at graph construction.
impl From<usize> for VertexIdx {
    #[debug_requires(row <= MAX_VERTEX, "vertex position does not fit in u32")]
    #[inline]
    fn from(row: usize) -> Self {
        Self { row: row as u32 }
    }
}

impl From<VertexIdx> for usize {
    #[inline]
    fn from(v: VertexIdx) -> Self {
        v.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_conversions_agree() {
        let v = VertexIdx::from(7usize);
        assert_eq!(v, VertexIdx::new(7));
        assert_eq!(v.as_usize(), 7);
        assert_eq!(usize::from(v), 7);
    }

    #[test]
    fn largest_position_converts_exactly() {
        let v = VertexIdx::from(MAX_VERTEX);
        assert_eq!(v.as_usize(), MAX_VERTEX);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "vertex position does not fit in u32")]
    fn oversized_position_is_rejected() {
        let _ = VertexIdx::from(MAX_VERTEX + 3);
    }

    #[test]
    fn ordering_follows_index() {
        assert!(VertexIdx::new(1) < VertexIdx::new(2));
        assert_eq!(VertexIdx::new(3).to_string(), "v3");
    }
}
