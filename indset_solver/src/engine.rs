//! Exhaustive exclude/include backtracking over vertex indices.
//!
//! From a start index `s` the engine enumerates every subset of `[s, n)`
//! that keeps the candidate set independent. At each vertex it first
//! explores the branch that leaves the vertex out, then, if the vertex is
//! not adjacent to anything already included, the branch that takes it.
//! There is no bounding: every safe branch is visited.

use contracts::*;

use crate::candidate::CandidateSet;
use crate::graph::AdjacencyMatrix;
use crate::stats::BranchCounter;
use crate::vertex::VertexIdx;

/// A best-so-far value the engine can build at a leaf and combine upwards.
///
/// Implemented for `usize` (the count form) and `Vec<VertexIdx>` (the set
/// form).
pub trait LocalBest: Send + Sized {
    /// Result for the complete subset `candidate`.
    fn from_leaf(candidate: &CandidateSet) -> Self;

    /// Size of the independent set this result stands for.
    fn size(&self) -> usize;

    /// Combine two results in search order.
    ///
    /// `later` replaces `self` only when strictly larger, so the first
    /// maximum found is the one kept.
    fn prefer(self, later: Self) -> Self {
        if later.size() > self.size() {
            later
        } else {
            self
        }
    }
}

impl LocalBest for usize {
    fn from_leaf(candidate: &CandidateSet) -> Self {
        candidate.len()
    }

    fn size(&self) -> usize {
        *self
    }

    fn prefer(self, later: Self) -> Self {
        self.max(later)
    }
}

impl LocalBest for Vec<VertexIdx> {
    fn from_leaf(candidate: &CandidateSet) -> Self {
        candidate.to_vec()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Sequential search over one subtree.
pub struct Backtracker<'g> {
    adj: &'g AdjacencyMatrix,
    counter: BranchCounter,
}

impl<'g> Backtracker<'g> {
    /// Creates an engine over `adj`.
    pub fn new(adj: &'g AdjacencyMatrix) -> Self {
        Self {
            adj,
            counter: BranchCounter::default(),
        }
    }

    /// Nodes and leaves visited so far.
    pub const fn counter(&self) -> BranchCounter {
        self.counter
    }

    /// Best result over all independent extensions of `candidate` by
    /// vertices in `[start, n)`.
    ///
    /// `candidate` is restored before returning.
    #[debug_requires(start <= self.adj.len())]
    #[debug_requires(self.adj.is_independent(candidate.as_slice()))]
    #[debug_ensures(candidate.len() == old(candidate.len()))]
    pub fn search<B: LocalBest>(&mut self, start: usize, candidate: &mut CandidateSet) -> B {
        self.descend(start, candidate)
    }

    /// Count form: size of the largest independent extension.
    pub fn largest_size(&mut self, start: usize, candidate: &mut CandidateSet) -> usize {
        self.search(start, candidate)
    }

    /// Set form: the first largest independent extension in search order.
    pub fn largest_set(&mut self, start: usize, candidate: &mut CandidateSet) -> Vec<VertexIdx> {
        self.search(start, candidate)
    }

    fn descend<B: LocalBest>(&mut self, start: usize, candidate: &mut CandidateSet) -> B {
        self.counter.branches += 1;

        if start == self.adj.len() {
            self.counter.leaves += 1;
            return B::from_leaf(candidate);
        }

        let v = VertexIdx::from(start);
        let excluded = self.descend::<B>(start + 1, candidate);

        if !self.adj.is_safe(v, candidate.as_slice()) {
            return excluded;
        }

        candidate.push(v);
        let included = self.descend::<B>(start + 1, candidate);
        candidate.pop();

        excluded.prefer(included)
    }
}
