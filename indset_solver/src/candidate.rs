//! The subset under construction during the backtracking search.

use contracts::*;

use crate::vertex::VertexIdx;

/// Ordered stack of vertices currently included in the subset being built.
///
/// The engine pushes a vertex before descending into its include branch and
/// pops it on the way back, so a set handed to a search is returned with the
/// same contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    /// Vertices in inclusion order.
    stack: Vec<VertexIdx>,
}

impl CandidateSet {
    /// Checks that vertices are strictly increasing.
    ///
    /// The engine only ever includes vertices in index order.
    pub fn is_ordered(&self) -> bool {
        self.stack.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Creates an empty candidate set.
    #[ensures(ret.is_empty())]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Creates an empty candidate set able to hold `capacity` vertices.
    #[ensures(ret.is_empty())]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Include `v` as the newest member.
    #[debug_requires(self.stack.last().is_none_or(|&last| last < v))]
    #[debug_ensures(self.len() == old(self.len()) + 1)]
    #[debug_ensures(self.is_ordered())]
    pub fn push(&mut self, v: VertexIdx) {
        self.stack.push(v);
    }

    /// Remove the newest member.
    #[debug_ensures(self.len() + usize::from(ret.is_some()) == old(self.len()))]
    pub fn pop(&mut self) -> Option<VertexIdx> {
        self.stack.pop()
    }

    /// Number of included vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True if nothing is included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Included vertices in inclusion order.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexIdx] {
        &self.stack
    }

    /// Owned copy of the included vertices.
    #[must_use]
    pub fn to_vec(&self) -> Vec<VertexIdx> {
        self.stack.clone()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    #[derive(Clone, Debug)]
    struct ArbitraryStackOp {
        step: u32,
        is_pop: bool,
    }

    impl Arbitrary for ArbitraryStackOp {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                step: u32::arbitrary(g) % 4 + 1,
                is_pop: bool::arbitrary(g),
            }
        }
    }

    quickcheck! {
        fn prop_push_pop_keeps_order(ops: Vec<ArbitraryStackOp>) -> bool {
            let mut set = CandidateSet::new();
            let mut next = 0u32;

            for op in ops {
                if op.is_pop {
                    if let Some(v) = set.pop() {
                        next = v.as_usize() as u32;
                    }
                } else {
                    set.push(VertexIdx::new(next));
                    next += op.step;
                }

                if !set.is_ordered() {
                    return false;
                }
            }
            true
        }
    }
}
