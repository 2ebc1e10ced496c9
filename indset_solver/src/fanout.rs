//! Splitting the search tree into tasks and reducing their results.
//!
//! Every task runs a sequential [`Backtracker`] on its own candidate set and
//! returns its local best by value. Results are combined only after the
//! tasks that produced them have joined, always in search-tree order, so the
//! output does not depend on how tasks were scheduled or how many workers
//! the pool has.

use indset_common::{Config, FanOut};
use rayon::prelude::*;

use crate::candidate::CandidateSet;
use crate::engine::{Backtracker, LocalBest};
use crate::graph::AdjacencyMatrix;
use crate::stats::SearchStats;
use crate::vertex::VertexIdx;

/// One search over one graph under one configuration.
pub struct SearchCore<'g, 'cfg> {
    pub(crate) adj: &'g AdjacencyMatrix,
    pub(crate) config: &'cfg Config,
    pub(crate) stats: &'cfg SearchStats,
}

impl<'g, 'cfg> SearchCore<'g, 'cfg> {
    /// Creates a search over `adj`.
    pub const fn new(adj: &'g AdjacencyMatrix, config: &'cfg Config, stats: &'cfg SearchStats) -> Self {
        Self { adj, config, stats }
    }

    /// Run the configured fan-out on the current rayon pool.
    pub fn run<B: LocalBest>(&self) -> B {
        tracing::info!(
            "starting search: vertices: {}, edges: {}, fan-out: {}, parallel: {}",
            self.adj.len(),
            self.adj.edge_count(),
            self.config.fan_out,
            self.config.parallel
        );

        let best: B = match self.config.fan_out {
            FanOut::FirstBranch => {
                let depth = if self.config.parallel {
                    self.config.split_depth
                } else {
                    0
                };
                self.split(0, depth, CandidateSet::with_capacity(self.adj.len()))
            }
            FanOut::EveryStartIndex => self.every_start_index(),
        };

        let stats = self.stats.snapshot();
        tracing::info!(
            "search complete: independence number {}, {} branches, {} leaves, {} tasks",
            best.size(),
            stats.branches,
            stats.leaves,
            stats.tasks
        );
        best
    }

    /// Sequential engine run from `start`, recorded as one task.
    fn task<B: LocalBest>(&self, start: usize, mut candidate: CandidateSet) -> B {
        let mut engine = Backtracker::new(self.adj);
        let best = engine.search::<B>(start, &mut candidate);
        let counter = engine.counter();

        tracing::debug!(
            "task from vertex {} with {} included: best {}, {} branches",
            start,
            candidate.len(),
            best.size(),
            counter.branches
        );

        self.stats.record_task(counter);
        best
    }

    /// Fork the include/exclude decision for the next `depth` vertices.
    ///
    /// A vertex that cannot be included does not fork and does not use up
    /// depth.
    fn split<B: LocalBest>(&self, start: usize, depth: usize, candidate: CandidateSet) -> B {
        if depth == 0 || start == self.adj.len() {
            return self.task(start, candidate);
        }

        self.stats.inc_branches(1);
        let v = VertexIdx::from(start);

        if !self.adj.is_safe(v, candidate.as_slice()) {
            return self.split(start + 1, depth, candidate);
        }

        let mut with_v = candidate.clone();
        with_v.push(v);

        tracing::trace!("forking on {} at depth {}", v, depth);
        let (excluded, included) = rayon::join(
            || self.split::<B>(start + 1, depth - 1, candidate),
            || self.split::<B>(start + 1, depth - 1, with_v),
        );

        excluded.prefer(included)
    }

    /// One search per start index, reduced in index order after the join.
    fn every_start_index<B: LocalBest>(&self) -> B {
        let n = self.adj.len();
        let per_start = |i: usize| self.task::<B>(i, CandidateSet::with_capacity(n));

        let results: Vec<B> = if self.config.parallel {
            (0..n).into_par_iter().map(per_start).collect()
        } else {
            (0..n).map(per_start).collect()
        };

        results
            .into_iter()
            .reduce(B::prefer)
            .unwrap_or_else(|| B::from_leaf(&CandidateSet::new()))
    }
}
