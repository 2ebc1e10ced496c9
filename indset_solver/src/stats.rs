//! Search counters shared across fan-out tasks.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every task of one search.
///
/// Tasks count into a private [`BranchCounter`] and flush it here once, when
/// they finish, so workers never contend on these atomics inside the engine.
#[derive(Debug, Default)]
pub struct SearchStats {
    branches: AtomicU64,
    leaves: AtomicU64,
    tasks: AtomicU64,
}

/// Point-in-time copy of [`SearchStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Search-tree nodes visited, leaves included.
    pub branches: u64,
    /// Complete subsets evaluated.
    pub leaves: u64,
    /// Sequential engine runs the fan-out produced.
    pub tasks: u64,
}

impl SearchStats {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished engine run.
    pub fn record_task(&self, counter: BranchCounter) {
        self.branches.fetch_add(counter.branches, Ordering::Relaxed);
        self.leaves.fetch_add(counter.leaves, Ordering::Relaxed);
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a node the fan-out visited itself before handing off.
    pub fn inc_branches(&self, by: u64) {
        self.branches.fetch_add(by, Ordering::Relaxed);
    }

    /// Read a snapshot for display/reporting.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            branches: self.branches.load(Ordering::Relaxed),
            leaves: self.leaves.load(Ordering::Relaxed),
            tasks: self.tasks.load(Ordering::Relaxed),
        }
    }
}

/// Per-task counter owned by a single engine run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchCounter {
    /// Engine calls, leaves included.
    pub branches: u64,
    /// Calls that reached the end of the vertex range.
    pub leaves: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_task_accumulates() {
        let stats = SearchStats::new();
        stats.record_task(BranchCounter {
            branches: 5,
            leaves: 3,
        });
        stats.record_task(BranchCounter {
            branches: 2,
            leaves: 1,
        });
        stats.inc_branches(1);

        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                branches: 8,
                leaves: 4,
                tasks: 2
            }
        );
    }

    #[test]
    fn shared_across_threads() {
        let stats = SearchStats::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    stats.record_task(BranchCounter {
                        branches: 10,
                        leaves: 1,
                    })
                });
            }
        });
        assert_eq!(stats.snapshot().branches, 40);
        assert_eq!(stats.snapshot().tasks, 4);
    }
}
