//! Entry point for maximum independent set searches.

use indset_common::Config;

use crate::engine::LocalBest;
use crate::error::SolverError;
use crate::fanout::SearchCore;
use crate::graph::AdjacencyMatrix;
use crate::stats::{SearchStats, StatsSnapshot};
use crate::vertex::VertexIdx;

/// A maximum independent set together with how it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// One maximum independent set, in ascending vertex order.
    pub vertices: Vec<VertexIdx>,
    /// Counters collected during the search.
    pub stats: StatsSnapshot,
}

impl Solution {
    /// Size of the set, i.e. the independence number of the graph.
    pub fn independence_number(&self) -> usize {
        self.vertices.len()
    }
}

/// Runs searches under a fixed configuration.
///
/// With `num_threads` set, the solver owns a dedicated rayon pool of that
/// size; otherwise searches run on the global pool, which rayon sizes to the
/// host's hardware parallelism.
pub struct Solver {
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Solver {
    /// Create a solver, building its worker pool if one was requested.
    pub fn new(config: Config) -> Result<Self, SolverError> {
        let pool = match config.num_threads {
            Some(threads) if config.parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("indset-worker-{i}"))
                    .build()?,
            ),
            _ => None,
        };

        tracing::debug!(
            "solver ready: {} worker(s), fan-out {}",
            config.effective_threads(),
            config.fan_out
        );
        Ok(Self { config, pool })
    }

    /// The configuration this solver runs with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The independence number of `adj`.
    pub fn count(&self, adj: &AdjacencyMatrix) -> usize {
        self.search::<usize>(adj).0
    }

    /// One maximum independent set of `adj`.
    pub fn set(&self, adj: &AdjacencyMatrix) -> Vec<VertexIdx> {
        self.search::<Vec<VertexIdx>>(adj).0
    }

    /// One maximum independent set of `adj` with search statistics.
    pub fn solve(&self, adj: &AdjacencyMatrix) -> Solution {
        let (vertices, stats) = self.search::<Vec<VertexIdx>>(adj);
        Solution { vertices, stats }
    }

    fn search<B: LocalBest>(&self, adj: &AdjacencyMatrix) -> (B, StatsSnapshot) {
        let stats = SearchStats::new();
        let run = || SearchCore::new(adj, &self.config, &stats).run::<B>();

        let best = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };
        (best, stats.snapshot())
    }
}

impl Default for Solver {
    /// Parallel first-branch search on the global pool.
    fn default() -> Self {
        Self {
            config: Config::default(),
            pool: None,
        }
    }
}

/// The independence number of `adj`, using the default configuration.
pub fn solve_count(adj: &AdjacencyMatrix) -> usize {
    Solver::default().count(adj)
}

/// One maximum independent set of `adj`, using the default configuration.
///
/// Among sets of equal size the search keeps the first one it reaches,
/// which is the one that leaves out the earliest vertices.
pub fn solve_set(adj: &AdjacencyMatrix) -> Vec<VertexIdx> {
    Solver::default().set(adj)
}
