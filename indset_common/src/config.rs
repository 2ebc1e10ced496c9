//! Configuration for the independent-set search.
//!
//! The solver is parameterized by how work is spread across the worker pool:
//! - parallel: whether the rayon pool is used at all.
//! - num_threads: pool size override (hardware parallelism when unset).
//! - fan_out: how the search tree is split into tasks.
//! - split_depth: how many include/exclude levels are forked under
//!   [`FanOut::FirstBranch`].
//!
//! Quick examples
//!
//! Default (parallel, first-branch fan-out):
//! ```
//! use indset_common::{Config, FanOut};
//! let cfg = Config::default();
//! assert_eq!(cfg.fan_out, FanOut::FirstBranch);
//! ```
//!
//! Single-threaded, one search per start index:
//! ```
//! use indset_common::Config;
//! let cfg = Config::builder().sequential().every_start_index().build();
//! assert!(!cfg.parallel);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of include/exclude levels forked onto the pool.
pub const DEFAULT_SPLIT_DEPTH: usize = 4;

/// Global search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run tasks on the rayon pool (true) or on the calling thread (false).
    pub parallel: bool,
    /// Worker count; `None` sizes the pool to the host's hardware parallelism.
    pub num_threads: Option<usize>,
    /// How the search is split into tasks.
    pub fan_out: FanOut,
    /// Number of branching levels forked under [`FanOut::FirstBranch`].
    pub split_depth: usize,
}

impl Config {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Worker count the search will actually see.
    ///
    /// Sequential configurations always report one worker. A pool size of
    /// zero means hardware parallelism, as it does for rayon.
    pub fn effective_threads(&self) -> usize {
        if !self.parallel {
            return 1;
        }
        match self.num_threads {
            Some(threads) if threads > 0 => threads,
            _ => std::thread::available_parallelism()
                .map(std::num::NonZero::get)
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: None,
            fan_out: FanOut::FirstBranch,
            split_depth: DEFAULT_SPLIT_DEPTH,
        }
    }
}

/// How the top of the search tree is distributed across workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanOut {
    /// One search rooted at vertex 0, with its first `split_depth`
    /// include/exclude decisions forked as independent tasks.
    #[default]
    FirstBranch,
    /// One full search per start index `i` in `0..n`, each on a fresh
    /// candidate set, reduced after all workers join.
    ///
    /// Searches for `i > 0` revisit subsets already covered from `i = 0`;
    /// this mode exists for parity with the per-start-index decomposition.
    EveryStartIndex,
}

impl std::fmt::Display for FanOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstBranch => write!(f, "first-branch"),
            Self::EveryStartIndex => write!(f, "every-start-index"),
        }
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable use of the worker pool.
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Run everything on the calling thread.
    pub const fn sequential(self) -> Self {
        self.parallel(false)
    }

    /// Fix the worker pool size.
    pub const fn num_threads(mut self, threads: usize) -> Self {
        self.config.num_threads = Some(threads);
        self
    }

    /// Select the fan-out policy.
    pub const fn fan_out(mut self, fan_out: FanOut) -> Self {
        self.config.fan_out = fan_out;
        self
    }

    /// Shorthand for [`FanOut::FirstBranch`].
    pub const fn first_branch(self) -> Self {
        self.fan_out(FanOut::FirstBranch)
    }

    /// Shorthand for [`FanOut::EveryStartIndex`].
    pub const fn every_start_index(self) -> Self {
        self.fan_out(FanOut::EveryStartIndex)
    }

    /// Number of include/exclude levels forked onto the pool.
    pub const fn split_depth(mut self, depth: usize) -> Self {
        self.config.split_depth = depth;
        self
    }

    /// Finish building.
    pub fn build(self) -> Config {
        self.config
    }
}
