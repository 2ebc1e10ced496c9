use std::path::PathBuf;

use clap::Parser;
use indset_common::{Config, DEFAULT_SPLIT_DEPTH, FanOut};

use crate::load::GraphFormat;

/// Maximum independent set solver for small graphs
#[derive(Parser, Debug)]
#[command(name = "indset")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the graph file
    #[arg(short = 'g', long)]
    pub graph: PathBuf,

    /// Format of the graph file
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: GraphFormat,

    /// Only report the independence number
    #[arg(short = 'c', long, default_value_t = false, conflicts_with = "stats")]
    pub count_only: bool,

    /// Number of worker threads (default: hardware parallelism)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
    /// Run the whole search on the main thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
    /// How the search tree is split across workers
    #[arg(long, value_enum, default_value = "first-branch")]
    pub fan_out: FanOutArg,
    /// Include/exclude levels forked onto the pool (first-branch only)
    #[arg(long, default_value_t = DEFAULT_SPLIT_DEPTH)]
    pub split_depth: usize,

    /// Print search statistics
    #[arg(short = 's', long, default_value_t = false)]
    pub stats: bool,
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> Config {
        let builder = Config::builder()
            .parallel(!self.sequential)
            .fan_out(self.fan_out.into())
            .split_depth(self.split_depth);

        match self.threads {
            Some(threads) => builder.num_threads(threads).build(),
            None => builder.build(),
        }
    }
}

/// Command-line argument wrapper for FanOut
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FanOutArg {
    /// Fork the first include/exclude decisions of a single search
    #[value(name = "first-branch")]
    FirstBranch,
    /// One search per start vertex
    #[value(name = "every-start-index")]
    EveryStartIndex,
}

impl From<FanOutArg> for FanOut {
    fn from(arg: FanOutArg) -> Self {
        match arg {
            FanOutArg::FirstBranch => FanOut::FirstBranch,
            FanOutArg::EveryStartIndex => FanOut::EveryStartIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_default_config() {
        let args = Args::try_parse_from(["indset", "--graph", "g.json"]).unwrap();
        assert_eq!(args.format, GraphFormat::Json);
        assert_eq!(args.to_config(), Config::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let args = Args::try_parse_from([
            "indset",
            "-g",
            "g.txt",
            "--format",
            "matrix",
            "--threads",
            "2",
            "--fan-out",
            "every-start-index",
            "--split-depth",
            "6",
        ])
        .unwrap();

        let config = args.to_config();
        assert_eq!(args.format, GraphFormat::Matrix);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.fan_out, FanOut::EveryStartIndex);
        assert_eq!(config.split_depth, 6);
        assert!(config.parallel);
    }

    #[test]
    fn sequential_flag_disables_pool() {
        let args = Args::try_parse_from(["indset", "-g", "g.json", "--sequential"]).unwrap();
        assert!(!args.to_config().parallel);
    }

    #[test]
    fn count_only_and_stats_conflict() {
        let err = Args::try_parse_from(["indset", "-g", "g.json", "-c", "-s"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let args = Args::try_parse_from(["indset", "-g", "g.json", "-c"]).unwrap();
        assert!(args.count_only && !args.stats);
    }

    #[test]
    fn graph_is_required() {
        assert!(Args::try_parse_from(["indset"]).is_err());
    }
}
