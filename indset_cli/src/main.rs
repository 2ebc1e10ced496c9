//! indset command-line tool
//!
//! Loads a graph from disk, finds a maximum independent set and prints the
//! independence number together with the names of the chosen vertices.

#[global_allocator]
/// Global allocator using jemalloc for better performance in parallel workloads.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod load;
mod report;

use clap::Parser;
use indset_solver::Solver;
use tracing::info;

use args::Args;

/// Executes the solver.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads the graph and builds its adjacency matrix
/// 4. Runs the search
/// 5. Prints the result
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    info!("Loading graph: {}", args.graph.display());
    let graph = load::load_graph(&args.graph, args.format)?;
    let adj = graph.adjacency()?;
    let solver = Solver::new(config)?;

    if args.count_only {
        println!("independence number: {}", solver.count(&adj));
        return Ok(());
    }

    let solution = solver.solve(&adj);
    print!("{}", report::render_solution(&graph, &solution, args.stats));

    Ok(())
}
