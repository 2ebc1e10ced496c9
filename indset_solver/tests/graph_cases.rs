//! Bundled graph cases run through every solver configuration.

use rstest::rstest;
use std::sync::OnceLock;

use indset_common::{ALL_TEST_CASES, Config, GraphCase, test_case};
use indset_solver::{AdjacencyMatrix, Solver, VertexIdx, solve_count, solve_set};

lazy_static::lazy_static! {
    static ref SINGLE_THREAD: Solver = Solver::new(Config::builder().num_threads(1).build())
        .expect("Failed to build single-thread solver");
    static ref FOUR_THREADS: Solver = Solver::new(Config::builder().num_threads(4).build())
        .expect("Failed to build four-thread solver");
    static ref SEQUENTIAL: Solver = Solver::new(Config::builder().sequential().build())
        .expect("Failed to build sequential solver");
    static ref EVERY_START: Solver = Solver::new(Config::builder().every_start_index().num_threads(4).build())
        .expect("Failed to build every-start-index solver");
}

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn matrix(case: &GraphCase) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(case.rows())
        .unwrap_or_else(|e| panic!("Case '{}' has a malformed matrix: {e}", case.name))
}

fn ids(raw: &[usize]) -> Vec<VertexIdx> {
    raw.iter().copied().map(VertexIdx::from).collect()
}

#[rstest]
#[case("empty")]
#[case("single_vertex")]
#[case("edgeless_5")]
#[case("path_4")]
#[case("complete_4")]
#[case("cycle_5")]
#[case("star_6")]
#[case("two_triangles")]
#[case("complete_bipartite_3_3")]
#[case("cube")]
#[case("petersen")]
fn bundled_case(#[case] name: &str) {
    init_test_logger();
    let case = test_case(name).expect("bundled case should exist");
    let adj = matrix(case);
    let expected = ids(case.expected_set);

    for (label, solver) in [
        ("single-thread", &*SINGLE_THREAD),
        ("four-threads", &*FOUR_THREADS),
        ("sequential", &*SEQUENTIAL),
        ("every-start-index", &*EVERY_START),
    ] {
        assert_eq!(
            solver.count(&adj),
            case.expected_size,
            "Case '{}' with {} solver: wrong independence number",
            case.name,
            label
        );
        assert_eq!(
            solver.set(&adj),
            expected,
            "Case '{}' with {} solver: wrong set",
            case.name,
            label
        );
    }
}

#[test]
fn every_bundled_case_is_listed() {
    // Keep the rstest table above in sync with the bundled cases.
    assert_eq!(ALL_TEST_CASES.len(), 11);
}

#[test]
fn edgeless_graphs_take_every_vertex() {
    for n in 0..=8 {
        let adj = AdjacencyMatrix::edgeless(n);
        assert_eq!(solve_count(&adj), n);
        assert_eq!(solve_set(&adj), ids(&(0..n).collect::<Vec<_>>()));
    }
}

#[test]
fn complete_graphs_have_independence_one() {
    for n in 1..=8 {
        let adj = AdjacencyMatrix::complete(n);
        assert_eq!(solve_count(&adj), 1, "K{n}");
        assert_eq!(solve_set(&adj).len(), 1, "K{n}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let adj = matrix(test_case("petersen").unwrap());
    let first = FOUR_THREADS.solve(&adj);
    for _ in 0..5 {
        assert_eq!(FOUR_THREADS.solve(&adj), first);
    }
}

#[test]
fn every_start_index_does_redundant_work() {
    let adj = matrix(test_case("cube").unwrap());
    let single = SEQUENTIAL.solve(&adj);
    let every = EVERY_START.solve(&adj);

    assert_eq!(single.vertices, every.vertices);
    assert_eq!(every.stats.tasks, 8);
    assert!(every.stats.branches > single.stats.branches);
}
