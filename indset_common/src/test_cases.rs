//! Bundled graph cases with known independence numbers.
//!
//! Shared by the solver's integration tests and the CLI tests so every
//! layer checks against the same expectations.

/// A small named graph and its expected search results.
#[derive(Debug, Clone, Copy)]
pub struct GraphCase {
    /// The name of the test case.
    pub name: &'static str,
    /// Number of vertices; vertices are `0..vertices`.
    pub vertices: usize,
    /// Undirected edges as index pairs.
    pub edges: &'static [(usize, usize)],
    /// The independence number of the graph.
    pub expected_size: usize,
    /// The set the exclude-first search keeps among all maximum sets.
    pub expected_set: &'static [usize],
}

impl GraphCase {
    /// Dense 0/1 rows for the case, symmetric with an empty diagonal.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        let mut rows = vec![vec![false; self.vertices]; self.vertices];
        for &(a, b) in self.edges {
            rows[a][b] = true;
            rows[b][a] = true;
        }
        rows
    }
}

// #####################
// GRAPHS
// #####################
const PATH_4: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3)];

const COMPLETE_4: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

const CYCLE_5: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];

const STAR_6: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)];

const TWO_TRIANGLES: &[(usize, usize)] = &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)];

const K_3_3: &[(usize, usize)] = &[
    (0, 3),
    (0, 4),
    (0, 5),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 3),
    (2, 4),
    (2, 5),
];

const CUBE: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (0, 4),
    (1, 3),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

const PETERSEN: &[(usize, usize)] = &[
    // outer cycle
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 0),
    // spokes
    (0, 5),
    (1, 6),
    (2, 7),
    (3, 8),
    (4, 9),
    // inner pentagram
    (5, 7),
    (7, 9),
    (9, 6),
    (6, 8),
    (8, 5),
];

// #####################
// TEST CASES
// #####################
/// Every bundled case.
pub static ALL_TEST_CASES: &[GraphCase] = &[
    GraphCase {
        name: "empty",
        vertices: 0,
        edges: &[],
        expected_size: 0,
        expected_set: &[],
    },
    GraphCase {
        name: "single_vertex",
        vertices: 1,
        edges: &[],
        expected_size: 1,
        expected_set: &[0],
    },
    GraphCase {
        name: "edgeless_5",
        vertices: 5,
        edges: &[],
        expected_size: 5,
        expected_set: &[0, 1, 2, 3, 4],
    },
    GraphCase {
        name: "path_4",
        vertices: 4,
        edges: PATH_4,
        expected_size: 2,
        expected_set: &[1, 3],
    },
    GraphCase {
        name: "complete_4",
        vertices: 4,
        edges: COMPLETE_4,
        expected_size: 1,
        expected_set: &[3],
    },
    GraphCase {
        name: "cycle_5",
        vertices: 5,
        edges: CYCLE_5,
        expected_size: 2,
        expected_set: &[2, 4],
    },
    GraphCase {
        name: "star_6",
        vertices: 6,
        edges: STAR_6,
        expected_size: 5,
        expected_set: &[1, 2, 3, 4, 5],
    },
    GraphCase {
        name: "two_triangles",
        vertices: 6,
        edges: TWO_TRIANGLES,
        expected_size: 2,
        expected_set: &[2, 5],
    },
    GraphCase {
        name: "complete_bipartite_3_3",
        vertices: 6,
        edges: K_3_3,
        expected_size: 3,
        expected_set: &[3, 4, 5],
    },
    GraphCase {
        name: "cube",
        vertices: 8,
        edges: CUBE,
        expected_size: 4,
        expected_set: &[1, 2, 4, 7],
    },
    GraphCase {
        name: "petersen",
        vertices: 10,
        edges: PETERSEN,
        expected_size: 4,
        expected_set: &[2, 4, 5, 6],
    },
];

/// Look up a bundled case by name.
pub fn test_case(name: &str) -> Option<&'static GraphCase> {
    ALL_TEST_CASES.iter().find(|case| case.name == name)
}
