use std::fmt::Write;

use indset_solver::{LabeledGraph, Solution};

/// Human-readable summary of a solution.
pub fn render_solution(graph: &LabeledGraph, solution: &Solution, with_stats: bool) -> String {
    let labels = graph.labels_of(&solution.vertices);
    let mut out = String::new();

    let _ = writeln!(out, "independence number: {}", solution.independence_number());
    if labels.is_empty() {
        let _ = writeln!(out, "independent set: (empty)");
    } else {
        let _ = writeln!(out, "independent set: {}", labels.join(", "));
    }

    if with_stats {
        let stats = solution.stats;
        let _ = writeln!(
            out,
            "search: {} branches, {} leaves, {} tasks",
            stats.branches, stats.leaves, stats.tasks
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indset_common::test_case;
    use indset_solver::{AdjacencyMatrix, Solver};

    #[test]
    fn renders_labels_of_the_set() {
        let mut graph = LabeledGraph::new();
        for name in ["left", "mid", "right"] {
            graph.add_vertex(name).unwrap();
        }
        graph.add_edge("left", "mid").unwrap();
        graph.add_edge("mid", "right").unwrap();

        let solution = Solver::default().solve(&graph.adjacency().unwrap());
        assert_eq!(
            render_solution(&graph, &solution, false),
            "independence number: 2\nindependent set: left, right\n"
        );
    }

    #[test]
    fn renders_stats_when_asked() {
        let case = test_case("path_4").unwrap();
        let adj = AdjacencyMatrix::from_rows(case.rows()).unwrap();
        let graph = LabeledGraph::from_matrix(&adj);
        let solver = Solver::new(indset_common::Config::builder().sequential().build()).unwrap();

        let text = render_solution(&graph, &solver.solve(&adj), true);
        assert_eq!(
            text,
            "independence number: 2\nindependent set: 1, 3\nsearch: 19 branches, 8 leaves, 1 tasks\n"
        );
    }

    #[test]
    fn renders_empty_graph() {
        let graph = LabeledGraph::new();
        let solution = Solver::default().solve(&graph.adjacency().unwrap());
        assert!(render_solution(&graph, &solution, false).contains("(empty)"));
    }
}
