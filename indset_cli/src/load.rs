//! Reading graphs from disk.

use std::path::{Path, PathBuf};

use indset_solver::{AdjacencyMatrix, GraphError, LabeledGraph};
use thiserror::Error;

/// On-disk graph formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    /// `{"vertices": [...], "edges": [[a, b], ...]}`
    #[value(name = "json")]
    Json,
    /// One row of `0`/`1` entries per line; vertices are named by index
    #[value(name = "matrix")]
    Matrix,
}

/// Errors that can occur while loading a graph file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file contents are not a valid graph.
    #[error("Invalid graph in {}: {source}", path.display())]
    Graph { path: PathBuf, source: GraphError },
}

/// Load a graph, naming matrix vertices by their index.
pub fn load_graph(path: &Path, format: GraphFormat) -> Result<LabeledGraph, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = match format {
        GraphFormat::Json => LabeledGraph::from_json(&text),
        GraphFormat::Matrix => text
            .parse::<AdjacencyMatrix>()
            .map(|adj| LabeledGraph::from_matrix(&adj)),
    };

    graph.map_err(|source| LoadError::Graph {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn loads_json_graph() {
        let file = write_temp(r#"{"vertices": ["a", "b", "c"], "edges": [["a", "b"]]}"#);
        let graph = load_graph(file.path(), GraphFormat::Json).unwrap();
        assert_eq!(graph.vertices(), &["a", "b", "c"]);
        assert_eq!(graph.adjacency().unwrap().edge_count(), 1);
    }

    #[test]
    fn loads_matrix_graph() {
        let file = write_temp("011\n100\n100\n");
        let graph = load_graph(file.path(), GraphFormat::Matrix).unwrap();
        assert_eq!(graph.vertices(), &["0", "1", "2"]);
        assert_eq!(graph.adjacency().unwrap().edge_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("missing.json"), GraphFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn asymmetric_matrix_is_graph_error() {
        let file = write_temp("01\n00\n");
        let err = load_graph(file.path(), GraphFormat::Matrix).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph {
                source: GraphError::NotSymmetric { .. },
                ..
            }
        ));
    }
}
