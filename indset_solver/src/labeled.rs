//! Graphs with named vertices.
//!
//! A [`LabeledGraph`] is edited by name and turned into an index-based
//! [`AdjacencyMatrix`] for the search: vertex `i` of the matrix is the
//! `i`-th name in insertion order. Its JSON form is
//!
//! ```json
//! { "vertices": ["a", "b", "c"], "edges": [["a", "b"], ["b", "c"]] }
//! ```

use std::collections::HashMap;

use contracts::*;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::AdjacencyMatrix;
use crate::vertex::VertexIdx;

/// Undirected graph over named vertices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledGraph {
    /// Vertex names in insertion order.
    vertices: Vec<String>,
    /// Edges between vertex names.
    #[serde(default)]
    edges: Vec<(String, String)>,
}

impl LabeledGraph {
    /// Graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON form.
    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to the JSON form.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Name every vertex of `adj` by its index.
    pub fn from_matrix(adj: &AdjacencyMatrix) -> Self {
        let vertices = adj.vertices().map(|v| v.as_usize().to_string()).collect();
        let edges = adj
            .vertices()
            .flat_map(|a| {
                adj.vertices()
                    .filter(move |&b| a < b && adj.is_adjacent(a, b))
                    .map(move |b| (a.as_usize().to_string(), b.as_usize().to_string()))
            })
            .collect();
        Self { vertices, edges }
    }

    /// Vertex names in index order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Edges by name, as added.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Add a vertex; names must be unique.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexIdx, GraphError> {
        let name = name.into();
        if self.vertices.contains(&name) {
            return Err(GraphError::duplicate_vertex(name));
        }
        self.vertices.push(name);
        Ok(VertexIdx::from(self.vertices.len() - 1))
    }

    /// Connect two existing vertices.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        for name in [a, b] {
            if !self.vertices.iter().any(|v| v == name) {
                return Err(GraphError::unknown_vertex(name));
            }
        }
        self.edges.push((a.to_string(), b.to_string()));
        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Later vertices shift down by one index. Returns false if `name` is
    /// not a vertex.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        let Some(pos) = self.vertices.iter().position(|v| v == name) else {
            return false;
        };
        self.vertices.remove(pos);
        self.edges.retain(|(a, b)| a != name && b != name);
        true
    }

    /// Index-based adjacency for the search.
    ///
    /// Fails on duplicate names or edges naming unknown vertices, which a
    /// deserialized document may contain.
    pub fn adjacency(&self) -> Result<AdjacencyMatrix, GraphError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.vertices.len());
        for (i, name) in self.vertices.iter().enumerate() {
            if index.insert(name.as_str(), i).is_some() {
                return Err(GraphError::duplicate_vertex(name.as_str()));
            }
        }

        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::unknown_vertex(name))
        };

        let edges = self
            .edges
            .iter()
            .map(|(a, b)| Ok((lookup(a)?, lookup(b)?)))
            .collect::<Result<Vec<_>, GraphError>>()?;

        tracing::debug!(
            "labeled graph: {} vertices, {} edges",
            self.vertices.len(),
            edges.len()
        );
        AdjacencyMatrix::from_edges(self.vertices.len(), edges)
    }

    /// Names of `set`, in the order given.
    ///
    /// Every vertex must belong to this graph; a set computed before
    /// [`remove_vertex`](Self::remove_vertex) may not. Release builds skip
    /// such vertices.
    #[debug_requires(
        set.iter().all(|v| v.as_usize() < self.vertices.len()),
        "vertex not in graph"
    )]
    pub fn labels_of(&self, set: &[VertexIdx]) -> Vec<&str> {
        set.iter()
            .filter_map(|v| self.vertices.get(v.as_usize()).map(String::as_str))
            .collect()
    }
}
