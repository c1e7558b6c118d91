//! Minimum spanning trees.
//!
//! Two independent strategies are provided: [prim_mst] grows a single tree from a
//! root vertex, [kruskal_mst] merges a forest with a union-find. On a connected
//! graph both select trees of the same total weight, although the edge sets can
//! differ when several edges have equal weights.
mod kruskal;
mod prim;

pub use kruskal::kruskal_mst;
pub use prim::{prim_mst, prim_mst_with, PrimConfig};

use crate::graph::{Edge, GraphError};
use crate::weight::Weight;

/// The edges selected by a minimum spanning tree algorithm.
///
/// When the graph is disconnected the edges do not span every vertex; check
/// [SpanningTree::is_spanning] before treating the result as a spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    vertex_count: usize,
    root: Option<usize>,
}

impl<W: Weight> SpanningTree<W> {
    pub(crate) fn new(edges: Vec<Edge<W>>, vertex_count: usize) -> Result<Self, GraphError> {
        let total_weight = edges.iter().try_fold(W::ZERO, |total, edge| {
            total
                .checked_add(edge.weight)
                .ok_or(GraphError::WeightOverflow)
        })?;

        Ok(Self {
            edges,
            total_weight,
            vertex_count,
            root: None,
        })
    }

    /// Marks the tree as grown from `root`.
    pub(crate) fn rooted(mut self, root: usize) -> Self {
        self.root = Some(root);
        self
    }

    /// The vertex the tree was grown from, `None` for a forest built by [kruskal_mst].
    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// The selected edges, in the order the algorithm reports them.
    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Sum of the weights of the selected edges.
    #[inline]
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// The number of selected edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the selected edges connect all vertices of the graph.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// The number of trees formed by the selected edges, counting every vertex
    /// without a selected edge as a tree of its own.
    pub fn tree_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Vertices that are not an endpoint of any selected edge, in ascending order.
    ///
    /// The root of a tree from [prim_mst] is always covered, so for Prim's this
    /// lists exactly the vertices unreachable from the root. For a graph with a
    /// single vertex this is empty.
    pub fn uncovered(&self) -> Vec<usize> {
        if self.vertex_count <= 1 {
            return Vec::new();
        }

        let mut covered = vec![false; self.vertex_count];
        if let Some(root) = self.root {
            covered[root] = true;
        }
        for edge in &self.edges {
            covered[edge.source] = true;
            covered[edge.target] = true;
        }

        (0..self.vertex_count)
            .filter(|&vertex| !covered[vertex])
            .collect()
    }

    /// Consumes the tree and returns the selected edges.
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}
