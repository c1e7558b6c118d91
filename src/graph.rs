//! Weighted graphs over a fixed set of densely indexed vertices.
use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;
use thiserror::Error;

use crate::weight::Weight;

/// A weighted edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub source: usize,
    pub target: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (w: {})", self.source, self.target, self.weight)
    }
}

/// An entry of a vertex's adjacency list.
///
/// The source vertex is implied by the list the entry is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adjacent<W> {
    target: usize,
    weight: W,
}

/// Weighted graph with a fixed number of vertices and per-vertex adjacency lists.
///
/// Vertices are identified by their index in `0..vertex_count`. In an undirected
/// graph every inserted edge is stored in the adjacency lists of both endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph<W> {
    adjacency: Vec<Vec<Adjacent<W>>>,
    directed: bool,
    edge_count: usize,
}

impl<W: Debug> Debug for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<W: Weight> Graph<W> {
    /// Create an undirected graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, false)
    }

    /// Create a directed graph with `vertex_count` vertices and no edges.
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, true)
    }

    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn with_direction(vertex_count: usize, directed: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed,
            edge_count: 0,
        }
    }

    /// Create a graph from a sequence of `(source, target, weight)` triples.
    ///
    /// # Errors
    ///
    /// Fails on the first edge with an endpoint outside of `0..vertex_count`.
    ///
    /// # Example
    ///
    /// ```
    /// # use routegraph::Graph;
    /// let graph = Graph::<u32>::from_edges(3, false, [(0, 1, 4), (1, 2, 5)]).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.degree(1).unwrap(), 2);
    /// ```
    pub fn from_edges<I>(vertex_count: usize, directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_direction(vertex_count, directed);
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Add an edge from `source` to `target`.
    ///
    /// In an undirected graph the mirrored entry is added to the adjacency list of
    /// `target` as well. A self loop in an undirected graph is therefore listed
    /// twice at its vertex.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph. In that case the graph is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use routegraph::Graph;
    /// let mut graph = Graph::<u32>::new(2);
    /// graph.add_edge(0, 1, 7).unwrap();
    /// assert!(graph.add_edge(0, 2, 1).is_err());
    /// assert_eq!(graph.neighbours(1).unwrap().map(|e| e.target).collect::<Vec<_>>(), [0]);
    /// ```
    pub fn add_edge(&mut self, source: usize, target: usize, weight: W) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        self.adjacency[source].push(Adjacent { target, weight });
        if !self.directed {
            self.adjacency[target].push(Adjacent {
                target: source,
                weight,
            });
        }

        self.edge_count += 1;
        Ok(())
    }

    /// Add an edge of weight one.
    #[inline]
    pub fn add_unit_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        self.add_edge(source, target, W::ONE)
    }
}

impl<W> Graph<W> {
    /// The number of vertices, fixed at construction.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of inserted edges. Mirrored entries of undirected edges are not counted.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether edges are only traversable from source to target.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `vertex` is a valid vertex index.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    /// Returns an error unless `vertex` is a valid vertex index.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// The edges leaving `vertex`, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn neighbours(&self, vertex: usize) -> Result<Neighbours<'_, W>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.neighbours_unchecked(vertex))
    }

    /// The number of adjacency entries of `vertex`.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Iterates over every adjacency entry of the graph, ordered by source vertex
    /// and then by insertion order.
    ///
    /// Undirected edges are yielded once in each direction.
    pub fn edges(&self) -> Edges<'_, W> {
        Edges {
            graph: self,
            vertex: 0,
            current: self.neighbours_unchecked_or_empty(0),
        }
    }

    /// Adjacency iteration for vertices the caller already validated.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub(crate) fn neighbours_unchecked(&self, vertex: usize) -> Neighbours<'_, W> {
        Neighbours {
            source: vertex,
            iter: self.adjacency[vertex].iter(),
        }
    }

    fn neighbours_unchecked_or_empty(&self, vertex: usize) -> Neighbours<'_, W> {
        Neighbours {
            source: vertex,
            iter: self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice).iter(),
        }
    }
}

impl<W: Display> Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {}:", vertex)?;
            for entry in list {
                write!(f, " ({}, w: {})", entry.target, entry.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error returned by graph operations that take vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    #[error("accumulated weight overflows the weight type")]
    WeightOverflow,
}

/// Iterator created by [Graph::neighbours].
#[derive(Clone)]
pub struct Neighbours<'a, W> {
    source: usize,
    iter: std::slice::Iter<'a, Adjacent<W>>,
}

impl<'a, W: Copy> Iterator for Neighbours<'a, W> {
    type Item = Edge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.iter.next()?;
        Some(Edge::new(self.source, entry.target, entry.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, W: Copy> ExactSizeIterator for Neighbours<'a, W> {}
impl<'a, W: Copy> FusedIterator for Neighbours<'a, W> {}

/// Iterator created by [Graph::edges].
#[derive(Clone)]
pub struct Edges<'a, W> {
    graph: &'a Graph<W>,
    vertex: usize,
    current: Neighbours<'a, W>,
}

impl<'a, W: Copy> Iterator for Edges<'a, W> {
    type Item = Edge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.next() {
                return Some(edge);
            }
            self.vertex += 1;
            if self.vertex >= self.graph.vertex_count() {
                return None;
            }
            self.current = self.graph.neighbours_unchecked(self.vertex);
        }
    }
}

impl<'a, W: Copy> FusedIterator for Edges<'a, W> {}
