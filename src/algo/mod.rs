//! Shortest path and minimum spanning tree algorithms.
//!
//! Every solve reads the graph without modifying it and allocates its own
//! priority queue and union-find, so a graph can be shared by several solves.
pub mod mst;
pub mod shortest_path;

pub use mst::{kruskal_mst, prim_mst, prim_mst_with, PrimConfig, SpanningTree};
pub use shortest_path::{
    shortest_path, shortest_path_tree, DijkstraConfig, ShortestPath, ShortestPathTree,
};

/// Priority queue entry for a vertex reached with a given distance or key.
///
/// Ordered by priority first; equal priorities are extracted by ascending vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct QueuedVertex<W> {
    pub priority: W,
    pub vertex: usize,
}

impl<W> QueuedVertex<W> {
    #[inline]
    pub fn new(vertex: usize, priority: W) -> Self {
        Self { priority, vertex }
    }
}
