//! Weighted graphs with shortest path and minimum spanning tree solvers.
//!
//! A [`Graph`] has a fixed number of vertices identified by the indices
//! `0..vertex_count` and stores its edges in per-vertex adjacency lists.
//! The solvers read a graph without modifying it:
//!
//!  - [`shortest_path`] and [`shortest_path_tree`] run Dijkstra's algorithm.
//!  - [`prim_mst`] and [`kruskal_mst`] compute minimum spanning trees.
//!
//! The binary heap and union-find they are built on are available in
//! [`collections`].
//!
//! # Example
//!
//! ```
//! use routegraph::{kruskal_mst, prim_mst, shortest_path, Graph};
//!
//! let mut graph = Graph::<u32>::new(4);
//! graph.add_edge(0, 1, 1).unwrap();
//! graph.add_edge(1, 2, 2).unwrap();
//! graph.add_edge(0, 2, 4).unwrap();
//! graph.add_edge(2, 3, 1).unwrap();
//!
//! let route = shortest_path(&graph, 0, 3).unwrap();
//! assert_eq!(route.distance(), Some(4));
//! assert_eq!(route.path(), [0, 1, 2, 3]);
//!
//! assert_eq!(prim_mst(&graph).unwrap().total_weight(), 4);
//! assert_eq!(kruskal_mst(&graph).unwrap().total_weight(), 4);
//! ```
pub mod algo;
pub mod collections;
pub mod graph;
pub mod weight;

pub use algo::{
    kruskal_mst, prim_mst, prim_mst_with, shortest_path, shortest_path_tree, DijkstraConfig,
    PrimConfig, ShortestPath, ShortestPathTree, SpanningTree,
};
pub use graph::{Edge, Graph, GraphError};
pub use weight::Weight;
