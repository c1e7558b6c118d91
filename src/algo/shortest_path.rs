//! Single-source shortest paths with Dijkstra's algorithm.
use bitvec::prelude::*;

use super::QueuedVertex;
use crate::collections::PriorityQueue;
use crate::graph::{Graph, GraphError};
use crate::weight::Weight;

/// Options of a Dijkstra run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DijkstraConfig {
    /// Stop as soon as this vertex is finalized.
    ///
    /// `None` computes the distances to all reachable vertices.
    pub target: Option<usize>,
}

impl DijkstraConfig {
    /// Create a configuration that explores the whole graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop early once `target` is finalized.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

/// Result of [shortest_path].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<W> {
    distance: Option<W>,
    path: Vec<usize>,
}

impl<W: Copy> ShortestPath<W> {
    /// Whether the target can be reached from the source.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Length of the shortest path, or `None` if the target is unreachable.
    #[inline]
    pub fn distance(&self) -> Option<W> {
        self.distance
    }

    /// Vertices of the shortest path from source to target, both included.
    ///
    /// Empty if the target is unreachable.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the result and returns the path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}

/// Distances and predecessors computed by a Dijkstra run.
///
/// When the run stopped early at a target, only finalized vertices carry
/// shortest distances; other reached vertices keep their tentative values.
///
/// A vertex whose every path from the source is longer than the weight type can
/// represent is reported as not reached; [ShortestPathTree::has_overflowed] tells
/// whether such paths were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<W> {
    source: usize,
    distances: Vec<Option<W>>,
    parents: Vec<Option<usize>>,
    finalized: BitVec,
    overflowed: bool,
}

impl<W: Copy> ShortestPathTree<W> {
    /// The vertex the search started from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Best known distance from the source, `None` if `vertex` was not reached.
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` on its best known path.
    ///
    /// `None` for the source and for vertices that were not reached.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Whether `vertex` was reached from the source.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Whether a path was discarded because its length overflows the weight type.
    #[inline]
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Whether the distance of `vertex` is final.
    pub fn is_finalized(&self, vertex: usize) -> bool {
        self.finalized.get(vertex).map_or(false, |bit| *bit)
    }

    /// Vertices on the best known path from the source to `vertex`.
    ///
    /// Returns `None` if `vertex` was not reached.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the shortest path from `source` to `target`.
///
/// Unreachability is reported through [ShortestPath::is_reachable], not as an error.
///
/// # Errors
///
///  - When `source` or `target` is not a vertex of the graph.
///  - When `target` is connected to `source`, but every path between them is
///    longer than the weight type can represent.
///
/// # Example
///
/// ```
/// # use routegraph::{Graph, shortest_path};
/// let graph = Graph::<u32>::from_edges(4, false, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap();
/// let path = shortest_path(&graph, 0, 3).unwrap();
///
/// assert_eq!(path.distance(), Some(4));
/// assert_eq!(path.path(), [0, 1, 2, 3]);
/// ```
pub fn shortest_path<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    target: usize,
) -> Result<ShortestPath<W>, GraphError> {
    let tree = shortest_path_tree(graph, source, DijkstraConfig::new().with_target(target))?;

    let result = match tree.path_to(target) {
        Some(path) => ShortestPath {
            distance: tree.distance(target),
            path,
        },
        None if tree.has_overflowed() && is_connected(graph, source, target) => {
            return Err(GraphError::WeightOverflow);
        }
        None => ShortestPath {
            distance: None,
            path: Vec::new(),
        },
    };

    tracing::debug!(
        "shortest path {} -> {}: {:?}",
        source,
        target,
        result.distance
    );
    Ok(result)
}

/// Whether `target` can be reached from `source` when weights are ignored.
fn is_connected<W>(graph: &Graph<W>, source: usize, target: usize) -> bool
where
    W: Copy,
{
    let mut seen = bitvec![0; graph.vertex_count()];
    let mut stack = vec![source];
    seen.set(source, true);

    while let Some(u) = stack.pop() {
        if u == target {
            return true;
        }
        for edge in graph.neighbours_unchecked(u) {
            if !seen[edge.target] {
                seen.set(edge.target, true);
                stack.push(edge.target);
            }
        }
    }

    false
}

/// Runs Dijkstra's algorithm from `source`.
///
/// Improved distances are pushed as new queue entries; stale entries are skipped
/// when a vertex comes out of the queue after it has been finalized. Edge weights
/// are non-negative by construction of [Weight].
///
/// A relaxation whose length overflows the weight type can never improve a
/// distance and is skipped.
///
/// # Errors
///
/// Fails when `source` or the configured target is not a vertex of the graph.
pub fn shortest_path_tree<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    config: DijkstraConfig,
) -> Result<ShortestPathTree<W>, GraphError> {
    graph.check_vertex(source)?;
    if let Some(target) = config.target {
        graph.check_vertex(target)?;
    }

    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<W>> = vec![None; vertex_count];
    let mut parents: Vec<Option<usize>> = vec![None; vertex_count];
    let mut finalized = bitvec![0; vertex_count];
    let mut overflowed = false;

    tracing::debug!(
        "dijkstra from {} over {} vertices, target {:?}",
        source,
        vertex_count,
        config.target
    );

    distances[source] = Some(W::ZERO);
    let mut queue = PriorityQueue::new();
    queue.insert(QueuedVertex::new(source, W::ZERO));

    while let Some(QueuedVertex { vertex: u, .. }) = queue.pop() {
        if finalized[u] {
            continue;
        }
        finalized.set(u, true);

        if config.target == Some(u) {
            break;
        }

        let Some(distance_u) = distances[u] else {
            continue;
        };

        for edge in graph.neighbours_unchecked(u) {
            let v = edge.target;
            if finalized[v] {
                continue;
            }

            let Some(candidate) = distance_u.checked_add(edge.weight) else {
                tracing::trace!("skip {} -> {}: length overflows", u, v);
                overflowed = true;
                continue;
            };

            if distances[v].map_or(true, |current| candidate < current) {
                tracing::trace!("relax {} -> {} to {:?}", u, v, candidate);
                distances[v] = Some(candidate);
                parents[v] = Some(u);
                queue.insert(QueuedVertex::new(v, candidate));
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        parents,
        finalized,
        overflowed,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn diamond() -> Graph<u32> {
        Graph::from_edges(4, false, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap()
    }

    #[rstest]
    #[case(0, 3, Some(4), vec![0, 1, 2, 3])]
    #[case(3, 0, Some(4), vec![3, 2, 1, 0])]
    #[case(0, 2, Some(3), vec![0, 1, 2])]
    #[case(1, 1, Some(0), vec![1])]
    fn diamond_paths(
        #[case] source: usize,
        #[case] target: usize,
        #[case] distance: Option<u32>,
        #[case] path: Vec<usize>,
    ) {
        let result = shortest_path(&diamond(), source, target).unwrap();
        assert!(result.is_reachable());
        assert_eq!(result.distance(), distance);
        assert_eq!(result.path(), path);
    }

    #[test]
    fn unreachable_target() {
        let graph = Graph::<u32>::from_edges(3, false, [(0, 1, 5)]).unwrap();
        let result = shortest_path(&graph, 0, 2).unwrap();

        assert!(!result.is_reachable());
        assert_eq!(result.distance(), None);
        assert!(result.path().is_empty());
    }

    #[test]
    fn directed_edges_are_not_walked_backwards() {
        let graph = Graph::<u32>::from_edges(2, true, [(0, 1, 5)]).unwrap();

        assert_eq!(shortest_path(&graph, 0, 1).unwrap().distance(), Some(5));
        assert!(!shortest_path(&graph, 1, 0).unwrap().is_reachable());
    }

    #[test]
    fn invalid_vertices_are_errors() {
        let graph = diamond();

        assert_eq!(
            shortest_path(&graph, 4, 0),
            Err(GraphError::VertexOutOfRange {
                vertex: 4,
                vertex_count: 4
            })
        );
        assert!(shortest_path(&graph, 0, 9).is_err());
        assert!(shortest_path(&Graph::<u32>::new(0), 0, 0).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        // Both routes to vertex 2 are longer than 255.
        let graph = Graph::<u8>::from_edges(
            4,
            true,
            [(0, 1, 200), (1, 2, 100), (0, 3, 150), (3, 2, 150)],
        )
        .unwrap();

        assert_eq!(shortest_path(&graph, 0, 2), Err(GraphError::WeightOverflow));
        assert_eq!(shortest_path(&graph, 0, 3).unwrap().distance(), Some(150));

        let tree = shortest_path_tree(&graph, 0, DijkstraConfig::new()).unwrap();
        assert!(tree.has_overflowed());
        assert!(!tree.is_reachable(2));
    }

    #[test]
    fn overflowing_detour_is_ignored() {
        let graph = Graph::<u8>::from_edges(4, true, [(0, 1, 200), (0, 3, 210), (1, 3, 100)])
            .unwrap();
        let result = shortest_path(&graph, 0, 3).unwrap();

        assert_eq!(result.distance(), Some(210));
        assert_eq!(result.path(), [0, 3]);
    }

    #[test]
    fn overflow_does_not_hide_unreachable_targets() {
        let graph = Graph::<u8>::from_edges(4, true, [(0, 1, 200), (1, 2, 100)]).unwrap();

        assert!(!shortest_path(&graph, 0, 3).unwrap().is_reachable());
    }

    #[test]
    fn stale_entries_are_skipped() {
        // Vertex 2 is queued at 10, then improved to 3 through vertex 1.
        let graph =
            Graph::<u32>::from_edges(4, true, [(0, 2, 10), (0, 1, 1), (1, 2, 2), (2, 3, 1)])
                .unwrap();
        let tree = shortest_path_tree(&graph, 0, DijkstraConfig::new()).unwrap();

        assert_eq!(tree.distance(2), Some(3));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
        assert!((0..4).all(|v| tree.is_finalized(v)));
    }

    #[test]
    fn early_exit_leaves_far_vertices_unfinalized() {
        let graph = Graph::<u32>::from_edges(3, false, [(0, 1, 1), (1, 2, 1)]).unwrap();
        let tree = shortest_path_tree(&graph, 0, DijkstraConfig::new().with_target(1)).unwrap();

        assert!(tree.is_finalized(1));
        assert!(!tree.is_finalized(2));
        assert_eq!(tree.source(), 0);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.path_to(7), None);
    }
}
