use bitvec::prelude::*;

use super::SpanningTree;
use crate::algo::QueuedVertex;
use crate::collections::PriorityQueue;
use crate::graph::{Edge, Graph, GraphError};
use crate::weight::Weight;

/// Options of a Prim run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrimConfig {
    /// The vertex the tree is grown from.
    pub root: usize,
}

impl PrimConfig {
    /// Create a configuration rooted at vertex 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the tree from `root`.
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }
}

/// Computes a minimum spanning tree with Prim's algorithm, rooted at vertex 0.
///
/// See [prim_mst_with].
///
/// # Example
///
/// ```
/// # use routegraph::{Graph, prim_mst};
/// let graph = Graph::<u32>::from_edges(3, false, [(0, 1, 5)]).unwrap();
/// let tree = prim_mst(&graph).unwrap();
///
/// assert!(!tree.is_spanning());
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree.uncovered(), [2]);
/// ```
pub fn prim_mst<W: Weight>(graph: &Graph<W>) -> Result<SpanningTree<W>, GraphError> {
    prim_mst_with(graph, PrimConfig::default())
}

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// The tree only covers the vertices reachable from the root. Edges are reported
/// as `(parent, child, weight)` ordered by the child's index.
///
/// # Errors
///
///  - When the root is not a vertex of a non-empty graph.
///  - When the total weight overflows the weight type.
pub fn prim_mst_with<W: Weight>(
    graph: &Graph<W>,
    config: PrimConfig,
) -> Result<SpanningTree<W>, GraphError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return SpanningTree::new(Vec::new(), 0);
    }

    let root = config.root;
    graph.check_vertex(root)?;

    let mut keys: Vec<Option<W>> = vec![None; vertex_count];
    let mut parents: Vec<Option<usize>> = vec![None; vertex_count];
    let mut in_tree = bitvec![0; vertex_count];

    tracing::debug!("prim from root {} over {} vertices", root, vertex_count);

    keys[root] = Some(W::ZERO);
    let mut queue = PriorityQueue::new();
    queue.insert(QueuedVertex::new(root, W::ZERO));

    while let Some(QueuedVertex { vertex: u, .. }) = queue.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree.set(u, true);

        for edge in graph.neighbours_unchecked(u) {
            let v = edge.target;
            if in_tree[v] {
                continue;
            }

            if keys[v].map_or(true, |key| edge.weight < key) {
                tracing::trace!("attach {} below {} at {:?}", v, u, edge.weight);
                keys[v] = Some(edge.weight);
                parents[v] = Some(u);
                queue.insert(QueuedVertex::new(v, edge.weight));
            }
        }
    }

    let edges: Vec<_> = parents
        .iter()
        .zip(&keys)
        .enumerate()
        .filter_map(|(child, (parent, key))| Some(Edge::new((*parent)?, child, (*key)?)))
        .collect();

    let tree = SpanningTree::new(edges, vertex_count)?.rooted(root);
    if !tree.is_spanning() {
        tracing::debug!(
            "prim reached {} of {} vertices from root {}",
            in_tree.count_ones(),
            vertex_count,
            root
        );
    }
    Ok(tree)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn diamond_tree() {
        let graph =
            Graph::<u32>::from_edges(4, false, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)])
                .unwrap();
        let tree = prim_mst(&graph).unwrap();

        assert!(tree.is_spanning());
        assert_eq!(tree.total_weight(), 4);
        assert_eq!(
            tree.edges(),
            [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 1)]
        );
    }

    #[test]
    fn root_is_configurable() {
        let graph = Graph::<u32>::from_edges(4, false, [(0, 1, 3), (2, 3, 7)]).unwrap();
        let tree = prim_mst_with(&graph, PrimConfig::new().with_root(3)).unwrap();

        assert_eq!(tree.edges(), [Edge::new(3, 2, 7)]);
        assert_eq!(tree.uncovered(), [0, 1]);
        assert!(!tree.is_spanning());
    }

    #[test]
    fn key_updates_replace_parent() {
        // Vertex 2 is first attached to 0 at weight 9, then to 1 at weight 2.
        let graph =
            Graph::<u32>::from_edges(3, false, [(0, 2, 9), (0, 1, 1), (1, 2, 2)]).unwrap();
        let tree = prim_mst(&graph).unwrap();

        assert_eq!(tree.edges(), [Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
    }

    #[test]
    fn isolated_root_is_not_uncovered() {
        let tree = prim_mst(&Graph::<u32>::new(2)).unwrap();

        assert!(tree.is_empty());
        assert!(!tree.is_spanning());
        assert_eq!(tree.root(), Some(0));
        assert_eq!(tree.uncovered(), [1]);

        let graph = Graph::<u32>::from_edges(3, false, [(0, 1, 4)]).unwrap();
        let tree = prim_mst_with(&graph, PrimConfig::new().with_root(2)).unwrap();
        assert_eq!(tree.uncovered(), [0, 1]);
    }

    #[test]
    fn invalid_root() {
        let graph = Graph::<u32>::new(2);

        assert!(prim_mst_with(&graph, PrimConfig::new().with_root(2)).is_err());
        assert!(prim_mst(&Graph::<u32>::new(0)).unwrap().is_empty());
    }
}
