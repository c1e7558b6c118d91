use super::SpanningTree;
use crate::collections::{DisjointSet, PriorityQueue};
use crate::graph::{Edge, Graph, GraphError};
use crate::weight::Weight;

/// Priority queue entry of a candidate edge.
///
/// Ordered by weight, then by source and target so that ties are resolved
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueuedEdge<W> {
    weight: W,
    source: usize,
    target: usize,
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are accepted in order of ascending weight unless both endpoints are
/// already connected. The accepted edges are reported in that order. If fewer than
/// `vertex_count - 1` edges are accepted the graph is disconnected and the result
/// is a forest; see [SpanningTree::is_spanning].
///
/// # Errors
///
/// Fails when the total weight overflows the weight type.
///
/// # Example
///
/// ```
/// # use routegraph::{Graph, Edge, kruskal_mst};
/// let graph = Graph::<u32>::from_edges(4, false, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap();
/// let tree = kruskal_mst(&graph).unwrap();
///
/// assert!(tree.is_spanning());
/// assert_eq!(tree.total_weight(), 4);
/// assert_eq!(tree.edges(), [Edge::new(0, 1, 1), Edge::new(2, 3, 1), Edge::new(1, 2, 2)]);
/// ```
pub fn kruskal_mst<W: Weight>(graph: &Graph<W>) -> Result<SpanningTree<W>, GraphError> {
    let vertex_count = graph.vertex_count();
    let directed = graph.is_directed();

    // Undirected edges are stored once per endpoint; keep the entry with the smaller source.
    let mut queue: PriorityQueue<_> = graph
        .edges()
        .filter(|edge| directed || edge.source < edge.target)
        .map(|edge| QueuedEdge {
            weight: edge.weight,
            source: edge.source,
            target: edge.target,
        })
        .collect();

    tracing::debug!(
        "kruskal over {} vertices with {} candidate edges",
        vertex_count,
        queue.len()
    );

    let mut sets = DisjointSet::new(vertex_count);
    let wanted = vertex_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(wanted);

    while accepted.len() < wanted {
        let Some(candidate) = queue.pop() else {
            break;
        };

        let source_root = sets.find(candidate.source);
        let target_root = sets.find(candidate.target);

        if source_root == target_root {
            tracing::trace!(
                "reject {} - {}: would close a cycle",
                candidate.source,
                candidate.target
            );
            continue;
        }

        sets.union(source_root, target_root);
        accepted.push(Edge::new(
            candidate.source,
            candidate.target,
            candidate.weight,
        ));
    }

    if accepted.len() < wanted {
        tracing::debug!("kruskal found a forest of {} trees", sets.set_count());
    }

    SpanningTree::new(accepted, vertex_count)
}
