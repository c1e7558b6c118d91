//! Union-find over densely indexed elements.

/// A forest of disjoint sets with path compression and union by rank.
///
/// # Example
///
/// ```
/// # use routegraph::collections::DisjointSet;
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
///
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    nodes: Vec<Subset>,
    sets: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subset {
    parent: usize,
    rank: u32,
}

impl DisjointSet {
    /// Creates `len` singleton sets, one per element in `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: (0..len).map(|parent| Subset { parent, rank: 0 }).collect(),
            sets: len,
        }
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of disjoint sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element visited on the way to the root is relinked to point at the
    /// root directly.
    ///
    /// # Panics
    ///
    /// Panics if `element` is out of bounds.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        let mut node = element;
        while node != root {
            let next = self.nodes[node].parent;
            self.nodes[node].parent = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of lower rank is attached below the other. On equal ranks the root
    /// of `y` is attached below the root of `x`, whose rank grows by one.
    ///
    /// Returns `false` if both were already in the same set, in which case nothing
    /// changes.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of bounds.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);

        if x_root == y_root {
            return false;
        }

        let x_rank = self.nodes[x_root].rank;
        let y_rank = self.nodes[y_root].rank;

        if x_rank < y_rank {
            self.nodes[x_root].parent = y_root;
        } else if x_rank > y_rank {
            self.nodes[y_root].parent = x_root;
        } else {
            self.nodes[y_root].parent = x_root;
            self.nodes[x_root].rank += 1;
        }

        self.sets -= 1;
        true
    }

    /// Whether `x` and `y` belong to the same set.
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_rank_attaches_second_root_under_first() {
        let mut sets = DisjointSet::new(2);
        sets.union(1, 0);

        assert_eq!(sets.find(0), 1);
        assert_eq!(sets.nodes[1].rank, 1);
        assert_eq!(sets.nodes[0].rank, 0);
    }

    #[test]
    fn lower_rank_goes_under_higher() {
        let mut sets = DisjointSet::new(3);
        sets.union(0, 1);
        sets.union(2, 0);

        assert_eq!(sets.find(2), 0);
        assert_eq!(sets.nodes[0].rank, 1);
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = DisjointSet::new(4);
        sets.nodes[3].parent = 2;
        sets.nodes[2].parent = 1;
        sets.nodes[1].parent = 0;

        assert_eq!(sets.find(3), 0);
        assert!(sets.nodes[1..].iter().all(|node| node.parent == 0));
    }

    proptest! {
        #[test]
        fn unions_join_sets(len in 1usize..40, pairs in prop::collection::vec((0usize..40, 0usize..40), 0..80)) {
            let mut sets = DisjointSet::new(len);
            let mut merges = 0;

            for (a, b) in pairs.into_iter().map(|(a, b)| (a % len, b % len)) {
                let was_joined = sets.same_set(a, b);
                let merged = sets.union(a, b);
                prop_assert_eq!(merged, !was_joined);
                prop_assert_eq!(sets.find(a), sets.find(b));
                prop_assert!(!sets.union(a, b));
                merges += usize::from(merged);

                let root = sets.find(a);
                prop_assert_eq!(sets.find(root), root);
            }

            prop_assert_eq!(sets.set_count(), len - merges);
        }
    }
}
