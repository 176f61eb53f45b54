//! Union-find (disjoint set union) used for forest classification.
//!
//! Edges are replayed in insertion order; an edge whose endpoints already
//! share a root closes a cycle. Self-loops and repeated pairs are caught the
//! same way, so the check stays correct for inputs that bypass the simple
//! graph builder.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        while let Some(&parent) = self.parent.get(node) {
            if parent == node {
                break;
            }
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = root;
            }
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when they were already in the same set.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank.get(left).copied().unwrap_or(0);
        let right_rank = self.rank.get(right).copied().unwrap_or(0);
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        if let Some(slot) = self.parent.get_mut(right) {
            *slot = left;
        }
        if left_rank == right_rank {
            if let Some(slot) = self.rank.get_mut(left) {
                *slot = left_rank.saturating_add(1);
            }
        }
        true
    }
}
