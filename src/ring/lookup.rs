use crate::partition::Partition;
use crate::vnode::{Token, VNode};

use super::Ring;

impl<N, S> Ring<N, S>
where
    N: Clone + PartialEq,
{
    /// Returns all tokens owned by `node_id` in ring order.
    /// Returns an empty list if the node is unknown
    pub fn tokens(&self, node_id: &N) -> Vec<Token> {
        self.vnodes
            .iter()
            .filter(|vnode| vnode.node_id() == node_id)
            .map(VNode::token)
            .collect()
    }

    /// Returns the vnodes directly before and after `token`, wrapping around the end of the ring
    ///
    /// If a vnode sits exactly on `token`, `next` is the vnode following it, never the vnode itself.
    /// On a ring with a single vnode both neighbours are that vnode.
    /// Returns None if the ring is empty
    pub fn neighbours(&self, token: Token) -> Option<(VNode<N>, VNode<N>)> {
        if self.is_empty() {
            return None;
        }

        let anchor = self.search(token) % self.len();
        let prev = self.prev(anchor);
        let next = if self.vnodes[anchor].token() == token {
            self.next(anchor)
        } else {
            anchor
        };

        Some((self.vnodes[prev].clone(), self.vnodes[next].clone()))
    }

    /// Returns the vnodes storing `token`: the first vnode at or after `token` followed by its successors
    ///
    /// The result always holds `replication_factor()` vnodes. If the factor exceeds the number of vnodes,
    /// the walk wraps around and vnodes repeat.
    /// Returns an empty list if the ring is empty
    pub fn replicas(&self, token: Token) -> Vec<VNode<N>> {
        if self.is_empty() {
            return vec![];
        }

        self.chain(self.search(token) % self.len())
    }

    /// Returns the ids of all storage nodes storing `token`, primary first, without duplicates
    pub fn replica_nodes(&self, token: Token) -> Vec<N> {
        let mut nodes: Vec<N> = vec![];

        for vnode in self.replicas(token) {
            if !nodes.contains(vnode.node_id()) {
                nodes.push(vnode.node_id().clone());
            }
        }

        nodes
    }

    /// Returns the partition of the ring that contains `token`
    /// Returns None if the ring is empty
    pub fn partition(&self, token: Token) -> Option<Partition<N>> {
        if self.is_empty() {
            return None;
        }

        let anchor = self.search(token) % self.len();
        let idx = if self.vnodes[anchor].token() == token {
            anchor
        } else {
            self.prev(anchor)
        };

        Some(self.partition_at(idx))
    }

    // `replication_factor` consecutive vnodes starting at `start`
    pub(super) fn chain(&self, start: usize) -> Vec<VNode<N>> {
        self.walk(start, self.replication_factor)
            .map(|idx| self.vnodes[idx].clone())
            .collect()
    }

    // the range opened by the vnode at `idx`, up to the token before its successor
    pub(super) fn partition_at(&self, idx: usize) -> Partition<N> {
        let from = self.vnodes[idx].token();
        let to = self.vnodes[self.next(idx)].token().wrapping_sub(1);

        Partition::new(from, to, self.chain(idx))
    }
}
