use siphasher::sip::SipHasher;
use std::hash::BuildHasher;
use tracing::debug;

use crate::error::{RingError, RingResult};
use crate::vnode::{Token, VNode};

mod crud;
mod iterator;
mod lookup;
mod partitions;

pub use iterator::RingIntoIter;

/// Hashes keys onto the ring with SipHash-2-4 and fixed zero keys,
/// so every process maps the same key to the same token.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DefaultHashBuilder;

impl BuildHasher for DefaultHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new()
    }
}

/// Ring is an index over one membership snapshot of the cluster
/// Every storage node owns one or more tokens (vnodes) on the ring, all vnodes are kept sorted by token
/// Ring answers which vnodes store a token and which token ranges (partitions) each node is responsible for
///
/// A ring is never extended. Removing single vnodes is supported, any other membership change builds a new ring
#[derive(Clone, PartialEq, Debug)]
pub struct Ring<N, S = DefaultHashBuilder> {
    hash_builder: S,
    vnodes: Vec<VNode<N>>,
    replication_factor: usize,
}

impl<N> Ring<N>
where
    N: Clone + Ord,
{
    /// Build a new `Ring` from a membership snapshot.
    ///
    /// # Arguments
    ///
    /// * `node_ids` - ids of all storage nodes in the cluster
    /// * `tokens` - tokens owned by each node, `tokens[i]` belongs to `node_ids[i]`
    /// * `replication_factor` - number of consecutive vnodes storing each token range (0 is treated as 1)
    pub fn new(
        node_ids: Vec<N>,
        tokens: Vec<Vec<Token>>,
        replication_factor: usize,
    ) -> RingResult<Ring<N>> {
        Self::with_hasher(node_ids, tokens, replication_factor, DefaultHashBuilder)
    }
}

impl<N, S> Ring<N, S>
where
    N: Clone + Ord,
{
    /// Build a new `Ring` which hashes keys with the given hash builder.
    ///
    /// Fails if `node_ids` and `tokens` differ in length or if no node owns a token.
    /// Vnodes with equal tokens are ordered by node id.
    pub fn with_hasher(
        node_ids: Vec<N>,
        tokens: Vec<Vec<Token>>,
        replication_factor: usize,
        hash_builder: S,
    ) -> RingResult<Ring<N, S>> {
        if node_ids.len() != tokens.len() {
            return Err(RingError::MismatchedMembership {
                nodes: node_ids.len(),
                token_lists: tokens.len(),
            });
        }

        let mut vnodes: Vec<VNode<N>> = node_ids
            .into_iter()
            .zip(tokens)
            .flat_map(|(node_id, tokens)| {
                tokens
                    .into_iter()
                    .map(move |token| VNode::new(node_id.clone(), token))
            })
            .collect();

        if vnodes.is_empty() {
            return Err(RingError::EmptyMembership);
        }

        vnodes.sort_by(|a, b| {
            a.token()
                .cmp(&b.token())
                .then_with(|| a.node_id().cmp(b.node_id()))
        });

        let replication_factor = replication_factor.max(1);
        debug!(vnodes = vnodes.len(), replication_factor, "built ring");

        Ok(Ring {
            hash_builder,
            vnodes,
            replication_factor,
        })
    }
}

impl<N, S> Ring<N, S> {
    /// Number of consecutive vnodes that store each token range.
    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    /// Hash builder used to map keys onto tokens.
    pub fn hash_builder(&self) -> &S {
        &self.hash_builder
    }

    /// All vnodes, sorted by token.
    pub fn vnodes(&self) -> &[VNode<N>] {
        &self.vnodes
    }

    /// Get the number of virtual nodes in the ring.
    pub fn len(&self) -> usize {
        self.vnodes.len()
    }

    /// Returns true if every vnode has been removed.
    pub fn is_empty(&self) -> bool {
        self.vnodes.is_empty()
    }

    /// Iterate over all vnodes in ring order.
    pub fn iter(&self) -> std::slice::Iter<'_, VNode<N>> {
        self.vnodes.iter()
    }

    // index of the first vnode with a token >= `token`, `len()` if there is none
    fn search(&self, token: Token) -> usize {
        self.vnodes.partition_point(|vnode| vnode.token() < token)
    }

    // the index helpers below must only be called on a non-empty ring

    fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.vnodes.len()
    }

    fn prev(&self, idx: usize) -> usize {
        let len = self.vnodes.len();
        (idx % len + len - 1) % len
    }

    fn step_back(&self, idx: usize, steps: usize) -> usize {
        let len = self.vnodes.len();
        (idx % len + len - steps % len) % len
    }

    // walks forward from `start`, visiting `count` indexes and wrapping as often as needed
    fn walk(&self, start: usize, count: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(start), move |&idx| Some(self.next(idx))).take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultHashBuilder, Ring};
    use crate::error::RingError;
    use crate::vnode::VNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn vnodes_are_sorted_by_token() {
        let ring = Ring::new(
            vec!["node1", "node2"],
            vec![vec![30, 10], vec![20, 0]],
            2,
        )
        .unwrap();

        assert_eq!(
            vec![
                VNode::new("node2", 0),
                VNode::new("node1", 10),
                VNode::new("node2", 20),
                VNode::new("node1", 30),
            ],
            ring.vnodes()
        );
        assert_eq!(4, ring.len());
        assert!(!ring.is_empty());
    }

    #[test]
    fn equal_tokens_are_ordered_by_node_id() {
        let first = Ring::new(
            vec!["node2", "node1"],
            vec![vec![10], vec![10]],
            1,
        )
        .unwrap();
        let second = Ring::new(
            vec!["node1", "node2"],
            vec![vec![10], vec![10]],
            1,
        )
        .unwrap();

        assert_eq!(
            vec![VNode::new("node1", 10), VNode::new("node2", 10)],
            first.vnodes()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn zero_replication_factor_is_coerced_to_one() {
        let ring = Ring::new(vec!["node1"], vec![vec![1]], 0).unwrap();

        assert_eq!(1, ring.replication_factor());
    }

    #[test]
    fn mismatched_membership_is_rejected() {
        let ring = Ring::new(vec!["node1", "node2"], vec![vec![1]], 1);

        assert_eq!(
            Err(RingError::MismatchedMembership {
                nodes: 2,
                token_lists: 1
            }),
            ring
        );
    }

    #[test]
    fn empty_membership_is_rejected() {
        let no_nodes: Result<Ring<&str>, _> = Ring::new(vec![], vec![], 1);
        assert_eq!(Err(RingError::EmptyMembership), no_nodes);

        let no_tokens = Ring::new(vec!["node1"], vec![vec![]], 1);
        assert_eq!(Err(RingError::EmptyMembership), no_tokens);
    }

    #[test]
    fn index_helpers_wrap_around() {
        let ring = Ring::with_hasher(
            vec![1_u8],
            vec![vec![10, 20, 30]],
            1,
            DefaultHashBuilder,
        )
        .unwrap();

        assert_eq!(1, ring.next(0));
        assert_eq!(0, ring.next(2));
        assert_eq!(2, ring.prev(0));
        assert_eq!(1, ring.prev(2));
        assert_eq!(2, ring.prev(3));
        assert_eq!(1, ring.step_back(0, 2));
        assert_eq!(0, ring.step_back(0, 3));
        assert_eq!(0, ring.step_back(1, 7));
        assert_eq!(2, ring.step_back(1, 8));
        assert_eq!(vec![2, 0, 1, 2, 0], ring.walk(2, 5).collect::<Vec<_>>());
    }

    #[test]
    fn search_is_a_lower_bound() {
        let ring = Ring::new(vec!["node1"], vec![vec![10, 20, 30]], 1).unwrap();

        assert_eq!(0, ring.search(0));
        assert_eq!(0, ring.search(10));
        assert_eq!(1, ring.search(11));
        assert_eq!(1, ring.search(20));
        assert_eq!(2, ring.search(30));
        assert_eq!(3, ring.search(31));
        assert_eq!(3, ring.search(u64::MAX));
    }
}
