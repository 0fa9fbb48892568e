#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use crate::error::RingResult;
use crate::ring::Ring;
use crate::vnode::Token;

/// Membership describes the cluster a ring is built from, usually decoded from the on-chain cluster state
///
/// * `node_ids` - ids of all storage nodes of the cluster
/// * `tokens` - tokens owned by each node, `tokens[i]` belongs to `node_ids[i]`
/// * `replication_factor` - number of consecutive vnodes storing each token range
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct Membership<N> {
    pub node_ids: Vec<N>,
    pub tokens: Vec<Vec<Token>>,
    pub replication_factor: usize,
}

impl<N> Membership<N> {
    pub fn new(replication_factor: usize) -> Membership<N> {
        Membership {
            node_ids: vec![],
            tokens: vec![],
            replication_factor,
        }
    }

    /// Add a storage node owning `tokens`
    pub fn with_node(mut self, node_id: N, tokens: Vec<Token>) -> Self {
        self.node_ids.push(node_id);
        self.tokens.push(tokens);
        self
    }
}

impl<N> Membership<N>
where
    N: Clone + Ord,
{
    /// Build the ring described by this membership, see [`Ring::new`]
    pub fn build(self) -> RingResult<Ring<N>> {
        Ring::new(self.node_ids, self.tokens, self.replication_factor)
    }

    /// Build the ring described by this membership with a custom hash builder, see [`Ring::with_hasher`]
    pub fn build_with_hasher<S>(self, hash_builder: S) -> RingResult<Ring<N, S>> {
        Ring::with_hasher(
            self.node_ids,
            self.tokens,
            self.replication_factor,
            hash_builder,
        )
    }
}
