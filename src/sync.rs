use parking_lot::RwLock;
use std::hash::{BuildHasher, Hash};
use tracing::debug;

use crate::error::RingResult;
use crate::partition::Partition;
use crate::ring::{DefaultHashBuilder, Ring};
use crate::vnode::{Token, VNode};

/// Thread-safe handle to a [`Ring`] that may change while it is being read.
///
/// Queries hold a shared lock for the duration of the call and return owned values.
/// Removing a vnode and swapping the whole ring hold the exclusive lock.
/// Share it between tasks with an `Arc`.
#[derive(Debug)]
pub struct SyncRing<N, S = DefaultHashBuilder> {
    ring: RwLock<Ring<N, S>>,
}

impl<N, S> From<Ring<N, S>> for SyncRing<N, S> {
    fn from(ring: Ring<N, S>) -> Self {
        Self::new(ring)
    }
}

impl<N, S> SyncRing<N, S> {
    pub fn new(ring: Ring<N, S>) -> SyncRing<N, S> {
        SyncRing {
            ring: RwLock::new(ring),
        }
    }

    pub fn replication_factor(&self) -> usize {
        self.ring.read().replication_factor()
    }

    /// Get the number of virtual nodes in the ring.
    pub fn len(&self) -> usize {
        self.ring.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.read().is_empty()
    }

    /// See [`Ring::remove_vnode`]
    pub fn remove_vnode(&self, token: Token) -> bool {
        self.ring.write().remove_vnode(token)
    }

    /// Swap in a new ring, readers see either the old or the new ring but never a mix.
    /// Returns the previous ring
    pub fn replace(&self, ring: Ring<N, S>) -> Ring<N, S> {
        let vnodes = ring.len();
        let previous = std::mem::replace(&mut *self.ring.write(), ring);
        debug!(vnodes, "replaced ring");
        previous
    }

    pub fn into_inner(self) -> Ring<N, S> {
        self.ring.into_inner()
    }
}

impl<N, S> SyncRing<N, S>
where
    N: Clone,
    S: Clone,
{
    /// Copy of all vnodes, sorted by token.
    pub fn vnodes(&self) -> Vec<VNode<N>> {
        self.ring.read().vnodes().to_vec()
    }

    /// Copy of the current ring, to run several queries against one consistent state
    pub fn snapshot(&self) -> Ring<N, S> {
        self.ring.read().clone()
    }
}

impl<N, S> SyncRing<N, S>
where
    N: Clone + Ord,
    S: Clone,
{
    /// Build a ring from a new membership snapshot and swap it in.
    ///
    /// The new ring keeps the hash builder of the current one. If the snapshot is invalid the
    /// current ring stays in place and the error is returned.
    pub fn rebuild(
        &self,
        node_ids: Vec<N>,
        tokens: Vec<Vec<Token>>,
        replication_factor: usize,
    ) -> RingResult<()> {
        let hash_builder = self.ring.read().hash_builder().clone();
        let ring = Ring::with_hasher(node_ids, tokens, replication_factor, hash_builder)?;
        self.replace(ring);
        Ok(())
    }
}

impl<N, S> SyncRing<N, S>
where
    N: Clone + PartialEq,
{
    /// See [`Ring::tokens`]
    pub fn tokens(&self, node_id: &N) -> Vec<Token> {
        self.ring.read().tokens(node_id)
    }

    /// See [`Ring::neighbours`]
    pub fn neighbours(&self, token: Token) -> Option<(VNode<N>, VNode<N>)> {
        self.ring.read().neighbours(token)
    }

    /// See [`Ring::replicas`]
    pub fn replicas(&self, token: Token) -> Vec<VNode<N>> {
        self.ring.read().replicas(token)
    }

    /// See [`Ring::replica_nodes`]
    pub fn replica_nodes(&self, token: Token) -> Vec<N> {
        self.ring.read().replica_nodes(token)
    }

    /// See [`Ring::partition`]
    pub fn partition(&self, token: Token) -> Option<Partition<N>> {
        self.ring.read().partition(token)
    }

    /// See [`Ring::partitions`]
    pub fn partitions(&self, node_id: &N) -> Vec<Partition<N>> {
        self.ring.read().partitions(node_id)
    }

    /// See [`Ring::excess_partitions`]
    pub fn excess_partitions(&self, node_id: &N) -> Vec<Partition<N>> {
        self.ring.read().excess_partitions(node_id)
    }
}

impl<N, S> SyncRing<N, S>
where
    N: Clone + PartialEq,
    S: BuildHasher,
{
    /// See [`Ring::token_for`]
    pub fn token_for<K: Hash + ?Sized>(&self, key: &K) -> Token {
        self.ring.read().token_for(key)
    }

    /// See [`Ring::replicas_for_key`]
    pub fn replicas_for_key<K: Hash + ?Sized>(&self, key: &K) -> Vec<VNode<N>> {
        self.ring.read().replicas_for_key(key)
    }
}
