use std::hash::{BuildHasher, Hash};
use tracing::debug;

use crate::vnode::{Token, VNode};

use super::Ring;

impl<N, S> Ring<N, S> {
    /// Remove the vnode placed on `token` from the ring.
    ///
    /// The remaining vnodes keep their order. Returns false and leaves the ring untouched
    /// if no vnode owns `token`.
    pub fn remove_vnode(&mut self, token: Token) -> bool {
        match self.vnodes.iter().position(|vnode| vnode.token() == token) {
            Some(idx) => {
                self.vnodes.remove(idx);
                debug!(token, remaining = self.vnodes.len(), "removed vnode from ring");
                true
            }
            None => false,
        }
    }
}

impl<N, S> Ring<N, S>
where
    N: Clone + PartialEq,
    S: BuildHasher,
{
    /// Map any hashable key (a content id, a piece hash, ...) onto a token of the ring
    pub fn token_for<K: Hash + ?Sized>(&self, key: &K) -> Token {
        self.hash_builder.hash_one(key)
    }

    /// Returns the vnodes responsible for storing `key`, see [`Ring::replicas`]
    pub fn replicas_for_key<K: Hash + ?Sized>(&self, key: &K) -> Vec<VNode<N>> {
        self.replicas(self.token_for(key))
    }
}
