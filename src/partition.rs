use std::fmt::{self, Display};
use std::ops::RangeInclusive;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use crate::vnode::{Token, VNode};

/// Partition is an inclusive range of tokens together with the vnodes that store it
///
/// * `from`, `to` - bounds of the range, both inclusive. `from > to` means the range wraps through token 0
/// * `vnodes` - replica chain responsible for the range. The first vnode opens the range, the following vnodes are its replica successors on the ring
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct Partition<N> {
    from: Token,
    to: Token,
    vnodes: Vec<VNode<N>>,
}

impl<N> Partition<N> {
    pub fn new(from: Token, to: Token, vnodes: Vec<VNode<N>>) -> Partition<N> {
        Partition { from, to, vnodes }
    }

    pub fn from(&self) -> Token {
        self.from
    }

    pub fn to(&self) -> Token {
        self.to
    }

    /// Replica chain of the range, primary first.
    /// Gaps returned by `Ring::excess_partitions` carry an empty chain.
    pub fn vnodes(&self) -> &[VNode<N>] {
        &self.vnodes
    }

    /// true if the range passes through token 0
    pub fn is_wrapping(&self) -> bool {
        self.from > self.to
    }

    /// Returns true if `token` lies within the partition
    pub fn belongs(&self, token: Token) -> bool {
        if self.is_wrapping() {
            token >= self.from || token <= self.to
        } else {
            self.from <= token && token <= self.to
        }
    }

    /// Returns the partition as plain ranges.
    /// A wrapping partition is split at the end of the key space into `from..=u64::MAX` and `0..=to`
    pub fn hash_ranges(&self) -> Vec<RangeInclusive<Token>> {
        if self.is_wrapping() {
            vec![self.from..=Token::MAX, 0..=self.to]
        } else {
            vec![self.from..=self.to]
        }
    }
}

impl<N> Display for Partition<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"{{"from":{},"to":{}}}"#, self.from, self.to)
    }
}
