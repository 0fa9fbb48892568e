//! Consistent hashing topology ring for a decentralized storage cluster
//! The ring is built from one snapshot of the cluster membership: every storage node owns one or more tokens (vnodes)
//! on a circular 64 bit key space, and the cluster shares one replication factor
//!
//! For every token (or hashed content key) the ring answers which vnodes store it: the first vnode at or after the token
//! and its successors, `replication_factor` vnodes in total
//! For every node the ring answers which token ranges (partitions) it stores, and which ranges lie between its partitions
//! without belonging to it (excess partitions). Excess partitions hold data that should be moved away after the cluster changed
//!
//! Rings are never extended. Single vnodes can be removed, any other change builds a new ring from a new snapshot.
//! Use [`SyncRing`] to share a ring between threads and to swap in rebuilt rings atomically
//!
//! # Examples
//!
//! ```
//! use hashring_topology::{Membership, Partition, VNode};
//!
//! let ring = Membership::new(2)
//!     .with_node("node1", vec![100, 300])
//!     .with_node("node2", vec![200, 400])
//!     .build()
//!     .unwrap();
//!
//! // token 150 is stored on the vnode at 200 and its successor
//! assert_eq!(
//!     vec![VNode::new("node2", 200), VNode::new("node1", 300)],
//!     ring.replicas(150)
//! );
//!
//! // every node stores every partition, nothing to move away
//! assert_eq!(Vec::<Partition<&str>>::new(), ring.excess_partitions(&"node1"));
//! ```

mod error;
mod membership;
mod partition;
mod ring;
mod sync;
mod vnode;

pub use error::{RingError, RingResult};
pub use membership::Membership;
pub use partition::Partition;
pub use ring::{DefaultHashBuilder, Ring, RingIntoIter};
pub use sync::SyncRing;
pub use vnode::{Token, VNode};
