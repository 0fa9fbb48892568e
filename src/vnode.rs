use std::fmt::{self, Display};

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

/// Position on the circular key space `[0, 2^64)`.
pub type Token = u64;

/// One virtual node placement: a storage node owning a single token of the ring.
///
/// A storage node usually owns several vnodes to smooth out the load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct VNode<N> {
    node_id: N,
    token: Token,
}

impl<N> VNode<N> {
    pub fn new(node_id: N, token: Token) -> VNode<N> {
        VNode { node_id, token }
    }

    /// The storage node this vnode belongs to.
    pub fn node_id(&self) -> &N {
        &self.node_id
    }

    pub fn token(&self) -> Token {
        self.token
    }
}

impl<N: Display> Display for VNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"nodeKey":"{}","token":{}}}"#,
            self.node_id, self.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::VNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn accessors_and_equality() {
        let vnode = VNode::new("node1", 42);

        assert_eq!(&"node1", vnode.node_id());
        assert_eq!(42, vnode.token());
        assert_eq!(VNode::new("node1", 42), vnode);
        assert_ne!(VNode::new("node2", 42), vnode);
        assert_ne!(VNode::new("node1", 43), vnode);
    }

    #[test]
    fn display_renders_diagnostic_form() {
        let vnode = VNode::new("node1", u64::MAX);

        assert_eq!(
            r#"{"nodeKey":"node1","token":18446744073709551615}"#,
            vnode.to_string()
        );
    }
}
