use crate::vnode::VNode;

use super::Ring;

/// Owning iterator over the vnodes of a ring, in ring order
pub struct RingIntoIter<N> {
    vnodes: std::vec::IntoIter<VNode<N>>,
}

impl<N> Iterator for RingIntoIter<N> {
    type Item = VNode<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.vnodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vnodes.size_hint()
    }
}

impl<N> ExactSizeIterator for RingIntoIter<N> {}

impl<N, S> IntoIterator for Ring<N, S> {
    type Item = VNode<N>;

    type IntoIter = RingIntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        RingIntoIter {
            vnodes: self.vnodes.into_iter(),
        }
    }
}

impl<'a, N, S> IntoIterator for &'a Ring<N, S> {
    type Item = &'a VNode<N>;

    type IntoIter = std::slice::Iter<'a, VNode<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vnodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::ring::Ring;
    use crate::vnode::VNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn into_iter() {
        let ring = Ring::new(
            vec!["node1", "node2"],
            vec![vec![3, 1], vec![2]],
            1,
        )
        .unwrap();

        let tokens: Vec<u64> = (&ring).into_iter().map(VNode::token).collect();
        assert_eq!(vec![1, 2, 3], tokens);
        assert_eq!(3, ring.iter().count());

        let mut iter = ring.into_iter();

        assert_eq!(3, iter.len());
        assert_eq!(Some(VNode::new("node1", 1)), iter.next());
        assert_eq!(Some(VNode::new("node2", 2)), iter.next());
        assert_eq!(Some(VNode::new("node1", 3)), iter.next());
        assert_eq!(None, iter.next());
    }
}
