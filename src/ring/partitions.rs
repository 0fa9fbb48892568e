use crate::partition::Partition;

use super::Ring;

impl<N, S> Ring<N, S>
where
    N: Clone + PartialEq,
{
    /// Returns all partitions `node_id` stores a replica of
    ///
    /// A vnode is part of the replica chain of `replication_factor` adjacent partitions: the one it opens
    /// and the `replication_factor - 1` partitions before it. For every vnode of the node, in ring order,
    /// these partitions are returned in ring order, each carrying its full replica chain.
    /// Partitions shared by neighbouring vnodes of the same node are returned once per vnode.
    ///
    /// Returns an empty list if the node is unknown
    pub fn partitions(&self, node_id: &N) -> Vec<Partition<N>> {
        let back = self.replication_factor - 1;

        self.vnodes
            .iter()
            .enumerate()
            .filter(|(_, vnode)| vnode.node_id() == node_id)
            .flat_map(move |(idx, _)| {
                self.walk(self.step_back(idx, back), self.replication_factor)
                    .map(move |start| self.partition_at(start))
            })
            .collect()
    }

    /// Returns the gaps between the partitions of `node_id`
    ///
    /// A gap is a token range the node does not store although it lies between two ranges it does store.
    /// After a membership change these are the ranges the node holds data for that now belongs elsewhere.
    /// Gaps carry no replica chain. They are ordered by their first token.
    ///
    /// Returns an empty list if the node is unknown or stores every partition
    pub fn excess_partitions(&self, node_id: &N) -> Vec<Partition<N>> {
        let mut partitions = self.partitions(node_id);
        // overlapping windows of neighbouring vnodes must not show up as gaps
        partitions.sort_by_key(|partition| partition.from());
        partitions.dedup_by_key(|partition| partition.from());

        let len = partitions.len();
        let mut excess = vec![];

        for (idx, current) in partitions.iter().enumerate() {
            let next = &partitions[(idx + 1) % len];
            let gap_start = current.to().wrapping_add(1);

            if gap_start != next.from() {
                excess.push(Partition::new(gap_start, next.from().wrapping_sub(1), vec![]));
            }
        }

        excess
    }
}
