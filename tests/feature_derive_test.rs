#[cfg(feature = "derive")]
#[cfg(test)]
mod tests {
    use hashring_topology::{Membership, Partition, VNode};

    #[test]
    fn test_serialize_and_deserialize_partition() {
        let original = Partition::new(
            u64::MAX - 10,
            10,
            vec![VNode::new("node1".to_string(), u64::MAX - 10), VNode::new("node2".to_string(), 11)],
        );

        let serialized = serde_json::to_string(&original).expect("Serialization failed");

        let deserialized: Partition<String> =
            serde_json::from_str(&serialized).expect("Deserialization failed");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_build_ring_from_json_membership() {
        let json = r#"{
            "node_ids": ["node1", "node2"],
            "tokens": [[9223372036854775806, 3074457345618258602], [18446744073709551612]],
            "replication_factor": 2
        }"#;

        let membership: Membership<String> =
            serde_json::from_str(json).expect("Deserialization failed");
        let ring = membership.build().expect("valid membership");

        assert_eq!(3, ring.len());
        assert_eq!(
            vec![
                VNode::new("node2".to_string(), 18446744073709551612),
                VNode::new("node1".to_string(), 3074457345618258602),
            ],
            ring.replicas(18446744073709551611)
        );
    }
}
