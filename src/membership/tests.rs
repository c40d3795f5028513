//! Membership Module Tests
//!
//! ## Test Scopes
//! - **Data Structures**: Uniqueness of ids and serialization of members.
//! - **Service Logic**: Joining, state changes and the alive view.

#[cfg(test)]
mod tests {
    use crate::membership::service::{MembershipView, StaticMembership};
    use crate::membership::types::{ClusterNode, NodeId, NodeState};
    use std::collections::HashSet;

    fn node(id: &str, address: &str) -> ClusterNode {
        ClusterNode::new(NodeId(id.to_string()), vec![address.to_string()])
    }

    // ============================================================
    // NODE ID TESTS
    // ============================================================

    #[test]
    fn test_node_id_is_unique() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();

        assert_ne!(id1, id2, "Each NodeId should be unique");
    }

    #[test]
    fn test_node_id_hash() {
        let mut set = HashSet::new();
        set.insert(NodeId("node-1".to_string()));
        set.insert(NodeId("node-1".to_string()));
        set.insert(NodeId("node-2".to_string()));

        assert_eq!(set.len(), 2, "HashSet should have 2 unique NodeIds");
    }

    // ============================================================
    // CLUSTER NODE TESTS
    // ============================================================

    #[test]
    fn test_cluster_node_starts_alive() {
        let node = node("n1", "10.0.0.1");

        assert!(node.is_alive());
        assert_eq!(node.addresses, vec!["10.0.0.1"]);
    }

    #[test]
    fn test_cluster_node_serialization() {
        let node = ClusterNode {
            id: NodeId("n1".to_string()),
            addresses: vec!["10.0.0.1".to_string(), "192.168.1.1".to_string()],
            state: NodeState::Suspect,
        };

        let json = serde_json::to_string(&node).expect("Serialization failed");
        let restored: ClusterNode = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored, node);
    }

    // ============================================================
    // MEMBERSHIP SERVICE TESTS
    // ============================================================

    #[test]
    fn test_membership_contains_local_node() {
        let membership = StaticMembership::new(node("local", "127.0.0.1"));

        assert_eq!(membership.len(), 1);
        let alive = membership.alive_members();
        assert_eq!(alive.len(), 1);
        assert_eq!(alive[0].id, membership.local_node.id);
    }

    #[test]
    fn test_members_are_ordered_by_id() {
        let membership = StaticMembership::with_peers(
            node("b", "10.0.0.2"),
            vec![node("c", "10.0.0.3"), node("a", "10.0.0.1")],
        );

        let ids: Vec<String> = membership.members().into_iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_join_replaces_existing_member() {
        let membership = StaticMembership::new(node("local", "127.0.0.1"));
        membership.join(node("peer", "10.0.0.1"));
        membership.join(node("peer", "10.0.0.9"));

        assert_eq!(membership.len(), 2);
        let peer = membership.get_member(&NodeId("peer".to_string())).unwrap();
        assert_eq!(peer.addresses, vec!["10.0.0.9"]);
    }

    #[test]
    fn test_dead_members_leave_alive_view() {
        let membership =
            StaticMembership::with_peers(node("local", "127.0.0.1"), vec![node("peer", "10.0.0.1")]);

        assert!(membership.set_state(&NodeId("peer".to_string()), NodeState::Dead));

        assert_eq!(membership.members().len(), 2);
        assert_eq!(membership.alive_members().len(), 1);
    }

    #[test]
    fn test_set_state_unknown_node() {
        let membership = StaticMembership::new(node("local", "127.0.0.1"));

        assert!(!membership.set_state(&NodeId("ghost".to_string()), NodeState::Dead));
        assert!(membership.get_member(&NodeId("ghost".to_string())).is_none());
    }
}
