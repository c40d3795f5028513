use super::types::{ClusterNode, NodeId, NodeState};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

/// Source of the current cluster membership.
pub trait MembershipView: Send + Sync {
    /// Every known member, ordered by node id.
    fn members(&self) -> Vec<ClusterNode>;

    fn alive_members(&self) -> Vec<ClusterNode> {
        self.members()
            .into_iter()
            .filter(ClusterNode::is_alive)
            .collect()
    }
}

/// In-process membership table fed by configuration or by an external discovery layer.
pub struct StaticMembership {
    pub local_node: ClusterNode,
    members: DashMap<NodeId, ClusterNode>,
}

impl StaticMembership {
    pub fn new(local_node: ClusterNode) -> Arc<Self> {
        let members = DashMap::new();
        members.insert(local_node.id.clone(), local_node.clone());

        Arc::new(Self {
            local_node,
            members,
        })
    }

    pub fn with_peers(local_node: ClusterNode, peers: Vec<ClusterNode>) -> Arc<Self> {
        let membership = Self::new(local_node);
        for peer in peers {
            membership.join(peer);
        }
        membership
    }

    /// Adds or replaces a member.
    pub fn join(&self, node: ClusterNode) {
        info!("Node {} joining with addresses {:?}", node.id, node.addresses);
        self.members.insert(node.id.clone(), node);
        info!("Cluster size now: {}", self.members.len());
    }

    /// Changes a member's state. Returns `false` for an unknown node.
    pub fn set_state(&self, node_id: &NodeId, state: NodeState) -> bool {
        match self.members.get_mut(node_id) {
            Some(mut member) => {
                if member.state != state {
                    info!("Node {} is now {:?}", node_id, state);
                    member.state = state;
                }
                true
            }
            None => {
                tracing::debug!("State change for unknown node {}", node_id);
                false
            }
        }
    }

    pub fn get_member(&self, node_id: &NodeId) -> Option<ClusterNode> {
        self.members.get(node_id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MembershipView for StaticMembership {
    fn members(&self) -> Vec<ClusterNode> {
        let mut members: Vec<ClusterNode> = self
            .members
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }
}
