use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeState {
    Alive,
    Suspect,
    Dead,
}

/// A member of the cluster as reported by the membership source.
///
/// `addresses` are the hosts the node advertises. The node serves analytics traffic on
/// each of them at the cluster-wide analytics port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterNode {
    pub id: NodeId,
    pub addresses: Vec<String>,
    pub state: NodeState,
}

impl ClusterNode {
    pub fn new(id: NodeId, addresses: Vec<String>) -> Self {
        Self {
            id,
            addresses,
            state: NodeState::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == NodeState::Alive
    }
}
