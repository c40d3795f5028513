use super::router::endpoints_of;
use super::types::DataEndpoint;
use crate::membership::types::ClusterNode;
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const DEFAULT_NUM_PARTITIONS: u32 = 256;
pub const DEFAULT_REPLICATION_FACTOR: usize = 2;

/// Maps keys to partitions and partitions to the nodes holding a replica.
#[derive(Debug, Clone)]
pub struct PartitionManager {
    num_partitions: u32,
    replication_factor: usize,
}

impl PartitionManager {
    pub fn new(num_partitions: u32, replication_factor: usize) -> Self {
        Self {
            num_partitions: num_partitions.max(1),
            replication_factor: replication_factor.max(1),
        }
    }

    pub fn num_partitions(&self) -> u32 {
        self.num_partitions
    }

    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    pub fn get_partition(&self, key: &str) -> u32 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let hash = hasher.finish() as u32;
        hash % self.num_partitions
    }

    /// Replica holders of `partition`: `replication_factor` consecutive nodes in id order,
    /// starting at `partition % nodes.len()`. The first one is the primary.
    pub fn get_replicas<'a>(&self, partition: u32, nodes: &'a [ClusterNode]) -> Vec<&'a ClusterNode> {
        if nodes.is_empty() {
            return vec![];
        }
        let mut sorted: Vec<&ClusterNode> = nodes.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));

        let count = self.replication_factor.min(sorted.len());
        let start = partition as usize % sorted.len();
        (0..count)
            .map(|offset| sorted[(start + offset) % sorted.len()])
            .collect()
    }

    /// Endpoints of every replica holder of the partition owning `key`.
    pub fn eligible_endpoints(
        &self,
        key: &str,
        nodes: &[ClusterNode],
        analytics_port: u16,
    ) -> HashSet<DataEndpoint> {
        let partition = self.get_partition(key);
        self.get_replicas(partition, nodes)
            .into_iter()
            .flat_map(|node| endpoints_of(node, analytics_port))
            .collect()
    }
}

impl Default for PartitionManager {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_PARTITIONS, DEFAULT_REPLICATION_FACTOR)
    }
}
