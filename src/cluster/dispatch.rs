//! Work Dispatcher
//!
//! Glues placement and load-aware routing together. For every key it finds the replica
//! holders of the owning partition, routes to the least loaded of them, and records the
//! dispatch against the chosen endpoint.

use super::load::LoadStatistic;
use super::partitioner::PartitionManager;
use super::router::select_route;
use super::types::Route;
use crate::error::RoutingError;
use crate::facet::types::DocumentId;
use crate::membership::service::MembershipView;

use std::sync::Arc;

pub struct Dispatcher {
    membership: Arc<dyn MembershipView>,
    partitioner: PartitionManager,
    load: Arc<LoadStatistic>,
    analytics_port: u16,
}

impl Dispatcher {
    pub fn new(
        membership: Arc<dyn MembershipView>,
        partitioner: PartitionManager,
        load: Arc<LoadStatistic>,
        analytics_port: u16,
    ) -> Arc<Self> {
        Arc::new(Self {
            membership,
            partitioner,
            load,
            analytics_port,
        })
    }

    pub fn membership(&self) -> &Arc<dyn MembershipView> {
        &self.membership
    }

    pub fn load(&self) -> &Arc<LoadStatistic> {
        &self.load
    }

    pub fn partition_of(&self, key: &str) -> u32 {
        self.partitioner.get_partition(key)
    }

    /// Picks the node that should handle `key` and charges one unit of load to it.
    pub fn route(&self, key: &str) -> Result<Route, RoutingError> {
        let nodes = self.membership.alive_members();
        let eligible = self
            .partitioner
            .eligible_endpoints(key, &nodes, self.analytics_port);

        let route = select_route(&nodes, &self.load, &eligible, self.analytics_port)?;
        let new_load = self.load.record_dispatch(&route.endpoint);

        tracing::debug!(
            "Routed '{}' (partition {}) to {} via {} (load {} -> {})",
            key,
            self.partition_of(key),
            route.node.id,
            route.endpoint,
            route.load,
            new_load
        );
        Ok(route)
    }

    pub fn dispatch_document(&self, document_id: DocumentId) -> Result<Route, RoutingError> {
        self.route(&document_id.to_string())
    }
}
