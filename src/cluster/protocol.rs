//! Cluster API Protocol
//!
//! HTTP endpoints and Data Transfer Objects (DTOs) for routing decisions and load
//! inspection.

use super::types::DataEndpoint;
use crate::membership::types::ClusterNode;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Route a key to the least loaded replica holder.
pub const ENDPOINT_ROUTE: &str = "/analytics/route";
/// Recorded load of every endpoint.
pub const ENDPOINT_LOAD: &str = "/analytics/load";
/// Recorded load of one endpoint, addressed as `host:port`.
pub const ENDPOINT_LOAD_ONE: &str = "/analytics/load/:endpoint";
/// Current cluster members.
pub const ENDPOINT_NODES: &str = "/cluster/nodes";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub key: String,
    pub partition: u32,
    pub node: Option<ClusterNode>,
    pub endpoint: Option<DataEndpoint>,
    pub load: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadResponse {
    pub endpoint: String,
    /// `None` when the endpoint could not be parsed.
    pub load: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadEntry {
    pub endpoint: DataEndpoint,
    pub load: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadSnapshotResponse {
    pub entries: Vec<LoadEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodesResponse {
    pub alive_count: usize,
    pub members: Vec<ClusterNode>,
}
