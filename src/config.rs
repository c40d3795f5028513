//! Node Configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON file given with
//! `--config`, then individual command-line flags. Flags are applied in order, so a flag
//! placed after `--config` overrides the file.

use crate::cluster::partitioner::{DEFAULT_NUM_PARTITIONS, DEFAULT_REPLICATION_FACTOR};
use crate::error::ConfigError;
use crate::membership::types::{ClusterNode, NodeId};
use crate::morphology::types::Language;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_ANALYTICS_PORT: u16 = 8100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeerConfig {
    pub id: String,
    pub addresses: Vec<String>,
}

impl PeerConfig {
    /// Parses `id@addr[,addr...]`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            field: "peer".to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        let (id, addresses) = raw
            .split_once('@')
            .ok_or_else(|| invalid("expected id@address[,address]"))?;
        if id.trim().is_empty() {
            return Err(invalid("empty node id"));
        }
        let addresses: Vec<String> = addresses
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
        if addresses.is_empty() {
            return Err(invalid("no addresses"));
        }

        Ok(Self {
            id: id.trim().to_string(),
            addresses,
        })
    }

    pub fn to_node(&self) -> ClusterNode {
        ClusterNode::new(NodeId(self.id.clone()), self.addresses.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeConfig {
    /// Address the HTTP server listens on. Its IP is also the local node's address.
    pub bind: SocketAddr,
    /// Port every node serves analytics traffic on.
    pub analytics_port: u16,
    pub default_language: Language,
    pub num_partitions: u32,
    pub replication_factor: usize,
    pub report_interval_secs: u64,
    /// Stable id for this node; a random one is generated when absent.
    pub node_id: Option<String>,
    pub peers: Vec<PeerConfig>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_ANALYTICS_PORT)),
            analytics_port: DEFAULT_ANALYTICS_PORT,
            default_language: Language::En,
            num_partitions: DEFAULT_NUM_PARTITIONS,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            report_interval_secs: 5,
            node_id: None,
            peers: vec![],
        }
    }
}

impl NodeConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Builds the configuration from command-line arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = NodeConfig::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| ConfigError::MissingValue(flag.clone()));

            match flag.as_str() {
                "--config" => config = NodeConfig::from_file(&value()?)?,
                "--bind" => config.bind = parse_value("bind", &value()?)?,
                "--analytics-port" => {
                    config.analytics_port = parse_value("analytics_port", &value()?)?
                }
                "--language" => config.default_language = parse_value("language", &value()?)?,
                "--partitions" => config.num_partitions = parse_value("num_partitions", &value()?)?,
                "--replication" => {
                    config.replication_factor = parse_value("replication_factor", &value()?)?
                }
                "--node-id" => config.node_id = Some(value()?),
                "--peer" => config.peers.push(PeerConfig::parse(&value()?)?),
                other => {
                    tracing::warn!("Ignoring unknown argument '{}'", other);
                }
            }
        }

        Ok(config)
    }

    pub fn local_node(&self) -> ClusterNode {
        let id = self
            .node_id
            .clone()
            .map(NodeId)
            .unwrap_or_else(NodeId::new);
        ClusterNode::new(id, vec![self.bind.ip().to_string()])
    }

    pub fn peer_nodes(&self) -> Vec<ClusterNode> {
        self.peers.iter().map(PeerConfig::to_node).collect()
    }
}

fn parse_value<T>(field: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
