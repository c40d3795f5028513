//! Cluster Router
//!
//! Greedy least-loaded placement: among the nodes serving at least one eligible endpoint,
//! pick the one whose matched endpoint currently carries the smallest load.

use super::load::LoadStatistic;
use super::types::{DataEndpoint, Route};
use crate::error::RoutingError;
use crate::membership::types::ClusterNode;
use std::collections::HashSet;

/// The endpoints `node` is responsible for: one per advertised address, at the analytics
/// port, duplicates removed, in address order.
pub fn endpoints_of(node: &ClusterNode, analytics_port: u16) -> Vec<DataEndpoint> {
    let mut endpoints: Vec<DataEndpoint> = Vec::with_capacity(node.addresses.len());
    for address in &node.addresses {
        let endpoint = DataEndpoint::new(address.as_str(), analytics_port);
        if !endpoints.contains(&endpoint) {
            endpoints.push(endpoint);
        }
    }
    endpoints
}

/// Returns the least-loaded node serving one of `eligible`.
///
/// On equal load the node that comes first in `nodes` wins.
pub fn get_less_loaded_node<'a>(
    nodes: &'a [ClusterNode],
    load: &LoadStatistic,
    eligible: &HashSet<DataEndpoint>,
    analytics_port: u16,
) -> Result<&'a ClusterNode, RoutingError> {
    let (index, _, _) = least_loaded(nodes, load, eligible, analytics_port)?;
    Ok(&nodes[index])
}

/// Like [`get_less_loaded_node`], also reporting the matched endpoint and its load.
pub fn select_route(
    nodes: &[ClusterNode],
    load: &LoadStatistic,
    eligible: &HashSet<DataEndpoint>,
    analytics_port: u16,
) -> Result<Route, RoutingError> {
    let (index, endpoint, endpoint_load) = least_loaded(nodes, load, eligible, analytics_port)?;
    Ok(Route {
        node: nodes[index].clone(),
        endpoint,
        load: endpoint_load,
    })
}

fn least_loaded(
    nodes: &[ClusterNode],
    load: &LoadStatistic,
    eligible: &HashSet<DataEndpoint>,
    analytics_port: u16,
) -> Result<(usize, DataEndpoint, u64), RoutingError> {
    if nodes.is_empty() {
        return Err(RoutingError::EmptyCluster);
    }

    let mut best: Option<(usize, DataEndpoint, u64)> = None;
    for (index, node) in nodes.iter().enumerate() {
        let matched = endpoints_of(node, analytics_port)
            .into_iter()
            .filter(|endpoint| eligible.contains(endpoint))
            .map(|endpoint| {
                let current = load.get_load(&endpoint);
                (endpoint, current)
            })
            .min_by_key(|(_, current)| *current);

        let Some((endpoint, current)) = matched else {
            continue;
        };

        // Strict comparison keeps the earliest node on ties.
        if best
            .as_ref()
            .is_none_or(|(_, _, best_load)| current < *best_load)
        {
            best = Some((index, endpoint, current));
        }
    }

    best.ok_or_else(|| {
        let mut eligible: Vec<DataEndpoint> = eligible.iter().cloned().collect();
        eligible.sort();
        RoutingError::NoEligibleNode { eligible }
    })
}
