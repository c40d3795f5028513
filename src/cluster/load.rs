//! Node Load Registry
//!
//! Counts work dispatched to each data endpoint. Counters only grow here; decay or reset
//! is left to whoever owns the load policy.

use super::types::DataEndpoint;
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
pub struct LoadStatistic {
    counters: DashMap<DataEndpoint, u64>,
}

static GLOBAL_LOAD: OnceLock<Arc<LoadStatistic>> = OnceLock::new();

impl LoadStatistic {
    pub fn new() -> Self {
        Self::default()
    }

    /// The statistic shared by the whole process. Starts empty.
    pub fn global() -> Arc<LoadStatistic> {
        GLOBAL_LOAD
            .get_or_init(|| Arc::new(LoadStatistic::new()))
            .clone()
    }

    /// Adds one unit of load to `endpoint` and returns the new count.
    ///
    /// The increment happens under the entry's shard lock, so concurrent callers never
    /// lose an update and the new value is visible to every later `get_load`.
    pub fn record_dispatch(&self, endpoint: &DataEndpoint) -> u64 {
        let mut counter = self.counters.entry(endpoint.clone()).or_insert(0);
        *counter = counter.saturating_add(1);
        *counter
    }

    /// Current load of `endpoint`; 0 if nothing was ever dispatched to it.
    pub fn get_load(&self, endpoint: &DataEndpoint) -> u64 {
        self.counters
            .get(endpoint)
            .map(|entry| *entry.value())
            .unwrap_or(0)
    }

    /// All recorded counters, ordered by endpoint.
    pub fn snapshot(&self) -> Vec<(DataEndpoint, u64)> {
        let mut entries: Vec<(DataEndpoint, u64)> = self
            .counters
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
