//! Cluster Routing Module
//!
//! Decides which node handles work for a given document or key.
//!
//! ## Core Concepts
//! - **Endpoints**: Each node serves analytics traffic at `address:analytics_port` for every
//!   address it advertises.
//! - **Placement**: `PartitionManager` hashes keys into partitions and assigns each partition
//!   to a run of replica holders.
//! - **Load**: `LoadStatistic` counts dispatches per endpoint.
//! - **Routing**: The router picks the least loaded replica holder; `Dispatcher` applies it
//!   and records the dispatch.

pub mod dispatch;
pub mod handlers;
pub mod load;
pub mod partitioner;
pub mod protocol;
pub mod router;
pub mod types;
