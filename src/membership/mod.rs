//! Membership Module
//!
//! The cluster topology as seen by the analytics layer. Discovery and failure detection
//! live outside this crate; they publish members into a `MembershipView`.
//!
//! ## Components
//! - **`types`**: `NodeId`, `NodeState` and `ClusterNode` with its advertised addresses.
//! - **`service`**: The `MembershipView` trait and the in-process `StaticMembership` table.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
