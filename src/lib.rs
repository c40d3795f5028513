//! Faceted Document Analytics Cluster Library
//!
//! This library crate defines the core modules of an analytics node. It serves as the
//! foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`morphology`**: Per-language analyzers that reduce words to normal forms, cached in
//!   a process-wide registry that builds each analyzer at most once.
//! - **`facet`**: Documents described as weighted facets, and the builder that turns a
//!   document into a facet vector.
//! - **`search`**: Word extraction, cosine similarity between facet vectors, and ranking.
//! - **`membership`**: The set of known cluster nodes and their liveness.
//! - **`cluster`**: Partition placement, per-endpoint load counters, and least-loaded
//!   routing of work to nodes.
//! - **`config`**: Node settings from defaults, a JSON file, and command-line flags.
//! - **`error`**: Error enums shared by the modules above.

pub mod cluster;
pub mod config;
pub mod error;
pub mod facet;
pub mod membership;
pub mod morphology;
pub mod search;
