//! Facet Model Module
//!
//! Describes documents as sparse vectors of typed attributes ("facets").
//!
//! ## Overview
//! A document declares which of its fields are facets. Plain fields become one facet each
//! with weight 1. Text fields flagged for word extraction are split into normalized words,
//! and every distinct word becomes a facet weighted by its frequency in that field.
//!
//! ## Submodules
//! - **`types`**: `FacetType`, `Facet`, `FacetRank`, `FacetVector`.
//! - **`document`**: The `Document` trait, facet descriptors and the built-in `Article`.
//! - **`builder`**: `FacetVectorBuilder`, which produces a document's vector.

pub mod builder;
pub mod document;
pub mod types;

#[cfg(test)]
mod tests;
