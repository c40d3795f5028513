//! Morphology Module
//!
//! Per-language morphological analysis used to decide which tokens are real words and to
//! reduce them to a normal form.
//!
//! ## Components
//! - **`types`**: `Language` and the `Morphology` capability trait.
//! - **`analyzers`**: Built-in rule-based analyzers plus the no-op analyzer.
//! - **`registry`**: The memoizing `MorphologyRegistry`. A language whose analyzer cannot be
//!   built is served by the no-op analyzer instead of failing the caller.

pub mod analyzers;
pub mod registry;
pub mod types;
