//! Error types shared across the crate.
//!
//! Each concern owns one enum. Morphology errors never leave the registry or the word
//! extractor; similarity and routing errors are returned to the immediate caller.

use crate::cluster::types::DataEndpoint;
use crate::morphology::types::Language;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    #[error("no analyzer available for language '{0}'")]
    UnsupportedLanguage(Language),

    #[error("analyzer for language '{language}' failed to load: {reason}")]
    AnalyzerUnavailable { language: Language, reason: String },

    #[error("word '{word}' is outside the alphabet of language '{language}'")]
    RejectedWord { word: String, language: Language },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("facet '{facet}' carries invalid weight {weight}")]
    InvalidWeight { facet: String, weight: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("cannot route: cluster node list is empty")]
    EmptyCluster,

    #[error("no cluster node serves any of the eligible endpoints {eligible:?}")]
    NoEligibleNode { eligible: Vec<DataEndpoint> },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing value for flag '{0}'")]
    MissingValue(String),

    #[error("invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
