use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic type of the value a facet carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    /// A single normalized word produced by exploding a text field.
    Word,
    Integer,
    Boolean,
}

/// A class of facets. Equality and hashing cover both the name and the value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacetType {
    name: String,
    value_type: ValueType,
}

impl FacetType {
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn new(name: impl Into<String>, value_type: ValueType) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            value_type,
        })
    }

    pub fn unknown(value_type: ValueType) -> Arc<Self> {
        Self::new(Self::UNKNOWN, value_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_unknown(&self) -> bool {
        self.name == Self::UNKNOWN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FacetValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl FacetValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            FacetValue::Text(_) => ValueType::Text,
            FacetValue::Integer(_) => ValueType::Integer,
            FacetValue::Boolean(_) => ValueType::Boolean,
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Text(text) => f.write_str(text),
            FacetValue::Integer(n) => write!(f, "{}", n),
            FacetValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// One typed attribute of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facet {
    pub facet_type: Arc<FacetType>,
    pub value: FacetValue,
}

impl Facet {
    pub fn new(facet_type: Arc<FacetType>, value: FacetValue) -> Self {
        Self { facet_type, value }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.facet_type.name(), self.value)
    }
}

/// One dimension of a facet vector.
///
/// Identity is `(facet, tie_break)`; the weight is not part of it, so two ranks for the
/// same facet only coexist in a vector when their tie-break indices differ.
#[derive(Debug, Clone)]
pub struct FacetRank {
    pub facet: Facet,
    pub weight: f64,
    pub tie_break: u32,
}

impl FacetRank {
    pub fn new(facet: Facet, weight: f64, tie_break: u32) -> Self {
        Self {
            facet,
            weight,
            tie_break,
        }
    }
}

impl PartialEq for FacetRank {
    fn eq(&self, other: &Self) -> bool {
        self.tie_break == other.tie_break && self.facet == other.facet
    }
}

impl Eq for FacetRank {}

impl Hash for FacetRank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.facet.hash(state);
        self.tie_break.hash(state);
    }
}

/// The set of ranks describing one document.
#[derive(Debug, Clone, Default)]
pub struct FacetVector {
    ranks: HashSet<FacetRank>,
}

impl FacetVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rank. Returns `false`, leaving the vector unchanged, if a rank with the same
    /// facet and tie-break index is already present.
    pub fn insert(&mut self, rank: FacetRank) -> bool {
        self.ranks.insert(rank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetRank> {
        self.ranks.iter()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Total weight per distinct facet, ignoring tie-break indices.
    pub fn weights(&self) -> HashMap<&Facet, f64> {
        let mut weights: HashMap<&Facet, f64> = HashMap::with_capacity(self.ranks.len());
        for rank in &self.ranks {
            *weights.entry(&rank.facet).or_insert(0.0) += rank.weight;
        }
        weights
    }

    /// Structural comparison over `(facet, weight)`, independent of tie-break indices.
    pub fn same_weights(&self, other: &FacetVector) -> bool {
        self.weights() == other.weights()
    }
}

impl FromIterator<FacetRank> for FacetVector {
    fn from_iter<I: IntoIterator<Item = FacetRank>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}
