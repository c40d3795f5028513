use crate::error::MorphologyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Languages the analytics pipeline knows about.
///
/// Every language has a slot in the morphology registry, but only some have a built-in
/// analyzer. A language without one degrades to the no-op analyzer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "de" => Ok(Language::De),
            other => Err(format!("unknown language code '{}'", other)),
        }
    }
}

/// A morphological analyzer for one language.
///
/// Given a lower-cased word, returns its normal (dictionary) forms. An empty set means the
/// analyzer does not recognise the word.
pub trait Morphology: Send + Sync {
    fn normal_forms(&self, word: &str) -> Result<BTreeSet<String>, MorphologyError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
