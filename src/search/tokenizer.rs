use crate::morphology::registry::MorphologyRegistry;
use crate::morphology::types::Language;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("NON_WORD pattern is valid"));

/// Splits text into words accepted by the morphology of a language.
#[derive(Clone)]
pub struct WordExtractor {
    registry: Arc<MorphologyRegistry>,
}

impl WordExtractor {
    pub fn new(registry: Arc<MorphologyRegistry>) -> Self {
        Self { registry }
    }

    /// Lower-cased words of `text`, in order, duplicates kept.
    pub fn extract_words(&self, text: &str, language: Language) -> Vec<String> {
        let lowered = text.to_lowercase();
        NON_WORD
            .split(&lowered)
            .filter(|token| !token.is_empty())
            .filter(|token| self.is_normal_word(token, language))
            .map(str::to_string)
            .collect()
    }

    pub fn is_normal_word(&self, token: &str, language: Language) -> bool {
        if token.is_empty() || token.chars().all(char::is_numeric) {
            return false;
        }
        !self.get_normal_forms(token, language).is_empty()
    }

    pub fn get_normal_forms(&self, word: &str, language: Language) -> BTreeSet<String> {
        match self.registry.get_morphology(language).normal_forms(word) {
            Ok(forms) => forms,
            Err(e) => {
                tracing::debug!("No normal forms for '{}': {}", word, e);
                BTreeSet::new()
            }
        }
    }

    /// The smallest normal form of `word`, or the word itself when it has none.
    pub fn canonical_form(&self, word: &str, language: Language) -> String {
        self.get_normal_forms(word, language)
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string())
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new(MorphologyRegistry::global())
    }
}
