//! Built-in Analyzers
//!
//! Lightweight rule-based analyzers that stand in for full morphological dictionaries.
//! Each one recognises words of its own alphabet and strips a single inflectional ending
//! to produce the normal form.

use super::types::{Language, Morphology};
use crate::error::MorphologyError;
use std::collections::BTreeSet;

const MIN_STEM_CHARS: usize = 3;

/// Analyzer that knows no words. Cached for languages whose analyzer failed to load.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMorphology;

impl Morphology for NoopMorphology {
    fn normal_forms(&self, _word: &str) -> Result<BTreeSet<String>, MorphologyError> {
        Ok(BTreeSet::new())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMorphology;

impl EnglishMorphology {
    fn stem(word: &str) -> String {
        if let Some(base) = word.strip_suffix("ies")
            && base.len() >= MIN_STEM_CHARS - 1
        {
            return format!("{}y", base);
        }
        if let Some(base) = word.strip_suffix("sses") {
            return format!("{}ss", base);
        }
        for suffix in ["ing", "ed", "ly"] {
            if let Some(base) = word.strip_suffix(suffix)
                && base.len() >= MIN_STEM_CHARS
            {
                return base.to_string();
            }
        }
        if let Some(base) = word.strip_suffix("es")
            && base.len() >= MIN_STEM_CHARS
            && ["s", "x", "z", "ch", "sh"].iter().any(|end| base.ends_with(end))
        {
            return base.to_string();
        }
        if let Some(base) = word.strip_suffix('s')
            && base.len() >= MIN_STEM_CHARS
            && !base.ends_with('s')
        {
            return base.to_string();
        }
        word.to_string()
    }
}

impl Morphology for EnglishMorphology {
    fn normal_forms(&self, word: &str) -> Result<BTreeSet<String>, MorphologyError> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MorphologyError::RejectedWord {
                word: word.to_string(),
                language: Language::En,
            });
        }

        let mut forms = BTreeSet::new();
        forms.insert(Self::stem(&word.to_ascii_lowercase()));
        Ok(forms)
    }

    fn name(&self) -> &'static str {
        "english-suffix"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RussianMorphology;

// Longest endings first so that "ами" wins over "и".
const RUSSIAN_ENDINGS: &[&str] = &[
    "ями", "ами", "ого", "его", "ому", "ему", "ыми", "ими", "ая", "яя", "ое", "ее", "ые", "ие",
    "ой", "ей", "ий", "ый", "ом", "ем", "ах", "ях", "ов", "ев", "а", "я", "о", "е", "ы", "и",
    "у", "ю", "ь",
];

impl RussianMorphology {
    fn is_cyrillic(c: char) -> bool {
        matches!(c, 'а'..='я' | 'ё')
    }

    fn stem(word: &str) -> String {
        let folded: String = word.chars().map(|c| if c == 'ё' { 'е' } else { c }).collect();
        for ending in RUSSIAN_ENDINGS {
            if let Some(base) = folded.strip_suffix(ending)
                && base.chars().count() >= MIN_STEM_CHARS
            {
                return base.to_string();
            }
        }
        folded
    }
}

impl Morphology for RussianMorphology {
    fn normal_forms(&self, word: &str) -> Result<BTreeSet<String>, MorphologyError> {
        let lower = word.to_lowercase();
        if lower.is_empty() || !lower.chars().all(Self::is_cyrillic) {
            return Err(MorphologyError::RejectedWord {
                word: word.to_string(),
                language: Language::Ru,
            });
        }

        let mut forms = BTreeSet::new();
        forms.insert(Self::stem(&lower));
        Ok(forms)
    }

    fn name(&self) -> &'static str {
        "russian-suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(morphology: &dyn Morphology, word: &str) -> String {
        morphology
            .normal_forms(word)
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_english_strips_one_suffix() {
        let en = EnglishMorphology;
        assert_eq!(form(&en, "running"), "runn");
        assert_eq!(form(&en, "tested"), "test");
        assert_eq!(form(&en, "cats"), "cat");
        assert_eq!(form(&en, "boxes"), "box");
        assert_eq!(form(&en, "studies"), "study");
        assert_eq!(form(&en, "classes"), "class");
    }

    #[test]
    fn test_english_keeps_short_and_plain_words() {
        let en = EnglishMorphology;
        assert_eq!(form(&en, "test"), "test");
        assert_eq!(form(&en, "aaaa"), "aaaa");
        assert_eq!(form(&en, "bus"), "bus");
        assert_eq!(form(&en, "glass"), "glass");
    }

    #[test]
    fn test_english_rejects_non_alphabetic() {
        let en = EnglishMorphology;
        assert!(en.normal_forms("word1").is_err());
        assert!(en.normal_forms("книга").is_err());
        assert!(en.normal_forms("").is_err());
    }

    #[test]
    fn test_russian_strips_case_endings() {
        let ru = RussianMorphology;
        assert_eq!(form(&ru, "книгами"), "книг");
        assert_eq!(form(&ru, "книга"), "книг");
        assert_eq!(form(&ru, "ёлка"), "елк");
    }

    #[test]
    fn test_russian_rejects_latin() {
        let ru = RussianMorphology;
        assert!(ru.normal_forms("book").is_err());
    }

    #[test]
    fn test_noop_knows_nothing() {
        assert!(NoopMorphology.normal_forms("anything").unwrap().is_empty());
    }
}
