//! Morphology Registry
//!
//! Process-wide cache mapping a `Language` to its analyzer. Each language is resolved
//! once; the result, including the no-op fallback after a failed resolution, is kept for
//! the lifetime of the registry.

use super::analyzers::{EnglishMorphology, NoopMorphology, RussianMorphology};
use super::types::{Language, Morphology};
use crate::error::MorphologyError;

use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Resolves a language to a concrete analyzer.
///
/// `create` runs while the registry holds the lock on that language's entry, so a factory
/// must not call back into the registry that owns it. Delegating to another registry is
/// fine.
pub trait AnalyzerFactory: Send + Sync {
    fn create(&self, language: Language) -> Result<Arc<dyn Morphology>, MorphologyError>;
}

impl<F> AnalyzerFactory for F
where
    F: Fn(Language) -> Result<Arc<dyn Morphology>, MorphologyError> + Send + Sync,
{
    fn create(&self, language: Language) -> Result<Arc<dyn Morphology>, MorphologyError> {
        self(language)
    }
}

/// The analyzers compiled into this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinAnalyzers;

impl AnalyzerFactory for BuiltinAnalyzers {
    fn create(&self, language: Language) -> Result<Arc<dyn Morphology>, MorphologyError> {
        match language {
            Language::En => Ok(Arc::new(EnglishMorphology)),
            Language::Ru => Ok(Arc::new(RussianMorphology)),
            other => Err(MorphologyError::UnsupportedLanguage(other)),
        }
    }
}

pub struct MorphologyRegistry {
    analyzers: DashMap<Language, Arc<dyn Morphology>>,
    factory: Box<dyn AnalyzerFactory>,
    fallback: Arc<dyn Morphology>,
}

static GLOBAL_REGISTRY: OnceLock<Arc<MorphologyRegistry>> = OnceLock::new();

impl MorphologyRegistry {
    pub fn new() -> Self {
        Self::with_factory(BuiltinAnalyzers)
    }

    pub fn with_factory<F>(factory: F) -> Self
    where
        F: AnalyzerFactory + 'static,
    {
        Self {
            analyzers: DashMap::new(),
            factory: Box::new(factory),
            fallback: Arc::new(NoopMorphology),
        }
    }

    /// The registry shared by the whole process, backed by the built-in analyzers.
    pub fn global() -> Arc<MorphologyRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(MorphologyRegistry::new()))
            .clone()
    }

    /// Returns the analyzer for `language`, constructing it on first use.
    ///
    /// The entry's shard stays locked while the factory runs, so concurrent first lookups
    /// for the same language wait for a single construction and all receive that instance.
    /// A factory that re-enters this registry can deadlock on that lock.
    pub fn get_morphology(&self, language: Language) -> Arc<dyn Morphology> {
        if let Some(existing) = self.analyzers.get(&language) {
            return existing.value().clone();
        }

        self.analyzers
            .entry(language)
            .or_insert_with(|| self.construct(language))
            .value()
            .clone()
    }

    fn construct(&self, language: Language) -> Arc<dyn Morphology> {
        match self.factory.create(language) {
            Ok(morphology) => {
                tracing::info!(
                    "Registered {} analyzer for language '{}'",
                    morphology.name(),
                    language
                );
                morphology
            }
            Err(e) => {
                tracing::warn!(
                    "Morphology for '{}' unavailable, using no-op analyzer: {}",
                    language,
                    e
                );
                self.fallback.clone()
            }
        }
    }

    /// Languages resolved so far, in enum order.
    pub fn cached_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> =
            self.analyzers.iter().map(|entry| *entry.key()).collect();
        languages.sort();
        languages
    }
}

impl Default for MorphologyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
