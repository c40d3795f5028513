use super::document::{Document, FacetDescriptor};
use super::types::{Facet, FacetRank, FacetType, FacetValue, FacetVector, ValueType};
use crate::morphology::types::Language;
use crate::search::tokenizer::WordExtractor;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Turns documents into facet vectors.
///
/// Facet types are interned per `(name, value type)`, so every facet of one type built by
/// this builder or its clones points at the same `FacetType`.
#[derive(Clone, Default)]
pub struct FacetVectorBuilder {
    extractor: WordExtractor,
    facet_types: Arc<DashMap<(&'static str, ValueType), Arc<FacetType>>>,
}

impl FacetVectorBuilder {
    pub fn new(extractor: WordExtractor) -> Self {
        Self {
            extractor,
            facet_types: Arc::new(DashMap::new()),
        }
    }

    pub fn extractor(&self) -> &WordExtractor {
        &self.extractor
    }

    /// The shared facet type for `name` and `value_type`.
    pub fn facet_type(&self, name: &'static str, value_type: ValueType) -> Arc<FacetType> {
        self.facet_types
            .entry((name, value_type))
            .or_insert_with(|| FacetType::new(name, value_type))
            .value()
            .clone()
    }

    /// Builds the facet vector of `document`, walking its descriptors in declaration order.
    ///
    /// Tie-break indices are handed out sequentially from 0 across the whole vector, so two
    /// builds of the same document state produce identical vectors.
    pub fn build_facet_vector<D: Document>(&self, document: &D) -> FacetVector {
        let mut vector = FacetVector::new();
        let mut next_tie_break = 0u32;

        for descriptor in D::facets() {
            let Some(value) = (descriptor.read)(document) else {
                continue;
            };
            let type_name = facet_type_name(descriptor);

            match value {
                FacetValue::Text(text) if descriptor.extract_words => {
                    self.push_words(
                        &mut vector,
                        &mut next_tie_break,
                        type_name,
                        &text,
                        document.language(),
                    );
                }
                value => {
                    if descriptor.extract_words {
                        tracing::warn!(
                            "Field '{}' of document {} requests word extraction but holds a {:?} value",
                            type_name,
                            document.id(),
                            value.value_type()
                        );
                    }
                    let facet = Facet::new(self.facet_type(type_name, value.value_type()), value);
                    vector.insert(FacetRank::new(facet, 1.0, next_tie_break));
                    next_tie_break += 1;
                }
            }
        }

        tracing::debug!(
            "Built facet vector for document {} with {} ranks",
            document.id(),
            vector.len()
        );
        vector
    }

    fn push_words(
        &self,
        vector: &mut FacetVector,
        next_tie_break: &mut u32,
        type_name: &'static str,
        text: &str,
        language: Language,
    ) {
        let words = self.extractor.extract_words(text, language);

        // First-occurrence order keeps tie-break assignment stable.
        let mut order: Vec<String> = Vec::new();
        let mut frequency: HashMap<String, u32> = HashMap::new();
        for word in words {
            let form = self.extractor.canonical_form(&word, language);
            let count = frequency.entry(form.clone()).or_insert(0);
            if *count == 0 {
                order.push(form);
            }
            *count += 1;
        }

        let word_type = self.facet_type(type_name, ValueType::Word);
        for form in order {
            let weight = frequency.get(&form).copied().unwrap_or(0) as f64;
            let facet = Facet::new(word_type.clone(), FacetValue::Text(form));
            vector.insert(FacetRank::new(facet, weight, *next_tie_break));
            *next_tie_break += 1;
        }
    }
}

fn facet_type_name<D>(descriptor: &FacetDescriptor<D>) -> &'static str {
    if descriptor.name.trim().is_empty() {
        FacetType::UNKNOWN
    } else {
        descriptor.name
    }
}
