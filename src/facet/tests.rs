//! Facet Module Tests
//!
//! ## Test Scopes
//! - **Types**: Equality rules of facet types, facets and ranks.
//! - **Vector**: Set semantics and weight aggregation.
//! - **Builder**: Opaque fields, word explosion with term frequency, unknown names,
//!   determinism.

#[cfg(test)]
mod tests {
    use crate::facet::builder::FacetVectorBuilder;
    use crate::facet::document::{Article, Document, FacetDescriptor};
    use crate::facet::types::{
        DocumentId, Facet, FacetRank, FacetType, FacetValue, FacetVector, ValueType,
    };
    use crate::morphology::registry::MorphologyRegistry;
    use crate::morphology::types::Language;
    use crate::search::tokenizer::WordExtractor;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn builder() -> FacetVectorBuilder {
        FacetVectorBuilder::new(WordExtractor::new(Arc::new(MorphologyRegistry::new())))
    }

    fn word(field: &str, value: &str) -> Facet {
        Facet::new(
            FacetType::new(field, ValueType::Word),
            FacetValue::Text(value.to_string()),
        )
    }

    fn article(language: Language, title: &str, body: &str) -> Article {
        Article {
            id: DocumentId(1),
            language,
            title: title.to_string(),
            body: body.to_string(),
            author: Some("Ann Lee".to_string()),
            year: Some(2020),
        }
    }

    // A document with an unnamed field and a misconfigured word field.
    struct Reading {
        id: u64,
        sensor: String,
        value: i64,
    }

    fn reading_sensor(r: &Reading) -> Option<FacetValue> {
        Some(FacetValue::Text(r.sensor.clone()))
    }

    fn reading_value(r: &Reading) -> Option<FacetValue> {
        Some(FacetValue::Integer(r.value))
    }

    const READING_FACETS: &[FacetDescriptor<Reading>] = &[
        FacetDescriptor {
            name: "",
            extract_words: false,
            read: reading_sensor,
        },
        FacetDescriptor {
            name: "value",
            extract_words: true,
            read: reading_value,
        },
    ];

    impl Document for Reading {
        fn id(&self) -> DocumentId {
            DocumentId(self.id)
        }

        fn language(&self) -> Language {
            Language::En
        }

        fn facets() -> &'static [FacetDescriptor<Self>] {
            READING_FACETS
        }
    }

    // ============================================================
    // TYPE TESTS
    // ============================================================

    #[test]
    fn test_facet_type_equality_uses_name_and_value_type() {
        assert_eq!(
            FacetType::new("title", ValueType::Word),
            FacetType::new("title", ValueType::Word)
        );
        assert_ne!(
            FacetType::new("title", ValueType::Word),
            FacetType::new("title", ValueType::Text)
        );
        assert_ne!(
            FacetType::new("title", ValueType::Word),
            FacetType::new("body", ValueType::Word)
        );
    }

    #[test]
    fn test_facets_from_independent_types_are_equal() {
        let mut set = HashSet::new();
        set.insert(word("body", "rust"));
        set.insert(word("body", "rust"));
        set.insert(word("title", "rust"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_facet_type() {
        let unknown = FacetType::unknown(ValueType::Text);
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "UNKNOWN");
    }

    // ============================================================
    // VECTOR TESTS
    // ============================================================

    #[test]
    fn test_vector_rejects_duplicate_rank() {
        let mut vector = FacetVector::new();

        assert!(vector.insert(FacetRank::new(word("body", "rust"), 1.0, 0)));
        // Same facet and tie-break, different weight: still a duplicate.
        assert!(!vector.insert(FacetRank::new(word("body", "rust"), 5.0, 0)));

        assert_eq!(vector.len(), 1);
        assert_eq!(vector.iter().next().unwrap().weight, 1.0);
    }

    #[test]
    fn test_vector_keeps_repeated_facet_with_distinct_tie_break() {
        let vector: FacetVector = vec![
            FacetRank::new(word("body", "rust"), 1.0, 0),
            FacetRank::new(word("body", "rust"), 2.0, 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(vector.len(), 2);
        assert_eq!(vector.weights().get(&word("body", "rust")), Some(&3.0));
    }

    // ============================================================
    // BUILDER TESTS
    // ============================================================

    #[test]
    fn test_builder_explodes_words_with_term_frequency() {
        let doc = article(Language::En, "Rust rust programming", "Programs are tested");

        let vector = builder().build_facet_vector(&doc);
        let weights = vector.weights();

        assert_eq!(vector.len(), 7);
        assert_eq!(weights.get(&word("title", "rust")), Some(&2.0));
        assert_eq!(weights.get(&word("title", "programm")), Some(&1.0));
        assert_eq!(weights.get(&word("body", "program")), Some(&1.0));
        assert_eq!(weights.get(&word("body", "test")), Some(&1.0));
        assert_eq!(weights.get(&word("body", "are")), Some(&1.0));
    }

    #[test]
    fn test_builder_opaque_fields_have_weight_one() {
        let doc = article(Language::En, "Title", "Body");

        let vector = builder().build_facet_vector(&doc);
        let weights = vector.weights();

        let author = Facet::new(
            FacetType::new("author", ValueType::Text),
            FacetValue::Text("Ann Lee".to_string()),
        );
        let year = Facet::new(
            FacetType::new("year", ValueType::Integer),
            FacetValue::Integer(2020),
        );
        assert_eq!(weights.get(&author), Some(&1.0));
        assert_eq!(weights.get(&year), Some(&1.0));
    }

    #[test]
    fn test_builder_skips_absent_fields() {
        let mut doc = article(Language::En, "Title", "Body");
        doc.author = None;
        doc.year = None;

        let vector = builder().build_facet_vector(&doc);

        assert!(vector.iter().all(|rank| rank.facet.facet_type.value_type() == ValueType::Word));
        assert_eq!(vector.len(), 2);
    }

    #[test]
    fn test_builder_assigns_distinct_tie_breaks() {
        let doc = article(Language::En, "alpha beta gamma", "alpha delta");

        let vector = builder().build_facet_vector(&doc);
        let tie_breaks: HashSet<u32> = vector.iter().map(|rank| rank.tie_break).collect();

        assert_eq!(tie_breaks.len(), vector.len());
        assert_eq!(tie_breaks, (0..vector.len() as u32).collect::<HashSet<u32>>());
    }

    #[test]
    fn test_builder_is_deterministic() {
        let doc = article(Language::En, "Distributed search engines", "search search index");
        let builder = builder();

        let first = builder.build_facet_vector(&doc);
        let second = builder.build_facet_vector(&doc);

        assert!(first.same_weights(&second));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_builder_without_analyzer_keeps_only_opaque_facets() {
        let doc = article(Language::De, "Das Haus", "Ein kleines Haus");

        let vector = builder().build_facet_vector(&doc);

        assert_eq!(vector.len(), 2);
        assert!(vector.iter().all(|rank| rank.facet.facet_type.value_type() != ValueType::Word));
    }

    #[test]
    fn test_builder_russian_words_collapse_to_normal_form() {
        let doc = article(Language::Ru, "Книга", "книгами книги");

        let vector = builder().build_facet_vector(&doc);
        let weights = vector.weights();

        assert_eq!(weights.get(&word("title", "книг")), Some(&1.0));
        assert_eq!(weights.get(&word("body", "книг")), Some(&2.0));
    }

    #[test]
    fn test_builder_unnamed_field_uses_unknown_type() {
        let reading = Reading {
            id: 9,
            sensor: "thermo".to_string(),
            value: 21,
        };

        let vector = builder().build_facet_vector(&reading);

        assert_eq!(vector.len(), 2);
        let unknown = Facet::new(
            FacetType::unknown(ValueType::Text),
            FacetValue::Text("thermo".to_string()),
        );
        assert_eq!(vector.weights().get(&unknown), Some(&1.0));
    }

    #[test]
    fn test_builder_shares_facet_types_across_builds() {
        let builder = builder();
        let first = builder.build_facet_vector(&article(Language::En, "Rust", "Search engines"));
        let second = builder
            .clone()
            .build_facet_vector(&article(Language::En, "Index", "Ranking"));

        let author_type = |vector: &FacetVector| {
            vector
                .iter()
                .find(|rank| rank.facet.facet_type.name() == "author")
                .map(|rank| rank.facet.facet_type.clone())
                .unwrap()
        };
        assert!(Arc::ptr_eq(&author_type(&first), &author_type(&second)));

        let body_types: Vec<Arc<FacetType>> = first
            .iter()
            .filter(|rank| rank.facet.facet_type.name() == "body")
            .map(|rank| rank.facet.facet_type.clone())
            .collect();
        assert_eq!(body_types.len(), 2);
        assert!(Arc::ptr_eq(&body_types[0], &body_types[1]));
        assert!(Arc::ptr_eq(
            &body_types[0],
            &builder.facet_type("body", ValueType::Word)
        ));
    }

    #[test]
    fn test_builder_word_extraction_on_non_text_is_opaque() {
        let reading = Reading {
            id: 9,
            sensor: "thermo".to_string(),
            value: 21,
        };

        let vector = builder().build_facet_vector(&reading);

        let value = Facet::new(
            FacetType::new("value", ValueType::Integer),
            FacetValue::Integer(21),
        );
        assert_eq!(vector.weights().get(&value), Some(&1.0));
    }
}
