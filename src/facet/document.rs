//! Document Contract
//!
//! Documents expose their facet-eligible fields through a static table of descriptors,
//! one per field, instead of runtime field discovery.

use super::types::{DocumentId, FacetValue};
use crate::morphology::types::Language;
use serde::{Deserialize, Serialize};

/// Declares one facet-eligible field of `D`.
pub struct FacetDescriptor<D> {
    /// Facet type name. Empty means the field is unclassified.
    pub name: &'static str,
    /// Explode the text value into one facet per normalized word.
    pub extract_words: bool,
    /// Reads the field. `None` skips the field for this document.
    pub read: fn(&D) -> Option<FacetValue>,
}

pub trait Document: Sized + 'static {
    fn id(&self) -> DocumentId;

    fn language(&self) -> Language;

    fn facets() -> &'static [FacetDescriptor<Self>];
}

/// The built-in document variant: a titled text with optional bibliographic fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: DocumentId,
    pub language: Language,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

fn article_title(article: &Article) -> Option<FacetValue> {
    Some(FacetValue::Text(article.title.clone()))
}

fn article_body(article: &Article) -> Option<FacetValue> {
    Some(FacetValue::Text(article.body.clone()))
}

fn article_author(article: &Article) -> Option<FacetValue> {
    article.author.clone().map(FacetValue::Text)
}

fn article_year(article: &Article) -> Option<FacetValue> {
    article.year.map(FacetValue::Integer)
}

const ARTICLE_FACETS: &[FacetDescriptor<Article>] = &[
    FacetDescriptor {
        name: "title",
        extract_words: true,
        read: article_title,
    },
    FacetDescriptor {
        name: "body",
        extract_words: true,
        read: article_body,
    },
    FacetDescriptor {
        name: "author",
        extract_words: false,
        read: article_author,
    },
    FacetDescriptor {
        name: "year",
        extract_words: false,
        read: article_year,
    },
];

impl Document for Article {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn language(&self) -> Language {
        self.language
    }

    fn facets() -> &'static [FacetDescriptor<Self>] {
        ARTICLE_FACETS
    }
}
