use crate::facet::document::Article;
use crate::facet::types::DocumentId;
use crate::morphology::types::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityHit {
    pub document_id: DocumentId,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub left: Article,
    pub right: Article,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub left_id: DocumentId,
    pub right_id: DocumentId,
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankRequest {
    pub query: Article,
    pub candidates: Vec<Article>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub query_id: DocumentId,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SimilarityHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsRequest {
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub language: Language,
    pub words: Vec<String>,
}
