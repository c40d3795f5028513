use super::engine::rank_similar;
use super::similarity::get_similarity;
use super::types::{
    RankRequest, RankResponse, SimilarityRequest, SimilarityResponse, WordsRequest, WordsResponse,
};
use crate::facet::builder::FacetVectorBuilder;
use crate::facet::types::FacetVector;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

const DEFAULT_RANK_LIMIT: usize = 10;

pub async fn handle_similarity(
    Extension(builder): Extension<Arc<FacetVectorBuilder>>,
    Json(req): Json<SimilarityRequest>,
) -> (StatusCode, Json<SimilarityResponse>) {
    let left = builder.build_facet_vector(&req.left);
    let right = builder.build_facet_vector(&req.right);

    match get_similarity(&left, &right) {
        Ok(score) => {
            tracing::debug!(
                "Similarity {} <-> {} = {:.4}",
                req.left.id,
                req.right.id,
                score
            );
            (
                StatusCode::OK,
                Json(SimilarityResponse {
                    left_id: req.left.id,
                    right_id: req.right.id,
                    score: Some(score),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::error!("Failed to compare documents: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SimilarityResponse {
                    left_id: req.left.id,
                    right_id: req.right.id,
                    score: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_rank(
    Extension(builder): Extension<Arc<FacetVectorBuilder>>,
    Json(req): Json<RankRequest>,
) -> (StatusCode, Json<RankResponse>) {
    let query = builder.build_facet_vector(&req.query);
    let candidates: Vec<(_, FacetVector)> = req
        .candidates
        .iter()
        .map(|article| (article.id, builder.build_facet_vector(article)))
        .collect();

    let ranked = rank_similar(
        &query,
        candidates.iter().map(|(id, vector)| (*id, vector)),
        usize::MAX,
    );

    match ranked {
        Ok(hits) => {
            let total_count = hits.len();
            let limit = req.limit.unwrap_or(DEFAULT_RANK_LIMIT);
            let results: Vec<_> = hits.into_iter().take(limit).collect();
            (
                StatusCode::OK,
                Json(RankResponse {
                    query_id: req.query.id,
                    total_count,
                    count: results.len(),
                    results,
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::error!("Failed to rank candidates: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(RankResponse {
                    query_id: req.query.id,
                    total_count: 0,
                    count: 0,
                    results: vec![],
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_words(
    Extension(builder): Extension<Arc<FacetVectorBuilder>>,
    Json(req): Json<WordsRequest>,
) -> Json<WordsResponse> {
    let words = builder.extractor().extract_words(&req.text, req.language);
    Json(WordsResponse {
        language: req.language,
        words,
    })
}
