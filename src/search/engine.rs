use super::similarity::get_similarity;
use super::types::SimilarityHit;
use crate::error::SimilarityError;
use crate::facet::types::{DocumentId, FacetVector};

/// Ranks `candidates` by cosine similarity to `query`.
///
/// Candidates sharing nothing with the query are dropped. Results are ordered by score
/// descending, then by document id, and cut to `limit`.
pub fn rank_similar<'a, I>(
    query: &FacetVector,
    candidates: I,
    limit: usize,
) -> Result<Vec<SimilarityHit>, SimilarityError>
where
    I: IntoIterator<Item = (DocumentId, &'a FacetVector)>,
{
    let mut hits: Vec<SimilarityHit> = Vec::new();
    for (document_id, vector) in candidates {
        let score = get_similarity(query, vector)?;
        if score > 0.0 {
            hits.push(SimilarityHit { document_id, score });
        }
    }

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.document_id.cmp(&b.document_id))
    });
    hits.truncate(limit);
    Ok(hits)
}
