//! Cosine Similarity
//!
//! Compares two facet vectors as sparse vectors over the space of distinct facets.
//! Partial sums are added in ascending order so that `(a, b)` and `(b, a)` produce
//! bit-identical results.

use crate::error::SimilarityError;
use crate::facet::types::FacetVector;

/// Cosine similarity of `a` and `b`, in `[0, 1]`. Zero when either vector has no weight.
pub fn get_similarity(a: &FacetVector, b: &FacetVector) -> Result<f64, SimilarityError> {
    let module_a = get_vector_module(a)?;
    let module_b = get_vector_module(b)?;
    if module_a == 0.0 || module_b == 0.0 {
        return Ok(0.0);
    }

    let scalar = get_scalar_composition(a, b)?;
    // Both norms merge ranks per facet, so the ratio leaves [0, 1] only by rounding.
    Ok((scalar / (module_a * module_b)).clamp(0.0, 1.0))
}

/// Dot product over facets present in both vectors. Ranks sharing a facet are summed
/// per side before multiplying; tie-break indices play no part.
pub fn get_scalar_composition(a: &FacetVector, b: &FacetVector) -> Result<f64, SimilarityError> {
    validate(a)?;
    validate(b)?;

    let weights_a = a.weights();
    let weights_b = b.weights();
    let (small, large) = if weights_a.len() <= weights_b.len() {
        (&weights_a, &weights_b)
    } else {
        (&weights_b, &weights_a)
    };

    let products: Vec<f64> = small
        .iter()
        .filter_map(|(facet, weight)| large.get(facet).map(|other| weight * other))
        .collect();

    Ok(ordered_sum(products))
}

/// Euclidean norm over facets, with ranks sharing a facet summed first as in
/// [`get_scalar_composition`].
pub fn get_vector_module(vector: &FacetVector) -> Result<f64, SimilarityError> {
    validate(vector)?;
    let squares: Vec<f64> = vector
        .weights()
        .into_values()
        .map(|weight| weight * weight)
        .collect();
    Ok(ordered_sum(squares).sqrt())
}

fn validate(vector: &FacetVector) -> Result<(), SimilarityError> {
    match vector
        .iter()
        .find(|rank| !rank.weight.is_finite() || rank.weight < 0.0)
    {
        Some(rank) => Err(SimilarityError::InvalidWeight {
            facet: rank.facet.to_string(),
            weight: rank.weight,
        }),
        None => Ok(()),
    }
}

fn ordered_sum(mut terms: Vec<f64>) -> f64 {
    terms.sort_by(f64::total_cmp);
    terms.iter().sum()
}
