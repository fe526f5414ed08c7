//! Vector similarity helpers shared by the combiner and callers.

use std::cmp::Ordering;

use crate::constants::{DimValidationError, validate_embedding_dim};

/// Cosine similarity in `[-1, 1]`.
///
/// Returns `0.0` when either vector is empty, has zero norm, or contains non-finite values.
/// Vectors of different (non-zero) length are a caller error and fail fast.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, DimValidationError> {
    if a.is_empty() || b.is_empty() {
        return Ok(0.0);
    }
    validate_embedding_dim(b.len(), a.len())?;

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    // sqrt of the product keeps sim(v, v) == 1.0 exactly.
    let similarity = dot / (norm_a * norm_b).sqrt();
    if !similarity.is_finite() {
        return Ok(0.0);
    }
    Ok(similarity.clamp(-1.0, 1.0))
}

/// Returns up to `top_k` `(index, similarity)` pairs, most similar first.
///
/// Equal similarities keep their original index order.
pub fn find_most_similar<V: AsRef<[f32]>>(
    query: &[f32],
    candidates: &[V],
    top_k: usize,
) -> Result<Vec<(usize, f64)>, DimValidationError> {
    let mut scored = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| Ok((idx, cosine_similarity(query, candidate.as_ref())?)))
        .collect::<Result<Vec<_>, DimValidationError>>()?;

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(top_k);
    Ok(scored)
}

/// Pairwise similarity matrix. The diagonal is fixed at `1.0`.
pub fn similarity_matrix<V: AsRef<[f32]>>(
    vectors: &[V],
) -> Result<Vec<Vec<f64>>, DimValidationError> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let sim = cosine_similarity(vectors[i].as_ref(), vectors[j].as_ref())?;
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }

    Ok(matrix)
}

/// Greedy single-pass clustering.
///
/// Walks vectors in index order; each unassigned vector seeds a cluster and pulls in every
/// later unassigned vector whose similarity to the seed is at least `threshold`.
pub fn cluster_by_threshold<V: AsRef<[f32]>>(
    vectors: &[V],
    threshold: f64,
) -> Result<Vec<Vec<usize>>, DimValidationError> {
    let n = vectors.len();
    let mut used = vec![false; n];
    let mut clusters = Vec::new();

    for i in 0..n {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut cluster = vec![i];

        for j in (i + 1)..n {
            if used[j] {
                continue;
            }
            if cosine_similarity(vectors[i].as_ref(), vectors[j].as_ref())? >= threshold {
                used[j] = true;
                cluster.push(j);
            }
        }

        clusters.push(cluster);
    }

    Ok(clusters)
}
