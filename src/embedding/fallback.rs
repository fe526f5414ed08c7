//! Text preprocessing and the deterministic hash fallback embedding.

use crate::hashing::token_bucket;

/// Trims, collapses internal whitespace and keeps the first `max_words` words.
pub fn preprocess_text(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bag-of-hashed-words embedding.
///
/// Lower-cases, splits on whitespace and keeps at most `max_words` words. Each word adds
/// `1 / word_count` to bucket `blake3(word) % dim`; the result is L2-normalized. Text with no
/// words yields the all-zero vector.
pub fn hash_embedding(text: &str, dim: usize, max_words: usize) -> Vec<f32> {
    let mut features = vec![0.0f32; dim];

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().take(max_words).collect();
    if words.is_empty() {
        return features;
    }

    let weight = 1.0 / words.len() as f32;
    for word in &words {
        if let Some(bucket) = token_bucket(word, dim) {
            features[bucket] += weight;
        }
    }

    l2_normalize(&mut features);
    features
}

/// Scales `v` to unit length in place; zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 && norm.is_finite() {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
