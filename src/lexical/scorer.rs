use tracing::debug;

use super::config::Bm25Params;
use super::tokenizer::TextDocument;
use crate::config::ConfigError;
use crate::constants::BM25_NORMALIZATION_PER_TERM;

/// Corpus-free IDF proxy: `ln(N / doc_count)` over the raw, lower-cased texts.
///
/// `doc_count` counts texts containing `term` as a substring. Returns `0.0` when no text does.
pub fn idf_proxy(term: &str, lowered_docs: &[String]) -> f64 {
    let doc_count = lowered_docs.iter().filter(|doc| doc.contains(term)).count();
    if doc_count == 0 {
        return 0.0;
    }
    (lowered_docs.len() as f64 / doc_count as f64).ln()
}

/// Two-document BM25 ("BM25-lite") between a profile and a posting.
///
/// Not textbook BM25, and kept that way on purpose for score compatibility:
///
/// - query terms are the distinct posting tokens; the profile is the document;
/// - average length is the mean of the two token counts, not a corpus statistic;
/// - IDF is [`idf_proxy`] over just the two texts. A term only contributes when it occurs in
///   the profile, and it always occurs in the posting, so the proxy evaluates to `ln(2/2) = 0`
///   for every contributing term and the sum is `0.0` for every pair;
/// - the sum is divided by `10 × |query_terms|` and clamped to `[0, 1]`; that constant is an
///   empirical scale, not a bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer {
    params: Bm25Params,
}

impl LexicalScorer {
    pub fn new(params: Bm25Params) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &Bm25Params {
        &self.params
    }

    /// Score in `[0, 1]`; `0.0` when either text has no tokens after cleaning.
    pub fn score(&self, profile_text: &str, posting_text: &str) -> f64 {
        let profile = TextDocument::new(profile_text);
        let posting = TextDocument::new(posting_text);
        if profile.is_empty() || posting.is_empty() {
            return 0.0;
        }

        let profile_tf = profile.term_frequencies();
        let query_terms = posting.unique_terms();

        let doc_length = profile.len() as f64;
        let avg_doc_length = (profile.len() + posting.len()) as f64 / 2.0;
        let lowered_docs = [profile_text.to_lowercase(), posting_text.to_lowercase()];

        let Bm25Params { k1, b } = self.params;
        let mut sum = 0.0;
        let mut matched = 0usize;

        for term in &query_terms {
            let Some(&freq) = profile_tf.get(term) else {
                continue;
            };
            matched += 1;

            let tf = freq as f64;
            let idf = idf_proxy(term, &lowered_docs);
            let numerator = tf * (k1 + 1.0);
            let denominator = tf + k1 * (1.0 - b + b * (doc_length / avg_doc_length));
            sum += idf * (numerator / denominator);
        }

        let max_possible = BM25_NORMALIZATION_PER_TERM * query_terms.len() as f64;
        let score = (sum / max_possible).clamp(0.0, 1.0);

        debug!(
            query_terms = query_terms.len(),
            matched,
            doc_length = profile.len(),
            score,
            "BM25-lite score"
        );

        score
    }
}
