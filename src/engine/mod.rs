//! Match engine: every scoring operation behind one handle.
//!
//! The [`EmbeddingProvider`] is built once and injected; nothing here reaches for global state.
//! All methods take `&self`, so one engine can serve concurrent callers.


use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::constants::DimValidationError;
use crate::embedding::{self, EmbeddingProvider};
use crate::lexical::Bm25Params;
use crate::ranking::{BatchRanker, CandidateProfile, JobPosting, Ranked, scoring_input};
use crate::rules::SkillSet;
use crate::scoring::{
    HybridScorer, MatchSignals, ScoreExplanation, ScoringError, ScoringInput, ScoringWeights,
};

pub struct MatchEngine {
    provider: Arc<EmbeddingProvider>,
    ranker: BatchRanker,
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("provider", &self.provider)
            .field("weights", self.scorer().weights())
            .finish()
    }
}

impl MatchEngine {
    /// Validates `config` and loads the embedding provider.
    ///
    /// A configured but missing model directory is not an error: the provider falls back.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate_lenient()?;
        let provider = EmbeddingProvider::load(config.embedding)?;

        info!(
            state = ?provider.state(),
            model_id = provider.model_id(),
            embedding_dim = provider.embedding_dim(),
            bm25_weight = config.weights.bm25,
            semantic_weight = config.weights.semantic,
            rule_boost_weight = config.weights.rule_boost,
            "Match engine initialized"
        );

        Self::with_provider(Arc::new(provider), config.weights, config.bm25)
    }

    /// Builds an engine around an existing provider (e.g. one shared with other services).
    pub fn with_provider(
        provider: Arc<EmbeddingProvider>,
        weights: ScoringWeights,
        bm25: Bm25Params,
    ) -> Result<Self, ConfigError> {
        let scorer = HybridScorer::new(weights, bm25)?;
        Ok(Self {
            provider,
            ranker: BatchRanker::new(scorer),
        })
    }

    pub fn provider(&self) -> &EmbeddingProvider {
        &self.provider
    }

    pub fn scorer(&self) -> &HybridScorer {
        self.ranker.scorer()
    }

    pub fn generate_embedding(&self, text: &str) -> Vec<f32> {
        self.provider.generate(text)
    }

    pub fn generate_batch_embeddings(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        self.provider.generate_batch(texts)
    }

    pub fn cosine_similarity(&self, a: &[f32], b: &[f32]) -> Result<f64, DimValidationError> {
        embedding::cosine_similarity(a, b)
    }

    pub fn find_most_similar<V: AsRef<[f32]>>(
        &self,
        query: &[f32],
        candidates: &[V],
        top_k: usize,
    ) -> Result<Vec<(usize, f64)>, DimValidationError> {
        embedding::find_most_similar(query, candidates, top_k)
    }

    pub fn similarity_matrix<V: AsRef<[f32]>>(
        &self,
        vectors: &[V],
    ) -> Result<Vec<Vec<f64>>, DimValidationError> {
        embedding::similarity_matrix(vectors)
    }

    pub fn cluster_embeddings<V: AsRef<[f32]>>(
        &self,
        vectors: &[V],
        threshold: f64,
    ) -> Result<Vec<Vec<usize>>, DimValidationError> {
        embedding::cluster_by_threshold(vectors, threshold)
    }

    pub fn calculate_bm25_score(&self, profile_text: &str, posting_text: &str) -> f64 {
        self.scorer().lexical().score(profile_text, posting_text)
    }

    pub fn calculate_rule_boost(
        &self,
        profile_skills: &SkillSet,
        posting_skills: &SkillSet,
        profile_exp: Option<u32>,
        posting_min_exp: Option<u32>,
        same_location: bool,
    ) -> f64 {
        self.scorer().rules().score(
            profile_skills,
            posting_skills,
            profile_exp,
            posting_min_exp,
            same_location,
        )
    }

    pub fn calculate_hybrid_score(&self, input: &ScoringInput<'_>) -> Result<f64, ScoringError> {
        self.scorer().score(input)
    }

    pub fn explain_score(
        &self,
        input: &ScoringInput<'_>,
    ) -> Result<ScoreExplanation, ScoringError> {
        self.scorer().explain(input)
    }

    /// [`explain_score`](Self::explain_score) for typed records.
    pub fn explain_match(
        &self,
        profile: &CandidateProfile,
        posting: &JobPosting,
    ) -> Result<ScoreExplanation, ScoringError> {
        let posting_text = posting.text();
        self.explain_score(&scoring_input(profile, posting, &posting_text))
    }

    /// Sub-scores for one pair, or `None` when either side has no embedding.
    ///
    /// Unlike [`calculate_hybrid_score`](Self::calculate_hybrid_score), which treats a missing
    /// vector as a zero semantic score, this reports that no score was computed.
    pub fn match_signals(
        &self,
        profile: &CandidateProfile,
        posting: &JobPosting,
    ) -> Result<Option<MatchSignals>, ScoringError> {
        if profile.embedding().is_none() || posting.embedding().is_none() {
            debug!(
                profile_id = %profile.id,
                posting_id = %posting.id,
                "Skipping match signals: missing embedding"
            );
            return Ok(None);
        }

        let posting_text = posting.text();
        self.scorer()
            .signals(&scoring_input(profile, posting, &posting_text))
            .map(Some)
    }

    pub fn rank_candidates(
        &self,
        candidates: &[CandidateProfile],
        posting: &JobPosting,
    ) -> Result<Vec<Ranked<CandidateProfile>>, ScoringError> {
        self.ranker.rank_candidates(candidates, posting)
    }

    pub fn rank_jobs(
        &self,
        profile: &CandidateProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<Ranked<JobPosting>>, ScoringError> {
        self.ranker.rank_jobs(profile, postings)
    }

    /// Fills `resume_vec` from `resume_text` if it is absent or empty. Returns `true` if it did.
    pub fn embed_profile(&self, profile: &mut CandidateProfile) -> bool {
        if profile.embedding().is_some() {
            return false;
        }
        profile.resume_vec = Some(self.generate_embedding(&profile.resume_text));
        true
    }

    /// Fills `job_vec` from [`JobPosting::text`] if it is absent or empty. Returns `true` if it
    /// did.
    pub fn embed_posting(&self, posting: &mut JobPosting) -> bool {
        if posting.embedding().is_some() {
            return false;
        }
        posting.job_vec = Some(self.generate_embedding(&posting.text()));
        true
    }

    /// Batch version of [`embed_posting`](Self::embed_posting). Returns how many were filled.
    pub fn embed_postings(&self, postings: &mut [JobPosting]) -> usize {
        let missing: Vec<usize> = postings
            .iter()
            .enumerate()
            .filter(|(_, p)| p.embedding().is_none())
            .map(|(idx, _)| idx)
            .collect();
        if missing.is_empty() {
            return 0;
        }

        let texts: Vec<String> = missing.iter().map(|&idx| postings[idx].text()).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let vectors = self.generate_batch_embeddings(&refs);

        for (idx, vector) in missing.iter().zip(vectors) {
            postings[*idx].job_vec = Some(vector);
        }
        missing.len()
    }

    /// Batch version of [`embed_profile`](Self::embed_profile). Returns how many were filled.
    pub fn embed_profiles(&self, profiles: &mut [CandidateProfile]) -> usize {
        let missing: Vec<usize> = profiles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.embedding().is_none())
            .map(|(idx, _)| idx)
            .collect();
        if missing.is_empty() {
            return 0;
        }

        let refs: Vec<&str> = missing
            .iter()
            .map(|&idx| profiles[idx].resume_text.as_str())
            .collect();
        let vectors = self.generate_batch_embeddings(&refs);

        for (idx, vector) in missing.iter().zip(vectors) {
            profiles[*idx].resume_vec = Some(vector);
        }
        missing.len()
    }
}
