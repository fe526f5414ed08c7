use tracing::debug;

use crate::config::ConfigError;
use crate::embedding::cosine_similarity;
use crate::lexical::{Bm25Params, LexicalScorer};
use crate::rules::RuleBooster;

use super::error::ScoringError;
use super::types::{
    BM25_DESCRIPTION, ComponentScore, MatchFactors, MatchSignals, RULE_BOOST_DESCRIPTION,
    SEMANTIC_DESCRIPTION, ScoreComponents, ScoreExplanation, ScoringInput, ScoringWeights,
};

/// Weighted linear combination of the lexical, semantic and rule sub-scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridScorer {
    weights: ScoringWeights,
    lexical: LexicalScorer,
    rules: RuleBooster,
}

impl HybridScorer {
    /// Validates weights and BM25 parameters; either being invalid is fatal.
    pub fn new(weights: ScoringWeights, bm25: Bm25Params) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self {
            weights,
            lexical: LexicalScorer::new(bm25)?,
            rules: RuleBooster::new(),
        })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn lexical(&self) -> &LexicalScorer {
        &self.lexical
    }

    pub fn rules(&self) -> &RuleBooster {
        &self.rules
    }

    /// Cosine similarity rescaled from `[-1, 1]` to `[0, 1]`.
    ///
    /// An absent or empty vector on either side yields `0.0`.
    pub fn semantic_score(
        &self,
        profile_vec: Option<&[f32]>,
        posting_vec: Option<&[f32]>,
    ) -> Result<f64, ScoringError> {
        match (profile_vec, posting_vec) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
                let sim = cosine_similarity(a, b)?;
                Ok((sim + 1.0) / 2.0)
            }
            _ => Ok(0.0),
        }
    }

    /// `clamp(w_bm25·bm25 + w_sem·semantic + w_rule·rule_boost, 0, 1)`.
    pub fn combine(&self, bm25: f64, semantic: f64, rule_boost: f64) -> f64 {
        let raw = self.weights.bm25 * bm25
            + self.weights.semantic * semantic
            + self.weights.rule_boost * rule_boost;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    pub fn signals(&self, input: &ScoringInput<'_>) -> Result<MatchSignals, ScoringError> {
        let bm25 = self.lexical.score(input.profile_text, input.posting_text);
        let semantic = self.semantic_score(input.profile_vec, input.posting_vec)?;
        let rule_boost = self.rules.score(
            input.profile_skills,
            input.posting_skills,
            input.profile_exp,
            input.posting_min_exp,
            input.same_location,
        );
        let final_score = self.combine(bm25, semantic, rule_boost);

        debug!(bm25, semantic, rule_boost, final_score, "Hybrid score computed");

        Ok(MatchSignals {
            bm25,
            semantic,
            rule_boost,
            final_score,
        })
    }

    pub fn score(&self, input: &ScoringInput<'_>) -> Result<f64, ScoringError> {
        Ok(self.signals(input)?.final_score)
    }

    /// Recomputes every sub-score and returns the per-component breakdown.
    pub fn explain(&self, input: &ScoringInput<'_>) -> Result<ScoreExplanation, ScoringError> {
        let signals = self.signals(input)?;
        let rules = self.rules.breakdown(
            input.profile_skills,
            input.posting_skills,
            input.profile_exp,
            input.posting_min_exp,
            input.same_location,
        );

        Ok(ScoreExplanation {
            final_score: signals.final_score,
            components: ScoreComponents {
                bm25: ComponentScore::new(signals.bm25, self.weights.bm25, BM25_DESCRIPTION),
                semantic: ComponentScore::new(
                    signals.semantic,
                    self.weights.semantic,
                    SEMANTIC_DESCRIPTION,
                ),
                rule_boost: ComponentScore::new(
                    signals.rule_boost,
                    self.weights.rule_boost,
                    RULE_BOOST_DESCRIPTION,
                ),
            },
            factors: MatchFactors {
                skills_match: rules.skills,
                experience_match: rules.experience,
                location_match: input.same_location,
                matching_skills: input.profile_skills.matching(input.posting_skills),
                missing_skills: input.posting_skills.missing_from(input.profile_skills),
            },
        })
    }
}
