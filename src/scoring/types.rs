use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_BM25_WEIGHT, DEFAULT_RULE_BOOST_WEIGHT, DEFAULT_SEMANTIC_WEIGHT, WEIGHT_SUM_TOLERANCE,
};
use crate::rules::SkillSet;

pub const BM25_DESCRIPTION: &str = "Keyword matching between resume and job description";
pub const SEMANTIC_DESCRIPTION: &str = "Semantic similarity based on meaning and context";
pub const RULE_BOOST_DESCRIPTION: &str = "Rule-based factors (skills, experience, location)";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Linear combiner weights. Must be finite, non-negative and sum to `1.0`.
pub struct ScoringWeights {
    pub bm25: f64,
    pub semantic: f64,
    pub rule_boost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            bm25: DEFAULT_BM25_WEIGHT,
            semantic: DEFAULT_SEMANTIC_WEIGHT,
            rule_boost: DEFAULT_RULE_BOOST_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn new(bm25: f64, semantic: f64, rule_boost: f64) -> Self {
        Self {
            bm25,
            semantic,
            rule_boost,
        }
    }

    pub fn sum(&self) -> f64 {
        self.bm25 + self.semantic + self.rule_boost
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("bm25", self.bm25),
            ("semantic", self.semantic),
            ("rule_boost", self.rule_boost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeights {
                    reason: format!("{name} weight must be a non-negative number, got {value}"),
                });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights {
                reason: format!("weights must sum to 1.0, got {sum}"),
            });
        }

        Ok(())
    }
}

/// Borrowed arguments of one profile/posting comparison.
///
/// `None` or empty vectors contribute a semantic sub-score of `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub profile_text: &'a str,
    pub profile_vec: Option<&'a [f32]>,
    pub posting_text: &'a str,
    pub posting_vec: Option<&'a [f32]>,
    pub profile_skills: &'a SkillSet,
    pub posting_skills: &'a SkillSet,
    pub profile_exp: Option<u32>,
    pub posting_min_exp: Option<u32>,
    pub same_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// The three sub-scores and their clamped combination, all in `[0, 1]`.
pub struct MatchSignals {
    pub bm25: f64,
    pub semantic: f64,
    pub rule_boost: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
}

impl MatchSignals {
    /// Final score on a 0-100 scale.
    pub fn final_percentage(&self) -> f64 {
        self.final_score * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub description: &'static str,
}

impl ComponentScore {
    pub(crate) fn new(score: f64, weight: f64, description: &'static str) -> Self {
        Self {
            score,
            weight,
            weighted_score: score * weight,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub bm25: ComponentScore,
    pub semantic: ComponentScore,
    pub rule_boost: ComponentScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Human-readable rule factors behind the rule boost.
pub struct MatchFactors {
    /// Jaccard similarity of the skill sets.
    pub skills_match: f64,
    pub experience_match: f64,
    pub location_match: bool,
    /// Skills both sides list, sorted.
    pub matching_skills: Vec<String>,
    /// Posting skills the profile lacks, sorted.
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Breakdown of a hybrid score.
pub struct ScoreExplanation {
    pub final_score: f64,
    pub components: ScoreComponents,
    pub factors: MatchFactors,
}
