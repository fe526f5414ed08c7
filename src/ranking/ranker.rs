use std::cmp::Ordering;
use tracing::debug;

use crate::scoring::{HybridScorer, ScoringError};

use super::records::{CandidateProfile, JobPosting, Ranked, scoring_input};

/// Scores every item against one reference record and sorts by descending score.
///
/// Inputs are never mutated; each result holds a clone. Equal scores keep their input order.
/// Truncation and pagination are left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRanker {
    scorer: HybridScorer,
}

impl BatchRanker {
    pub fn new(scorer: HybridScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &HybridScorer {
        &self.scorer
    }

    pub fn rank_candidates(
        &self,
        candidates: &[CandidateProfile],
        posting: &JobPosting,
    ) -> Result<Vec<Ranked<CandidateProfile>>, ScoringError> {
        let posting_text = posting.text();

        let ranked = candidates
            .iter()
            .map(|candidate| {
                let score = self
                    .scorer
                    .score(&scoring_input(candidate, posting, &posting_text))?;
                Ok(Ranked::new(candidate.clone(), score))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        debug!(
            posting_id = %posting.id,
            num_candidates = ranked.len(),
            "Ranked candidates"
        );

        Ok(sort_descending(ranked))
    }

    pub fn rank_jobs(
        &self,
        profile: &CandidateProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<Ranked<JobPosting>>, ScoringError> {
        let ranked = postings
            .iter()
            .map(|posting| {
                let posting_text = posting.text();
                let score = self
                    .scorer
                    .score(&scoring_input(profile, posting, &posting_text))?;
                Ok(Ranked::new(posting.clone(), score))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        debug!(
            profile_id = %profile.id,
            num_postings = ranked.len(),
            "Ranked postings"
        );

        Ok(sort_descending(ranked))
    }
}

fn sort_descending<T>(mut ranked: Vec<Ranked<T>>) -> Vec<Ranked<T>> {
    // `sort_by` is stable: ties keep input order.
    ranked.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
