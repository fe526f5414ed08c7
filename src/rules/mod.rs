//! Rule booster: skills overlap, experience fit and location as one bounded score.

pub mod skills;


pub use skills::SkillSet;

use serde::Serialize;

use crate::constants::{
    DIFFERENT_LOCATION_SCORE, EXPERIENCE_RULE_WEIGHT, EXPERIENCE_SURPLUS_GRACE_YEARS,
    LOCATION_RULE_WEIGHT, NEUTRAL_EXPERIENCE_SCORE, OVERQUALIFIED_MAX_PENALTY,
    OVERQUALIFIED_PENALTY_PER_YEAR, SAME_LOCATION_SCORE, SKILLS_RULE_WEIGHT,
    UNDERQUALIFIED_MAX_PENALTY, UNDERQUALIFIED_PENALTY_PER_YEAR,
};

/// Experience fit in `[0.2, 1.0]`, or `0.5` when either side is unknown.
///
/// Up to two surplus years is a perfect match; beyond that each year costs `0.05` (capped at
/// `0.3`). Each missing year costs `0.2` (capped at `0.8`).
pub fn experience_score(profile_exp: Option<u32>, posting_min_exp: Option<u32>) -> f64 {
    let (Some(profile), Some(required)) = (profile_exp, posting_min_exp) else {
        return NEUTRAL_EXPERIENCE_SCORE;
    };

    if profile >= required {
        let surplus = profile - required;
        if surplus <= EXPERIENCE_SURPLUS_GRACE_YEARS {
            return 1.0;
        }
        let excess = f64::from(surplus - EXPERIENCE_SURPLUS_GRACE_YEARS);
        1.0 - (excess * OVERQUALIFIED_PENALTY_PER_YEAR).min(OVERQUALIFIED_MAX_PENALTY)
    } else {
        let deficit = f64::from(required - profile);
        1.0 - (deficit * UNDERQUALIFIED_PENALTY_PER_YEAR).min(UNDERQUALIFIED_MAX_PENALTY)
    }
}

/// Same-location bonus; a different location is not a hard filter.
pub fn location_score(same_location: bool) -> f64 {
    if same_location {
        SAME_LOCATION_SCORE
    } else {
        DIFFERENT_LOCATION_SCORE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// The three rule sub-scores and their weighted total.
pub struct RuleBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub total: f64,
}

/// Combines structured signals as `0.6·skills + 0.3·experience + 0.1·location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBooster;

impl RuleBooster {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        profile_skills: &SkillSet,
        posting_skills: &SkillSet,
        profile_exp: Option<u32>,
        posting_min_exp: Option<u32>,
        same_location: bool,
    ) -> f64 {
        self.breakdown(
            profile_skills,
            posting_skills,
            profile_exp,
            posting_min_exp,
            same_location,
        )
        .total
    }

    pub fn breakdown(
        &self,
        profile_skills: &SkillSet,
        posting_skills: &SkillSet,
        profile_exp: Option<u32>,
        posting_min_exp: Option<u32>,
        same_location: bool,
    ) -> RuleBreakdown {
        let skills = profile_skills.jaccard(posting_skills);
        let experience = experience_score(profile_exp, posting_min_exp);
        let location = location_score(same_location);

        let total = (SKILLS_RULE_WEIGHT * skills
            + EXPERIENCE_RULE_WEIGHT * experience
            + LOCATION_RULE_WEIGHT * location)
            .clamp(0.0, 1.0);

        RuleBreakdown {
            skills,
            experience,
            location,
            total,
        }
    }
}
