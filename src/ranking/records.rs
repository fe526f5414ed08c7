use serde::{Deserialize, Serialize};

use crate::rules::SkillSet;
use crate::scoring::ScoringInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A job seeker as handed over by the persistence layer.
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_vec: Option<Vec<f32>>,
    #[serde(default)]
    pub skills: SkillSet,
    /// Years of experience. `None` is "unknown", not zero.
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub location: String,
}

impl CandidateProfile {
    pub fn new(id: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resume_text: resume_text.into(),
            resume_vec: None,
            skills: SkillSet::new(),
            experience_years: None,
            location: String::new(),
        }
    }

    /// The resume vector, or `None` when absent or empty.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.resume_vec.as_deref().filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A job posting as handed over by the persistence layer.
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_vec: Option<Vec<f32>>,
    #[serde(default)]
    pub skills_required: SkillSet,
    #[serde(default)]
    pub min_exp: Option<u32>,
    #[serde(default)]
    pub location: String,
}

impl JobPosting {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            job_vec: None,
            skills_required: SkillSet::new(),
            min_exp: None,
            location: String::new(),
        }
    }

    /// Text scored against resumes: `"{title} {description}"`.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// The posting vector, or `None` when absent or empty.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.job_vec.as_deref().filter(|v| !v.is_empty())
    }
}

/// Case-insensitive comparison of trimmed locations.
pub fn same_location(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Builds the combiner input for one pair. `posting_text` is [`JobPosting::text`], passed in so
/// callers can compute it once per posting.
pub fn scoring_input<'a>(
    profile: &'a CandidateProfile,
    posting: &'a JobPosting,
    posting_text: &'a str,
) -> ScoringInput<'a> {
    ScoringInput {
        profile_text: &profile.resume_text,
        profile_vec: profile.resume_vec.as_deref(),
        posting_text,
        posting_vec: posting.job_vec.as_deref(),
        profile_skills: &profile.skills,
        posting_skills: &posting.skills_required,
        profile_exp: profile.experience_years,
        posting_min_exp: posting.min_exp,
        same_location: same_location(&profile.location, &posting.location),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A copy of an input record annotated with its match score.
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub match_score: f64,
}

impl<T> Ranked<T> {
    pub fn new(item: T, match_score: f64) -> Self {
        Self { item, match_score }
    }
}
