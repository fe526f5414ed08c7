//! Shared records for integration tests.

use std::sync::Arc;

use jobmatch::{
    Bm25Params, CandidateProfile, EmbeddingConfig, EmbeddingProvider, JobPosting, MatchEngine,
    MockBehavior, MockSentenceModel, ScoringWeights, SkillSet,
};

pub const MOCK_DIM: usize = 32;

pub fn skills(items: &[&str]) -> SkillSet {
    items.iter().collect()
}

/// Engine with the default config (no model, hash fallback).
pub fn hash_engine() -> MatchEngine {
    MatchEngine::new(jobmatch::Config::default()).unwrap()
}

/// Engine backed by [`MockSentenceModel`] at [`MOCK_DIM`].
pub fn mock_engine(behavior: MockBehavior) -> MatchEngine {
    let provider = EmbeddingProvider::with_model(
        EmbeddingConfig::hash_only().with_dim(MOCK_DIM),
        Box::new(MockSentenceModel::with_behavior(MOCK_DIM, behavior)),
    )
    .unwrap();
    MatchEngine::with_provider(
        Arc::new(provider),
        ScoringWeights::default(),
        Bm25Params::default(),
    )
    .unwrap()
}

pub struct CandidateBuilder {
    profile: CandidateProfile,
}

impl CandidateBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            profile: CandidateProfile::new(id, ""),
        }
    }

    pub fn resume(mut self, text: &str) -> Self {
        self.profile.resume_text = text.to_string();
        self
    }

    pub fn skills(mut self, items: &[&str]) -> Self {
        self.profile.skills = skills(items);
        self
    }

    pub fn experience(mut self, years: u32) -> Self {
        self.profile.experience_years = Some(years);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.profile.location = location.to_string();
        self
    }

    pub fn vector(mut self, v: Vec<f32>) -> Self {
        self.profile.resume_vec = Some(v);
        self
    }

    pub fn build(self) -> CandidateProfile {
        self.profile
    }
}

pub struct PostingBuilder {
    posting: JobPosting,
}

impl PostingBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            posting: JobPosting::new(id, "", ""),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.posting.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.posting.description = description.to_string();
        self
    }

    pub fn skills(mut self, items: &[&str]) -> Self {
        self.posting.skills_required = skills(items);
        self
    }

    pub fn min_exp(mut self, years: u32) -> Self {
        self.posting.min_exp = Some(years);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.posting.location = location.to_string();
        self
    }

    pub fn vector(mut self, v: Vec<f32>) -> Self {
        self.posting.job_vec = Some(v);
        self
    }

    pub fn build(self) -> JobPosting {
        self.posting
    }
}

pub fn data_engineer_posting() -> JobPosting {
    PostingBuilder::new("job-data")
        .title("Senior Data Engineer")
        .description("Design SQL pipelines in Python on Kubernetes and Airflow")
        .skills(&["python", "sql", "airflow"])
        .min_exp(3)
        .location("Berlin")
        .build()
}

pub fn candidate_pool() -> Vec<CandidateProfile> {
    vec![
        CandidateBuilder::new("pastry")
            .resume("Pastry chef, croissants and laminated doughs")
            .skills(&["baking"])
            .experience(10)
            .location("Paris")
            .build(),
        CandidateBuilder::new("data")
            .resume("Data engineer building SQL pipelines in Python with Airflow")
            .skills(&["Python", "SQL", "Airflow"])
            .experience(4)
            .location("berlin")
            .build(),
        CandidateBuilder::new("junior")
            .resume("Junior analyst, some Python")
            .skills(&["python"])
            .experience(1)
            .location("Berlin")
            .build(),
    ]
}
