//! Batch ranking of candidates against a posting, or postings against a candidate.

pub mod ranker;
pub mod records;


pub use ranker::BatchRanker;
pub use records::{CandidateProfile, JobPosting, Ranked, same_location, scoring_input};
