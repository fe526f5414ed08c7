//! `jobmatch` command-line entrypoint.

mod cli;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use jobmatch::{CandidateProfile, Config, JobPosting, MatchEngine};

use crate::cli::{Cli, Command};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Deserialize)]
struct RankJobsInput {
    profile: CandidateProfile,
    postings: Vec<JobPosting>,
}

#[derive(Deserialize)]
struct RankCandidatesInput {
    posting: JobPosting,
    candidates: Vec<CandidateProfile>,
}

#[derive(Deserialize)]
struct ExplainInput {
    profile: CandidateProfile,
    posting: JobPosting,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let engine = MatchEngine::new(config)?;

    tracing::info!(
        command = cli.command.name(),
        state = ?engine.provider().state(),
        "jobmatch starting"
    );

    let output = match cli.command {
        Command::RankJobs { file } => {
            let mut input: RankJobsInput = read_input(&file)?;
            engine.embed_profile(&mut input.profile);
            engine.embed_postings(&mut input.postings);
            serde_json::to_value(engine.rank_jobs(&input.profile, &input.postings)?)?
        }
        Command::RankCandidates { file } => {
            let mut input: RankCandidatesInput = read_input(&file)?;
            engine.embed_posting(&mut input.posting);
            engine.embed_profiles(&mut input.candidates);
            serde_json::to_value(engine.rank_candidates(&input.candidates, &input.posting)?)?
        }
        Command::Explain { file } => {
            let mut input: ExplainInput = read_input(&file)?;
            engine.embed_profile(&mut input.profile);
            engine.embed_posting(&mut input.posting);
            let explanation = engine.explain_match(&input.profile, &input.posting)?;
            let signals = engine.match_signals(&input.profile, &input.posting)?;
            json!({
                "explanation": explanation,
                "match_percentage": signals.map(|s| s.final_percentage()),
            })
        }
        Command::Embed { text } => {
            let vector = engine.generate_embedding(&text.join(" "));
            json!({
                "state": engine.provider().state(),
                "model_id": engine.provider().model_id(),
                "dimension": vector.len(),
                "embedding": vector,
            })
        }
        Command::Cluster { file, threshold } => {
            let texts: Vec<String> = read_input(&file)?;
            let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
            let vectors = engine.generate_batch_embeddings(&texts);
            let clusters = engine.cluster_embeddings(&vectors, threshold)?;
            json!({
                "threshold": threshold,
                "clusters": clusters,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    let degraded = engine.provider().degraded_calls();
    if degraded > 0 {
        tracing::warn!(degraded, "Some embeddings were produced by the hash fallback");
    }

    Ok(())
}

fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
