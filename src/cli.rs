//! Command-line arguments for the `jobmatch` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobmatch::constants::DEFAULT_CLUSTER_THRESHOLD;

#[derive(Debug, Parser)]
#[command(name = "jobmatch")]
#[command(about = "Rank job seekers against job postings", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(
    after_help = "Configuration is read from JOBMATCH_* environment variables; logging from RUST_LOG."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Rank {\"profile\", \"postings\"} by match score")]
    RankJobs {
        #[arg(help = "JSON input file")]
        file: PathBuf,
    },

    #[command(about = "Rank {\"posting\", \"candidates\"} by match score")]
    RankCandidates {
        #[arg(help = "JSON input file")]
        file: PathBuf,
    },

    #[command(about = "Explain the score of {\"profile\", \"posting\"}")]
    Explain {
        #[arg(help = "JSON input file")]
        file: PathBuf,
    },

    #[command(about = "Print the embedding of the joined text")]
    Embed {
        #[arg(required = true, help = "Text to embed; words are joined with spaces")]
        text: Vec<String>,
    },

    #[command(about = "Group a JSON array of texts by embedding similarity")]
    Cluster {
        #[arg(help = "JSON input file")]
        file: PathBuf,

        #[arg(long, default_value_t = DEFAULT_CLUSTER_THRESHOLD, help = "Minimum cosine similarity to join a cluster")]
        threshold: f64,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RankJobs { .. } => "rank-jobs",
            Self::RankCandidates { .. } => "rank-candidates",
            Self::Explain { .. } => "explain",
            Self::Embed { .. } => "embed",
            Self::Cluster { .. } => "cluster",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank_jobs() {
        let cli = Cli::try_parse_from(["jobmatch", "rank-jobs", "input.json"]).unwrap();
        match cli.command {
            Command::RankJobs { file } => assert_eq!(file, PathBuf::from("input.json")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rank_candidates_and_explain() {
        let cli = Cli::try_parse_from(["jobmatch", "rank-candidates", "a.json"]).unwrap();
        assert_eq!(cli.command.name(), "rank-candidates");

        let cli = Cli::try_parse_from(["jobmatch", "explain", "b.json"]).unwrap();
        assert!(matches!(cli.command, Command::Explain { ref file } if file == &PathBuf::from("b.json")));
    }

    #[test]
    fn test_parse_embed_collects_words() {
        let cli = Cli::try_parse_from(["jobmatch", "embed", "senior", "rust", "engineer"]).unwrap();
        match cli.command {
            Command::Embed { text } => assert_eq!(text.join(" "), "senior rust engineer"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_embed_without_text_is_rejected() {
        let err = Cli::try_parse_from(["jobmatch", "embed"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rank_jobs_rejects_extra_file() {
        let err = Cli::try_parse_from(["jobmatch", "rank-jobs", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_rank_jobs_requires_file() {
        let err = Cli::try_parse_from(["jobmatch", "rank-jobs"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["jobmatch", "score", "a.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_missing_subcommand_shows_help() {
        let err = Cli::try_parse_from(["jobmatch"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_cluster_threshold_defaults() {
        let cli = Cli::try_parse_from(["jobmatch", "cluster", "texts.json"]).unwrap();
        match cli.command {
            Command::Cluster { threshold, .. } => {
                assert_eq!(threshold, DEFAULT_CLUSTER_THRESHOLD)
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli =
            Cli::try_parse_from(["jobmatch", "cluster", "texts.json", "--threshold", "0.9"])
                .unwrap();
        assert!(matches!(cli.command, Command::Cluster { threshold, .. } if threshold == 0.9));
    }
}
