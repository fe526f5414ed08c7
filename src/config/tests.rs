use super::*;
use crate::constants::DEFAULT_EMBEDDING_DIM;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

const ALL_VARS: [&str; 8] = [
    "JOBMATCH_MODEL_PATH",
    "JOBMATCH_MODEL_ID",
    "JOBMATCH_EMBEDDING_DIM",
    "JOBMATCH_BM25_WEIGHT",
    "JOBMATCH_SEMANTIC_WEIGHT",
    "JOBMATCH_RULE_BOOST_WEIGHT",
    "JOBMATCH_BM25_K1",
    "JOBMATCH_BM25_B",
];

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    clear_jobmatch_env();

    // SAFETY: Test code only, serialized with #[serial].
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    clear_jobmatch_env();
    result
}

fn clear_jobmatch_env() {
    // SAFETY: Test code only, serialized with #[serial].
    for key in ALL_VARS {
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.embedding.model_path.is_none());
    assert_eq!(config.embedding.embedding_dim, DEFAULT_EMBEDDING_DIM);
    assert_eq!(config.weights.bm25, 0.4);
    assert_eq!(config.weights.semantic, 0.5);
    assert_eq!(config.weights.rule_boost, 0.1);
    assert_eq!(config.bm25.k1, 1.5);
    assert_eq!(config.bm25.b, 0.75);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    let config = with_env_vars(&[], Config::from_env).expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    let config = with_env_vars(
        &[
            ("JOBMATCH_MODEL_ID", "bge-small-en"),
            ("JOBMATCH_EMBEDDING_DIM", "512"),
            ("JOBMATCH_BM25_WEIGHT", "0.2"),
            ("JOBMATCH_SEMANTIC_WEIGHT", " 0.7 "),
            ("JOBMATCH_RULE_BOOST_WEIGHT", "0.1"),
            ("JOBMATCH_BM25_K1", "1.2"),
            ("JOBMATCH_BM25_B", "0.5"),
        ],
        Config::from_env,
    )
    .expect("should parse overrides");

    assert_eq!(config.embedding.model_id, "bge-small-en");
    assert_eq!(config.embedding.embedding_dim, 512);
    assert_eq!(config.weights.bm25, 0.2);
    assert_eq!(config.weights.semantic, 0.7);
    assert_eq!(config.bm25.k1, 1.2);
    assert_eq!(config.bm25.b, 0.5);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_model_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_str().unwrap().to_string();

    let config = with_env_vars(&[("JOBMATCH_MODEL_PATH", &path)], Config::from_env).unwrap();
    assert_eq!(config.embedding.model_path, Some(dir.path().to_path_buf()));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_blank_model_path_is_none() {
    let config = with_env_vars(&[("JOBMATCH_MODEL_PATH", "   ")], Config::from_env).unwrap();
    assert!(config.embedding.model_path.is_none());
}

#[test]
#[serial]
fn test_from_env_malformed_number() {
    let err = with_env_vars(&[("JOBMATCH_BM25_WEIGHT", "heavy")], Config::from_env).unwrap_err();
    match err {
        ConfigError::InvalidValue { name, value } => {
            assert_eq!(name, "JOBMATCH_BM25_WEIGHT");
            assert_eq!(value, "heavy");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_from_env_malformed_dimension() {
    let result = with_env_vars(&[("JOBMATCH_EMBEDDING_DIM", "-3")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
#[serial]
fn test_from_env_weights_not_summing_parse_but_fail_validation() {
    let config = with_env_vars(&[("JOBMATCH_BM25_WEIGHT", "0.9")], Config::from_env).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights { .. })
    ));
}

#[test]
fn test_validate_missing_model_path() {
    let config = Config {
        embedding: EmbeddingConfig::new("/nonexistent/jobmatch/model"),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
    assert!(config.validate_lenient().is_ok());
}

#[test]
fn test_validate_model_path_is_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        embedding: EmbeddingConfig::new(file.path()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_existing_model_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        embedding: EmbeddingConfig::new(dir.path()),
        ..Default::default()
    };
    assert!(config.embedding.model_available());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_bad_bm25() {
    let config = Config {
        bm25: Bm25Params::new(1.5, 2.0),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBm25Params { .. })
    ));
}

#[test]
fn test_validate_zero_dimension() {
    let config = Config {
        embedding: EmbeddingConfig::hash_only().with_dim(0),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Embedding(_))
    ));
}

#[test]
fn test_error_display() {
    let err = ConfigError::InvalidValue {
        name: "JOBMATCH_BM25_K1",
        value: "x".to_string(),
    };
    assert_eq!(err.to_string(), "invalid value for JOBMATCH_BM25_K1: 'x'");
}
