use super::*;
use crate::constants::{DEFAULT_EMBEDDING_DIM, DimValidationError};
use crate::embedding::mock::{MockBehavior, MockSentenceModel};
use std::path::PathBuf;

fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

mod config_tests {
    use super::*;

    #[test]
    fn test_embedding_config_default() {
        let config = EmbeddingConfig::default();
        assert!(config.model_path.is_none());
        assert_eq!(config.model_id, "all-MiniLM-L6-v2");
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
        assert_eq!(config.max_words, 500);
        assert_eq!(config.fallback_max_words, 50);
    }

    #[test]
    fn test_embedding_config_new() {
        let config = EmbeddingConfig::new("/models/minilm");
        assert_eq!(config.model_path, Some(PathBuf::from("/models/minilm")));
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_embedding_config_zero_dim_rejected() {
        let err = EmbeddingConfig::hash_only().with_dim(0).validate().unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::Dimension(DimValidationError::ZeroDimension)
        ));
    }

    #[test]
    fn test_embedding_config_zero_word_limit_rejected() {
        let config = EmbeddingConfig {
            max_words: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_embedding_config_empty_model_path_rejected() {
        let config = EmbeddingConfig {
            model_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_embedding_config_missing_model_is_valid() {
        let config = EmbeddingConfig::new("/nonexistent/minilm");
        assert!(config.validate().is_ok());
        assert!(!config.model_available());
    }

    #[test]
    fn test_embedding_config_env_constants() {
        assert_eq!(EmbeddingConfig::ENV_MODEL_PATH, "JOBMATCH_MODEL_PATH");
        assert_eq!(EmbeddingConfig::ENV_MODEL_ID, "JOBMATCH_MODEL_ID");
        assert_eq!(EmbeddingConfig::ENV_EMBEDDING_DIM, "JOBMATCH_EMBEDDING_DIM");
    }
}

mod fallback_tests {
    use super::*;

    fn provider() -> EmbeddingProvider {
        EmbeddingProvider::hash_fallback(EmbeddingConfig::hash_only()).unwrap()
    }

    #[test]
    fn test_load_without_model_path_falls_back() {
        let provider = EmbeddingProvider::load(EmbeddingConfig::hash_only()).unwrap();
        assert_eq!(provider.state(), ProviderState::HashFallback);
        assert!(!provider.is_model_available());
        assert_eq!(provider.fallback_reason(), Some("no model configured"));
    }

    #[test]
    fn test_load_with_missing_model_falls_back() {
        let provider = EmbeddingProvider::load(EmbeddingConfig::new("/nonexistent/minilm")).unwrap();
        assert_eq!(provider.state(), ProviderState::HashFallback);
        assert!(provider.fallback_reason().unwrap().contains("not found"));
    }

    #[test]
    fn test_load_invalid_config_is_fatal() {
        let result = EmbeddingProvider::load(EmbeddingConfig::hash_only().with_dim(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_empty_is_zero_vector() {
        let v = provider().generate("");
        assert_eq!(v.len(), DEFAULT_EMBEDDING_DIM);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_generate_whitespace_is_zero_vector() {
        let v = provider().generate("   \n\t  ");
        assert_eq!(v, vec![0.0; DEFAULT_EMBEDDING_DIM]);
    }

    #[test]
    fn test_generate_dimension_and_norm() {
        let v = provider().generate("Backend engineer, Rust and PostgreSQL");
        assert_eq!(v.len(), DEFAULT_EMBEDDING_DIM);
        assert!((norm(&v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let provider = provider();
        let a = provider.generate("data engineer python spark");
        let b = provider.generate("data engineer python spark");
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_is_deterministic_across_providers() {
        let a = provider().generate("data engineer python spark");
        let b = provider().generate("data engineer python spark");
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_custom_dimension() {
        let provider =
            EmbeddingProvider::hash_fallback(EmbeddingConfig::hash_only().with_dim(64)).unwrap();
        assert_eq!(provider.generate("rust").len(), 64);
        assert_eq!(provider.embedding_dim(), 64);
    }

    #[test]
    fn test_generate_batch_matches_single() {
        let provider = provider();
        let texts = ["python developer", "", "java architect", "  "];
        let batch = provider.generate_batch(&texts);
        assert_eq!(batch.len(), texts.len());
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(&provider.generate(text), vector);
        }
    }

    #[test]
    fn test_generate_batch_empty_input() {
        assert!(provider().generate_batch(&[]).is_empty());
    }

    #[test]
    fn test_fallback_never_counts_degradation() {
        let provider = provider();
        provider.generate("anything at all");
        provider.generate_batch(&["one", "two"]);
        assert_eq!(provider.degraded_calls(), 0);
    }

    #[test]
    fn test_model_id_reported_in_fallback() {
        assert_eq!(provider().model_id(), "all-MiniLM-L6-v2");
    }
}

mod model_tests {
    use super::*;

    fn model_provider(behavior: MockBehavior) -> EmbeddingProvider {
        EmbeddingProvider::with_model(
            EmbeddingConfig::hash_only().with_dim(32),
            Box::new(MockSentenceModel::with_behavior(32, behavior)),
        )
        .unwrap()
    }

    #[test]
    fn test_with_model_is_model_backed() {
        let provider = model_provider(MockBehavior::Succeed);
        assert_eq!(provider.state(), ProviderState::ModelBacked);
        assert!(provider.is_model_available());
        assert!(provider.fallback_reason().is_none());
        assert_eq!(provider.model_id(), "mock-sentence-model");
    }

    #[test]
    fn test_with_model_dimension_mismatch_is_fatal() {
        let result = EmbeddingProvider::with_model(
            EmbeddingConfig::hash_only(),
            Box::new(MockSentenceModel::new(768)),
        );
        match result {
            Err(EmbeddingError::InvalidConfig { reason }) => {
                assert!(reason.contains("768"));
                assert!(reason.contains("384"));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_model_output_used() {
        let provider = model_provider(MockBehavior::Succeed);
        let v = provider.generate("platform engineer");
        let expected = MockSentenceModel::new(32)
            .encode("platform engineer")
            .unwrap();
        assert_eq!(v, expected);
        assert_eq!(provider.degraded_calls(), 0);
    }

    #[test]
    fn test_model_sees_preprocessed_text() {
        let provider = model_provider(MockBehavior::Succeed);
        let v = provider.generate("  platform \n engineer ");
        let expected = MockSentenceModel::new(32)
            .encode("platform engineer")
            .unwrap();
        assert_eq!(v, expected);
    }

    #[test]
    fn test_empty_text_skips_model() {
        let model = MockSentenceModel::new(32);
        let provider = EmbeddingProvider::with_model(
            EmbeddingConfig::hash_only().with_dim(32),
            Box::new(model),
        )
        .unwrap();
        assert_eq!(provider.generate(""), vec![0.0; 32]);
        assert_eq!(provider.degraded_calls(), 0);
    }

    #[test]
    fn test_inference_failure_degrades_to_fallback() {
        let provider = model_provider(MockBehavior::Fail);
        let v = provider.generate("site reliability engineer");
        assert_eq!(v, hash_embedding("site reliability engineer", 32, 50));
        assert_eq!(provider.degraded_calls(), 1);
        assert_eq!(provider.state(), ProviderState::ModelBacked);
    }

    #[test]
    fn test_wrong_dimension_output_degrades() {
        let provider = model_provider(MockBehavior::WrongDimension);
        let v = provider.generate("site reliability engineer");
        assert_eq!(v.len(), 32);
        assert_eq!(provider.degraded_calls(), 1);
    }

    #[test]
    fn test_batch_failure_degrades_every_non_empty_text() {
        let provider = model_provider(MockBehavior::Fail);
        let batch = provider.generate_batch(&["rust", "", "go"]);
        assert_eq!(batch[0], hash_embedding("rust", 32, 50));
        assert_eq!(batch[1], vec![0.0; 32]);
        assert_eq!(batch[2], hash_embedding("go", 32, 50));
        assert_eq!(provider.degraded_calls(), 2);
    }

    #[test]
    fn test_batch_preserves_order() {
        let provider = model_provider(MockBehavior::Succeed);
        let texts = ["alpha", "beta", "", "gamma"];
        let batch = provider.generate_batch(&texts);
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(&provider.generate(text), vector);
        }
    }

    #[test]
    fn test_debug_mentions_backend() {
        let provider = model_provider(MockBehavior::Succeed);
        let debug = format!("{:?}", provider);
        assert!(debug.contains("EmbeddingProvider"));
        assert!(debug.contains("mock-sentence-model"));
    }
}
