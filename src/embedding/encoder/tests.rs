use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.embedding_dim, ENCODER_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, ENCODER_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_encoder_config_new_resolves_files() {
        let config = EncoderConfig::new("/models/minilm");
        let files = config.files();
        assert_eq!(files.config, PathBuf::from("/models/minilm/config.json"));
        assert_eq!(
            files.weights,
            PathBuf::from("/models/minilm/model.safetensors")
        );
        assert_eq!(
            files.tokenizer,
            PathBuf::from("/models/minilm/tokenizer.json")
        );
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_encoder_config_validation_with_stub() {
        assert!(EncoderConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_encoder_config_validation_empty_dir_no_stub() {
        let err = EncoderConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_encoder_config_validation_zero_seq_len() {
        let err = EncoderConfig::stub()
            .with_max_seq_len(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_encoder_config_validation_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.json"), "{}").expect("write config");

        let err = EncoderConfig::new(dir.path()).validate().unwrap_err();
        match err {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("model.safetensors"));
            }
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_encoder_load_fails_on_missing_model_dir() {
        let result = SentenceEncoder::load(EncoderConfig::new("/nonexistent/encoder"));
        assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
    }
}

mod stub_tests {
    use super::*;

    fn stub_encoder() -> SentenceEncoder {
        SentenceEncoder::stub().expect("stub encoder should load")
    }

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_stub_reports_mode_and_dim() {
        let encoder = stub_encoder();
        assert!(encoder.is_stub());
        assert_eq!(encoder.embedding_dim(), ENCODER_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_embedding_is_unit_length() {
        let encoder = stub_encoder();
        let embedding = encoder.embed("How blockchain works").unwrap();

        assert_eq!(embedding.len(), ENCODER_EMBEDDING_DIM);
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_embedding_is_deterministic() {
        let encoder = stub_encoder();
        let a = encoder.embed("Climate change effects").unwrap();
        let b = encoder.embed("Climate change effects").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_embedding_ignores_case_and_punctuation() {
        let encoder = stub_encoder();
        let a = encoder.embed("Space exploration missions").unwrap();
        let b = encoder.embed("space, EXPLORATION; missions!").unwrap();
        assert!((dot(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_shared_vocabulary_scores_higher() {
        let encoder = stub_encoder();
        let query = encoder.embed("healthy diet tips").unwrap();
        let related = encoder.embed("tips for a healthy diet and exercise").unwrap();
        let unrelated = encoder.embed("quarterly bond yields slipped").unwrap();

        assert!(dot(&query, &related) > dot(&query, &unrelated));
    }

    #[test]
    fn test_stub_embedding_of_symbols_is_zero() {
        let encoder = stub_encoder();
        let embedding = encoder.embed("?!  --").unwrap();
        assert!(embedding.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_encoder_debug_mentions_stub() {
        let debug_str = format!("{:?}", stub_encoder());
        assert!(debug_str.contains("SentenceEncoder"));
        assert!(debug_str.contains("Stub"));
    }
}
