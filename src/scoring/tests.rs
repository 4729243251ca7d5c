use super::*;
use crate::embedding::{SentenceEncoder, SentimentClassifier, SentimentLabel};

mod component_tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_max() {
        assert_eq!(ScoreComponent::new(250).value(), 100);
        assert_eq!(ScoreComponent::new(42).value(), 42);
    }

    #[test]
    fn test_from_cosine_endpoints() {
        assert_eq!(ScoreComponent::from_cosine(1.0).value(), 100);
        assert_eq!(ScoreComponent::from_cosine(0.0).value(), 50);
        assert_eq!(ScoreComponent::from_cosine(-1.0).value(), 0);
    }

    #[test]
    fn test_from_cosine_rounds() {
        // (0.62 + 1) / 2 * 100 = 81
        assert_eq!(ScoreComponent::from_cosine(0.62).value(), 81);
        // (0.3 + 1) / 2 * 100 = 65
        assert_eq!(ScoreComponent::from_cosine(0.3).value(), 65);
    }

    #[test]
    fn test_from_cosine_out_of_range_and_nan() {
        assert_eq!(ScoreComponent::from_cosine(1.0001).value(), 100);
        assert_eq!(ScoreComponent::from_cosine(-3.0).value(), 0);
        assert_eq!(ScoreComponent::from_cosine(f32::INFINITY).value(), 100);
        assert_eq!(ScoreComponent::from_cosine(f32::NAN).value(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScoreComponent::new(81).to_string(), "81 / 100");
        assert_eq!(ScoreComponent::MIN.to_string(), "0 / 100");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&ScoreComponent::new(65)).unwrap();
        assert_eq!(json, "65");
    }
}

mod cosine_tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [0.3, -0.4, 0.5];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_and_orthogonal() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap() + 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = cosine_similarity(&[1.0, 0.0], &[1.0]).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput { .. }));
    }
}

mod relevance_tests {
    use super::*;

    #[test]
    fn test_empty_content_skips_embedder() {
        let embedder = FixedEmbedder::new(vec![1.0, 0.0]);
        let scorer = RelevanceScorer::new(embedder.clone());

        let score = scorer.similarity("anything", "").unwrap();

        assert_eq!(score.value(), 0);
        assert!(embedder.calls().is_empty());
    }

    #[test]
    fn test_maps_cosine_to_score() {
        let embedder = FixedEmbedder::new(vec![0.0, 1.0])
            .with_vector("query", vec![1.0, 0.0])
            .with_vector("content", vec![0.62, (1.0f32 - 0.62 * 0.62).sqrt()]);
        let scorer = RelevanceScorer::new(embedder);

        assert_eq!(scorer.similarity("query", "content").unwrap().value(), 81);
    }

    #[test]
    fn test_unrelated_content_scores_midpoint() {
        let embedder = FixedEmbedder::new(vec![0.0, 1.0]).with_vector("query", vec![1.0, 0.0]);
        let scorer = RelevanceScorer::new(embedder);

        assert_eq!(scorer.similarity("query", "other").unwrap().value(), 50);
    }

    #[test]
    fn test_embedder_failure_propagates() {
        let embedder = FixedEmbedder::new(vec![1.0]).failing_on("broken");
        let scorer = RelevanceScorer::new(embedder);

        let err = scorer.similarity("q", "broken").unwrap_err();
        assert!(matches!(err, ScoringError::Embedding(_)));
    }

    #[test]
    fn test_mismatched_embedder_dims_is_invalid_input() {
        let embedder = FixedEmbedder::new(vec![1.0, 0.0]).with_vector("q", vec![1.0]);
        let scorer = RelevanceScorer::new(embedder);

        let err = scorer.similarity("q", "content").unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput { .. }));
    }

    #[test]
    fn test_stub_encoder_ranks_related_text_higher() {
        let scorer = RelevanceScorer::new(SentenceEncoder::stub().unwrap());

        let related = scorer
            .similarity("healthy diet tips", "tips for a healthy diet")
            .unwrap();
        let unrelated = scorer
            .similarity("healthy diet tips", "quarterly bond yields slipped")
            .unwrap();

        assert!(related > unrelated);
        assert_eq!(
            scorer.similarity("same words", "same words").unwrap().value(),
            100
        );
    }
}

mod bias_tests {
    use super::*;

    #[test]
    fn test_label_buckets() {
        assert_eq!(bias_for_label(&SentimentLabel::Positive).value(), 100);
        assert_eq!(bias_for_label(&SentimentLabel::Neutral).value(), 50);
        assert_eq!(bias_for_label(&SentimentLabel::Negative).value(), 30);
        assert_eq!(
            bias_for_label(&SentimentLabel::Other("LABEL_7".into())).value(),
            30
        );
    }

    #[test]
    fn test_empty_content_is_neutral_without_classifier() {
        let classifier = FixedClassifier::new(SentimentLabel::Negative);
        let scorer = BiasScorer::new(classifier.clone());

        assert_eq!(scorer.detect_bias("").unwrap().value(), 50);
        assert!(classifier.inputs().is_empty());
    }

    #[test]
    fn test_uses_classifier_label() {
        let scorer = BiasScorer::new(FixedClassifier::new(SentimentLabel::Positive));
        assert_eq!(scorer.detect_bias("some text").unwrap().value(), 100);

        let scorer = BiasScorer::new(FixedClassifier::new(SentimentLabel::Negative));
        assert_eq!(scorer.detect_bias("some text").unwrap().value(), 30);
    }

    #[test]
    fn test_only_leading_chars_are_classified() {
        let classifier = FixedClassifier::new(SentimentLabel::Neutral);
        let scorer = BiasScorer::new(classifier.clone());
        let content = "é".repeat(600);

        scorer.detect_bias(&content).unwrap();

        let inputs = classifier.inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].chars().count(), 512);
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let scorer = BiasScorer::new(FixedClassifier::failing());
        let err = scorer.detect_bias("text").unwrap_err();
        assert!(matches!(err, ScoringError::Sentiment(_)));
    }

    #[test]
    fn test_leading_chars() {
        assert_eq!(leading_chars("hello", 3), "hel");
        assert_eq!(leading_chars("hi", 10), "hi");
        assert_eq!(leading_chars("日本語テキスト", 2), "日本");
        assert_eq!(leading_chars("", 5), "");
    }

    #[test]
    fn test_stub_classifier_end_to_end() {
        let scorer = BiasScorer::new(SentimentClassifier::stub().unwrap());
        assert_eq!(
            scorer
                .detect_bias("A great, safe and reliable benefit.")
                .unwrap()
                .value(),
            100
        );
        assert_eq!(
            scorer
                .detect_bias("The meeting is on Tuesday.")
                .unwrap()
                .value(),
            50
        );
    }
}

mod aggregate_tests {
    use super::*;

    #[test]
    fn test_final_is_floor_midpoint() {
        let aggregator = ValidityAggregator::new();

        let report = aggregator.aggregate(ScoreComponent::new(81), ScoreComponent::new(50));
        assert_eq!(report.scores(), (81, 50, 65));

        let report = aggregator.aggregate(ScoreComponent::new(0), ScoreComponent::new(50));
        assert_eq!(report.scores(), (0, 50, 25));

        let report = aggregator.aggregate(ScoreComponent::new(65), ScoreComponent::new(30));
        assert_eq!(report.final_score().value(), 47);
    }

    #[test]
    fn test_final_bounded_by_inputs_for_all_pairs() {
        for r in 0..=100u8 {
            for b in 0..=100u8 {
                let f = ValidityAggregator::final_score(ScoreComponent::new(r), ScoreComponent::new(b))
                    .value();
                assert!(f <= 100);
                assert!(f >= r.min(b) && f <= r.max(b));
                assert_eq!(f, ((r as u16 + b as u16) / 2) as u8);
            }
        }
    }

    #[test]
    fn test_aggregate_for_records_source() {
        let report = ValidityAggregator::new().aggregate_for(
            "climate change",
            "https://example.org",
            ScoreComponent::new(70),
            ScoreComponent::new(100),
        );

        assert_eq!(report.query(), Some("climate change"));
        assert_eq!(report.url(), Some("https://example.org"));
        assert_eq!(report.scores(), (70, 100, 85));
    }

    #[test]
    fn test_report_json_shape() {
        let report =
            ValidityAggregator::new().aggregate(ScoreComponent::new(81), ScoreComponent::new(50));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["relevance"], 81);
        assert_eq!(json["bias"], 50);
        assert_eq!(json["final"], 65);
        assert!(json.get("query").is_none());
        assert!(json["evaluated_at"].is_string());
    }
}
