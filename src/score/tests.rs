use super::*;
use serial_test::serial;
use std::env;

use crate::ngram::NgramExtractor;
use crate::segment::Segmenter;

const SAMPLE: &str = "Q What color is the sky\nA1 0.9 the sky is blue\nA2 0.2 grass is green";

fn with_ngram_layer(text: &str) -> Document {
    let mut document = Document::new(text);
    let layer = Segmenter::new().annotate(&document).expect("segment");
    document.push_layer(layer);
    let layer = NgramExtractor::new().annotate(&document, 0).expect("ngram");
    document.push_layer(layer);
    document
}

fn score_of(layer: &Layer, id: &str) -> f64 {
    layer
        .annotation(id)
        .and_then(|a| a.feature(FEATURE_SCORE))
        .and_then(|f| f.as_number())
        .expect("score feature")
}

#[test]
fn worked_example_scores_at_order_one() {
    let document = with_ngram_layer(SAMPLE);
    let scorer = OverlapScorer::new(ScoreConfig::default());
    let layer = scorer.annotate(&document).expect("score");

    assert_eq!(layer.producer, SCORER_NAME);
    assert_eq!(layer.contains, Category::Token);
    assert_eq!(layer.len(), 2);

    // total_question = 5; A1 overlaps on {the, sky, is}, A2 on {is}.
    assert!((score_of(&layer, "A1-ngram1") - 0.6).abs() < 1e-12);
    assert!((score_of(&layer, "A2-ngram2") - 0.2).abs() < 1e-12);
}

#[test]
fn group_is_the_answer_identifier_prefix() {
    let document = with_ngram_layer(SAMPLE);
    let layer = OverlapScorer::new(ScoreConfig::default())
        .annotate(&document)
        .expect("score");

    let a1 = layer.annotation("A1-ngram1").unwrap();
    assert_eq!(a1.text_feature(FEATURE_GROUP), Some("A1"));
    let a2 = layer.annotation("A2-ngram2").unwrap();
    assert_eq!(a2.text_feature(FEATURE_GROUP), Some("A2"));
}

#[test]
fn scores_are_bounded_by_one() {
    // An answer repeating question terms gains no extra credit: counts are
    // clipped at the question's own counts.
    let document = with_ngram_layer("Q the sky\nA1 0.9 the sky the sky the sky");
    let layer = OverlapScorer::new(ScoreConfig::default())
        .annotate(&document)
        .expect("score");

    let score = score_of(&layer, "A1-ngram1");
    assert!(score > 0.0 && score <= 1.0);
    assert!((score - 1.0).abs() < 1e-12);
}

#[test]
fn bigram_order_scores_joined_surfaces() {
    let document = with_ngram_layer(SAMPLE);
    let scorer = OverlapScorer::new(ScoreConfig::new(2).expect("order 2"));
    let layer = scorer.annotate(&document).expect("score");

    // Question bigrams: {What color, color is, is the, the sky} → total 4.
    // A1 "the sky is blue" shares only "the sky".
    assert!((score_of(&layer, "A1-ngram1") - 0.25).abs() < 1e-12);
    assert_eq!(score_of(&layer, "A2-ngram2"), 0.0);
}

#[test]
fn zero_token_question_is_a_division_error() {
    let document = with_ngram_layer("Q \nA1 0.9 the sky is blue");
    let err = OverlapScorer::new(ScoreConfig::default())
        .annotate(&document)
        .unwrap_err();
    assert_eq!(err, ScoreError::ZeroQuestionTotal { order: 1 });
}

#[test]
fn order_without_table_names_annotation_and_order() {
    let document = with_ngram_layer(SAMPLE);
    let scorer = OverlapScorer::new(ScoreConfig::new(4).expect("order 4"));
    let err = scorer.annotate(&document).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MissingTable {
            annotation: "Question-ngram0".to_string(),
            order: 4,
        }
    );
}

#[test]
fn empty_document_and_empty_layer_are_errors() {
    let document = Document::new(SAMPLE);
    let err = OverlapScorer::new(ScoreConfig::default())
        .annotate(&document)
        .unwrap_err();
    assert_eq!(err, ScoreError::NoPriorLayer);

    let mut document = Document::new(SAMPLE);
    document.push_layer(Layer::new("test.stage", Category::Sentence));
    let err = OverlapScorer::new(ScoreConfig::default())
        .annotate(&document)
        .unwrap_err();
    assert_eq!(err, ScoreError::MissingQuestion);
}

#[test]
fn config_rejects_order_zero() {
    assert!(matches!(
        ScoreConfig::new(0),
        Err(ConfigError::InvalidOrder { .. })
    ));
}

#[test]
#[serial]
fn config_from_env_uses_default_without_override() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("CLIPRANK_SCORE_ORDER") };

    let config = ScoreConfig::from_env().expect("defaults");
    assert_eq!(config.order, DEFAULT_ORDER);
}

#[test]
#[serial]
fn config_from_env_reads_override() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("CLIPRANK_SCORE_ORDER", "3") };

    let config = ScoreConfig::from_env().expect("override");
    assert_eq!(config.order, 3);

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("CLIPRANK_SCORE_ORDER") };
}

#[test]
#[serial]
fn config_from_env_rejects_garbage_and_zero() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("CLIPRANK_SCORE_ORDER", "three") };
    assert!(matches!(
        ScoreConfig::from_env(),
        Err(ConfigError::OrderParse { .. })
    ));

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("CLIPRANK_SCORE_ORDER", "0") };
    assert!(matches!(
        ScoreConfig::from_env(),
        Err(ConfigError::InvalidOrder { .. })
    ));

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("CLIPRANK_SCORE_ORDER") };
}
