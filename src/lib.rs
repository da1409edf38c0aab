//! cliprank library crate (used by the CLI binary and integration tests).
//!
//! Annotates a document holding a question and scored candidate answers,
//! then ranks the answers by clipped n-gram overlap with the question. The
//! chain is strictly layered: each stage reads the layers it needs and
//! appends exactly one new [`Layer`] to the [`Document`].
//!
//! # Public API Surface
//!
//! - [`Document`], [`Layer`], [`Annotation`], [`FeatureValue`] - the layered
//!   annotation data model
//! - [`Segmenter`] - Question/Answer line segmentation (layer 0)
//! - [`WhitespaceTokenizer`] - offset-preserving tokenization (layer 1)
//! - [`NgramExtractor`] - 1..=3-gram frequency tables (layer 2)
//! - [`OverlapScorer`], [`ScoreConfig`] - clipped-overlap answer scoring
//!   (layer 3)
//! - [`Pipeline`], [`PipelineError`] - the whole chain plus the
//!   structured-input boundary
//! - [`Cursor`] - the forward-only offset cursor shared by the tokenizer and
//!   the n-gram extractor

pub mod align;
pub mod document;
pub mod ngram;
pub mod pipeline;
pub mod score;
pub mod segment;
pub mod token;

pub use align::{AlignmentError, Cursor, Span};
pub use document::{
    Annotation, Category, Document, FEATURE_GROUP, FEATURE_SCORE, FEATURE_TEXT, FEATURE_TYPE,
    FEATURE_WORD, FeatureValue, FrequencyTable, Layer, gram_feature,
};
pub use ngram::{MAX_ORDER, NGRAM_EXTRACTOR_NAME, NgramError, NgramExtractor};
pub use pipeline::{Pipeline, PipelineError, STAGE_COUNT};
pub use score::{ConfigError, DEFAULT_ORDER, OverlapScorer, SCORER_NAME, ScoreConfig, ScoreError};
pub use segment::{SEGMENTER_NAME, SegmentError, Segmenter};
pub use token::{TOKENIZER_NAME, TokenizeError, WhitespaceTokenizer};
