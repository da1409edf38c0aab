use thiserror::Error;

use crate::ngram::NgramError;
use crate::score::ScoreError;
use crate::segment::SegmentError;
use crate::token::TokenizeError;

/// Unified error for a pipeline invocation: one variant per stage plus the
/// structured-input boundary rejection.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("segmentation failed: {0}")]
    Segment(#[from] SegmentError),

    #[error("tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("n-gram extraction failed: {0}")]
    Ngram(#[from] NgramError),

    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),

    /// The input is not a format the pipeline recognizes.
    #[error("unsupported input: {reason}")]
    UnsupportedInput { reason: String },
}
