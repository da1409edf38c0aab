//! Question/Answer segmentation of raw lines (the pipeline's first layer).
//!
//! A line whose first space-delimited field is the literal `Q` becomes the
//! Question; every other line is an Answer whose second field is its score
//! string. Span offsets preserve a legacy quirk: they are relative to the
//! line, not the document (`[first-space, line-end)` for questions,
//! `[second-space, line-end)` for answers). The `Text` feature carries the
//! remainder the later stages read.

pub mod error;


pub use error::SegmentError;

use tracing::debug;

use crate::document::{
    Annotation, Category, Document, FEATURE_SCORE, FEATURE_TEXT, FEATURE_TYPE, Layer,
};

/// Producer name recorded on the segment layer.
pub const SEGMENTER_NAME: &str = "cliprank.segmenter";

/// Splits raw text into Question/Answer sentence annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Produces one annotation per non-empty line of the document text.
    ///
    /// Fails whole on the first line missing its expected delimiter; no
    /// partial layer is returned.
    pub fn annotate(&self, document: &Document) -> Result<Layer, SegmentError> {
        let mut layer = Layer::new(SEGMENTER_NAME, Category::Sentence);
        let mut answer_count = 0usize;

        for (index, line) in document.text().lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;
            let first = line.find(' ').ok_or_else(|| SegmentError::MalformedLine {
                line_number,
                line: line.to_string(),
            })?;

            if &line[..first] == "Q" {
                let mut annotation =
                    Annotation::new("Question", Category::Sentence, first, line.len());
                annotation.add_feature(FEATURE_TYPE, "Question");
                annotation.add_feature(FEATURE_TEXT, &line[first + 1..]);
                layer.push(annotation);
            } else {
                // Answer lines carry "<id> <score> <text>"; the score is kept
                // as the raw string field.
                let second = line[first + 1..]
                    .find(' ')
                    .map(|offset| first + 1 + offset)
                    .ok_or_else(|| SegmentError::MalformedLine {
                        line_number,
                        line: line.to_string(),
                    })?;
                answer_count += 1;

                let mut annotation = Annotation::new(
                    format!("A{answer_count}"),
                    Category::Sentence,
                    second,
                    line.len(),
                );
                annotation.add_feature(FEATURE_TYPE, "Answer");
                annotation.add_feature(FEATURE_TEXT, &line[second + 1..]);
                annotation.add_feature(FEATURE_SCORE, &line[first + 1..second]);
                layer.push(annotation);
            }
        }

        debug!(
            segments = layer.len(),
            answers = answer_count,
            "segmented document"
        );

        Ok(layer)
    }
}
