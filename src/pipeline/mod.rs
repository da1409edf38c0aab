//! Stage orchestration over one document.
//!
//! The four stages run strictly in sequence: segment (layer 0), tokenize
//! (layer 1, reading layer 0), extract n-grams (layer 2, reading layer 0),
//! score (layer 3, reading the last layer). Every stage is a pure function
//! from the document and its prior layers to one new layer; a failing stage
//! appends nothing, and layers already appended stay valid. Because each
//! stage only needs its prior layers, a pipeline can resume from a
//! deserialized container at any point in the chain.

pub mod error;


pub use error::PipelineError;

use tracing::debug;

use crate::document::Document;
use crate::ngram::NgramExtractor;
use crate::score::{OverlapScorer, ScoreConfig};
use crate::segment::Segmenter;
use crate::token::WhitespaceTokenizer;

/// Number of layers a fully annotated document carries.
pub const STAGE_COUNT: usize = 4;

/// The full segment → tokenize → n-gram → score chain.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    segmenter: Segmenter,
    tokenizer: WhitespaceTokenizer,
    extractor: NgramExtractor,
    scorer: OverlapScorer,
}

impl Pipeline {
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            segmenter: Segmenter::new(),
            tokenizer: WhitespaceTokenizer::new(),
            extractor: NgramExtractor::new(),
            scorer: OverlapScorer::new(config),
        }
    }

    /// Runs the whole chain over raw text.
    pub fn run(&self, text: impl Into<String>) -> Result<Document, PipelineError> {
        self.run_remaining(Document::new(text))
    }

    /// Runs whichever stages the document's layer count says are still
    /// missing, appending one layer per stage.
    pub fn run_remaining(&self, mut document: Document) -> Result<Document, PipelineError> {
        while document.layers().len() < STAGE_COUNT {
            let stage = document.layers().len();
            debug!(stage, "running pipeline stage");
            let layer = match stage {
                0 => self.segmenter.annotate(&document)?,
                1 => self.tokenizer.annotate(&document, 0)?,
                2 => self.extractor.annotate(&document, 0)?,
                _ => self.scorer.annotate(&document)?,
            };
            document.push_layer(layer);
        }
        Ok(document)
    }

    /// Resumes the chain from a serialized container.
    ///
    /// Unparsable input is rejected at this boundary with
    /// [`PipelineError::UnsupportedInput`] rather than surfacing a raw
    /// serialization error.
    pub fn resume_json(&self, json: &str) -> Result<Document, PipelineError> {
        let document =
            Document::from_json(json).map_err(|source| PipelineError::UnsupportedInput {
                reason: source.to_string(),
            })?;
        self.run_remaining(document)
    }
}
