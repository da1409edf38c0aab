//! N-gram frequency tables over segment annotations (the pipeline's third
//! layer).
//!
//! For every input annotation the extractor emits one output annotation
//! carrying three tables (`1-Gram`, `2-Gram`, `3-Gram`). An n-gram's surface
//! string is the substring of the sentence text from the window's first token
//! to its last, so the original whitespace and punctuation between tokens is
//! preserved before the fixed punctuation set is stripped.

pub mod error;


pub use error::NgramError;

use tracing::debug;

use crate::align::Cursor;
use crate::document::{
    Annotation, Category, Document, FEATURE_GROUP, FEATURE_TEXT, FrequencyTable, Layer,
    gram_feature,
};

/// Producer name recorded on the n-gram layer.
pub const NGRAM_EXTRACTOR_NAME: &str = "cliprank.ngram";

/// Highest n-gram order extracted.
pub const MAX_ORDER: usize = 3;

/// Characters stripped from n-gram surface strings before counting.
const STRIPPED_PUNCTUATION: [char; 6] = [',', '.', '?', '!', ';', ':'];

/// Builds 1..=3-gram frequency tables for each segment annotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramExtractor;

impl NgramExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts n-gram tables for every annotation of the layer at
    /// `prior_layer`.
    ///
    /// Output identifiers are `<parent-id>-ngram<k>` with `k` counting across
    /// the layer; each output copies its parent's span and back-references it
    /// through the `Group` feature. Zero tokens produce three empty tables,
    /// not an error.
    pub fn annotate(&self, document: &Document, prior_layer: usize) -> Result<Layer, NgramError> {
        let prior = document
            .layer(prior_layer)
            .ok_or(NgramError::MissingLayer { index: prior_layer })?;

        let mut layer = Layer::new(NGRAM_EXTRACTOR_NAME, Category::Sentence);

        for (k, parent) in prior.annotations().iter().enumerate() {
            let text =
                parent
                    .text_feature(FEATURE_TEXT)
                    .ok_or_else(|| NgramError::MissingFeature {
                        annotation: parent.id.clone(),
                        feature: FEATURE_TEXT,
                    })?;

            let mut annotation = Annotation::new(
                format!("{}-ngram{k}", parent.id),
                Category::Sentence,
                parent.start,
                parent.end,
            );
            for order in 1..=MAX_ORDER {
                annotation.add_feature(gram_feature(order), gram_table(text, order)?);
            }
            annotation.add_feature(FEATURE_GROUP, parent.id.clone());
            layer.push(annotation);
        }

        debug!(annotations = layer.len(), "extracted n-gram tables");

        Ok(layer)
    }
}

/// Counts the order-n grams of `text` by sliding a window of n tokens.
///
/// Window count is `max(0, token_count - order + 1)`. The surface substring
/// is located with a forward cursor; the window's last token is searched from
/// the first token's start, mirroring the tokenizer's best-effort alignment.
fn gram_table(text: &str, order: usize) -> Result<FrequencyTable, NgramError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut table = FrequencyTable::new();
    let windows = (words.len() + 1).saturating_sub(order);

    let mut cursor = Cursor::new();
    for z in 0..windows {
        let first = cursor.find(text, words[z])?;
        let mut tail = Cursor::at(first.start);
        let last = tail.find(text, words[z + order - 1])?;

        let surface: String = text[first.start..last.end]
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();
        *table.entry(surface).or_insert(0) += 1;
    }

    Ok(table)
}
