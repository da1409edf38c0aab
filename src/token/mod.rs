//! Whitespace tokenization of segment annotations (the pipeline's second
//! layer).
//!
//! Each token annotation carries its exact `[start, end)` offsets *within the
//! original document text*, resolved with a single forward [`Cursor`] that
//! spans the whole layer: segments arrive in document order, so scanning from
//! the end of the previously found token keeps duplicate words from matching
//! an earlier occurrence.

pub mod error;


pub use error::TokenizeError;

use tracing::debug;

use crate::align::Cursor;
use crate::document::{
    Annotation, Category, Document, FEATURE_GROUP, FEATURE_TEXT, FEATURE_WORD, Layer,
};

/// Producer name recorded on the token layer.
pub const TOKENIZER_NAME: &str = "cliprank.tokenizer";

/// Splits each segment's text into word tokens with document-level offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenizes every annotation of the prior layer at `prior_layer`.
    ///
    /// Token identifiers are `<parent-id>-tok<k>` with `k` counting across
    /// the whole layer; the `Group` feature back-references the parent.
    pub fn annotate(
        &self,
        document: &Document,
        prior_layer: usize,
    ) -> Result<Layer, TokenizeError> {
        let prior = document
            .layer(prior_layer)
            .ok_or(TokenizeError::MissingLayer { index: prior_layer })?;

        let mut layer = Layer::new(TOKENIZER_NAME, Category::Token);
        let mut cursor = Cursor::new();
        let mut next_id = 0usize;

        for parent in prior.annotations() {
            let text =
                parent
                    .text_feature(FEATURE_TEXT)
                    .ok_or_else(|| TokenizeError::MissingFeature {
                        annotation: parent.id.clone(),
                        feature: FEATURE_TEXT,
                    })?;

            for word in text.split_whitespace() {
                let span = cursor.find(document.text(), word)?;

                let mut annotation = Annotation::new(
                    format!("{}-tok{next_id}", parent.id),
                    Category::Token,
                    span.start,
                    span.end,
                );
                next_id += 1;
                annotation.add_feature(FEATURE_WORD, normalize_word(word));
                annotation.add_feature(FEATURE_GROUP, parent.id.clone());
                layer.push(annotation);
            }
        }

        debug!(tokens = layer.len(), segments = prior.len(), "tokenized layer");

        Ok(layer)
    }
}

/// Strips every non-alphanumeric character from a token's surface form.
fn normalize_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}
