use thiserror::Error;

use crate::align::AlignmentError;

/// Errors raised while tokenizing a segment layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The requested prior layer does not exist on the document.
    #[error("prior layer {index} is not present on the document")]
    MissingLayer { index: usize },

    /// A segment annotation is missing a feature the tokenizer needs.
    #[error("annotation {annotation:?} is missing the {feature:?} feature")]
    MissingFeature {
        annotation: String,
        feature: &'static str,
    },

    /// A token could not be located from the forward cursor.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}
