use thiserror::Error;

/// Errors raised while scoring answers against the question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The document carries no layers to score.
    #[error("document has no prior layer to score")]
    NoPriorLayer,

    /// The prior layer has no annotations, so there is no question.
    #[error("prior layer contains no question annotation")]
    MissingQuestion,

    /// An annotation lacks the frequency table for the requested order.
    #[error("annotation {annotation:?} has no {order}-gram frequency table")]
    MissingTable { annotation: String, order: usize },

    /// The question's order-n table sums to zero; the overlap ratio is
    /// undefined and must not degrade to NaN or 0.
    #[error("question has zero total {order}-grams; overlap score is undefined")]
    ZeroQuestionTotal { order: usize },
}

/// Errors raised while loading or validating scorer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The order must be a positive integer.
    #[error("invalid n-gram order '{value}': must be at least 1")]
    InvalidOrder { value: String },

    /// The order override could not be parsed as an integer.
    #[error("failed to parse n-gram order '{value}': {source}")]
    OrderParse {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
