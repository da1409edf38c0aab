use thiserror::Error;

/// Errors raised while resolving token offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// The token does not occur at or after the cursor position.
    #[error("cannot locate token {token:?} at or after byte offset {position}")]
    TokenNotFound { token: String, position: usize },
}
