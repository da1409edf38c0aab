use thiserror::Error;

/// Errors raised while segmenting raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// A non-empty line is missing the delimiter its shape requires (no
    /// space at all, or an answer line without a second field).
    #[error("malformed line {line_number}: expected delimiter not found in {line:?}")]
    MalformedLine { line_number: usize, line: String },
}
