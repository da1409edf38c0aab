//! Forward-only offset resolution shared by the tokenizer and the n-gram
//! extractor.
//!
//! A [`Cursor`] is explicit scan state threaded through a stage: each
//! successful find locates the needle at or after the cursor and advances the
//! cursor to the end of the match, so repeated needles resolve to successive
//! occurrences. The contract is best-effort: a needle that also occurs
//! earlier in the haystack than its true position (inside punctuation-heavy
//! text, say) can still pull the scan to the wrong occurrence.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::AlignmentError;

/// A located needle: half-open byte span `[start, end)` in the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Forward-only scan position over a haystack string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Cursor at the start of the haystack.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Cursor at an arbitrary byte offset.
    pub fn at(position: usize) -> Self {
        Self { position }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Locates `needle` at or after the current position and advances past it.
    pub fn find(&mut self, haystack: &str, needle: &str) -> Result<Span, AlignmentError> {
        match haystack
            .get(self.position..)
            .and_then(|rest| rest.find(needle))
        {
            Some(offset) => {
                let start = self.position + offset;
                let end = start + needle.len();
                self.position = end;
                Ok(Span { start, end })
            }
            None => Err(AlignmentError::TokenNotFound {
                token: needle.to_string(),
                position: self.position,
            }),
        }
    }
}
