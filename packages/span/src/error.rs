//! Error type for segment and span location.
//!
//! Errors at this level are positional only. Nothing here knows about
//! target types or parsing - that belongs in higher layers.

/// Errors from locating segments or spans within a path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The requested index has no corresponding segment in the path.
    ///
    /// Reported for single-segment lookups past either end of the path,
    /// for span boundaries that cannot be resolved, and for spans whose
    /// resolved start lies after their resolved end.
    #[error("no segment at index {index}")]
    OutOfBounds { index: isize },

    /// No segment equals the key, or the key match is the final segment
    /// and nothing follows it.
    #[error("no segment follows key '{key}'")]
    KeyNotFound { key: String },
}

impl SpanError {
    pub(crate) fn out_of_bounds(index: isize) -> Self {
        SpanError::OutOfBounds { index }
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        SpanError::KeyNotFound {
            key: key.to_string(),
        }
    }
}
