//! Error type for typed extraction.
//!
//! Positional failures from the span layer pass through unchanged;
//! coercion failures are reported here with the offending segment and the
//! requested target type.

use pathseg_span::SpanError;

/// Errors from typed extraction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the span layer (out-of-bounds index or missing key).
    #[error(transparent)]
    Span(#[from] SpanError),

    /// The segment holds no well-formed literal of the target type, or the
    /// parsed literal does not fit the target width.
    #[error("cannot convert segment '{segment}' to {target}")]
    Conversion {
        segment: String,
        target: &'static str,
    },
}

impl Error {
    /// Build a conversion failure for `segment` against `target`.
    pub fn conversion(segment: &str, target: &'static str) -> Self {
        Error::Conversion {
            segment: segment.to_string(),
            target,
        }
    }
}
