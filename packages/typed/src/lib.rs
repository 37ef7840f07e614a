//! pathseg-typed: typed value extraction from slash-delimited paths.
//!
//! Layers coercion on top of [`pathseg_span`]'s positional lookup. Numeric
//! coercion is deliberately permissive: the longest well-formed leading
//! literal in the segment is parsed and trailing garbage is ignored, so
//! `/orders/17abc` still yields order 17. See [`FromSegment`] for the
//! exact policy per type.
//!
//! The span operations are re-exported here under this crate's [`Error`]
//! so callers work with a single error type.
//!
//! # Example
//!
//! ```rust
//! use pathseg_typed::{value_at, value_after, span_after};
//!
//! let path = "/users/42/ratio/0.85/active/true";
//!
//! let id: u32 = value_at(path, 1).unwrap();
//! assert_eq!(id, 42);
//!
//! let ratio: f64 = value_after(path, "ratio").unwrap();
//! assert_eq!(ratio, 0.85);
//!
//! let active: bool = value_after(path, "active").unwrap();
//! assert!(active);
//!
//! assert_eq!(span_after(path, "users", 2).unwrap(), "/42/ratio");
//! ```

mod coerce;
mod error;
mod literal;

pub use coerce::FromSegment;
pub use error::Error;
pub use pathseg_span::SpanError;

/// Extract the segment at a signed index and coerce it.
///
/// # Examples
///
/// ```
/// use pathseg_typed::value_at;
///
/// assert_eq!(value_at::<u32>("/users/42", -1).unwrap(), 42);
/// assert_eq!(value_at::<String>("/users/42", 0).unwrap(), "users");
/// assert!(value_at::<u32>("/users/42", 2).is_err());
/// ```
pub fn value_at<T: FromSegment>(path: &str, index: isize) -> Result<T, Error> {
    T::from_segment(pathseg_span::segment(path, index)?)
}

/// Extract the segment following the first segment equal to `key` and
/// coerce it.
///
/// # Examples
///
/// ```
/// use pathseg_typed::value_after;
///
/// assert_eq!(value_after::<u32>("/users/42/posts", "users").unwrap(), 42);
/// assert!(value_after::<u32>("/users", "users").is_err());
/// ```
pub fn value_after<T: FromSegment>(path: &str, key: &str) -> Result<T, Error> {
    T::from_segment(pathseg_span::segment_after(path, key)?)
}

/// Extract the segment at a signed index as a borrowed slice.
pub fn segment(path: &str, index: isize) -> Result<&str, Error> {
    Ok(pathseg_span::segment(path, index)?)
}

/// Extract the segment following the first segment equal to `key` as a
/// borrowed slice.
pub fn segment_after<'p>(path: &'p str, key: &str) -> Result<&'p str, Error> {
    Ok(pathseg_span::segment_after(path, key)?)
}

/// Extract the inclusive span between two signed segment indices.
///
/// See [`pathseg_span::span`] for boundary semantics.
pub fn span(path: &str, first: isize, last: isize) -> Result<&str, Error> {
    Ok(pathseg_span::span(path, first, last)?)
}

/// Extract the span anchored just past the first segment equal to `key`.
///
/// See [`pathseg_span::span_after`] for offset semantics.
pub fn span_after<'p>(path: &'p str, key: &str, last: isize) -> Result<&'p str, Error> {
    Ok(pathseg_span::span_after(path, key, last)?)
}
