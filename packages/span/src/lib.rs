//! pathseg-span: byte-offset segment location in slash-delimited paths.
//!
//! This is the narrow waist of the pathseg stack. Everything at this level
//! is positional - no type coercion, no parsing, no allocation on the
//! success path. Results are borrowed slices of the input.
//!
//! Indexing rules:
//! - Segments are `/`-delimited; a single leading `/` does not create an
//!   empty first segment, but consecutive delimiters do create empty
//!   intermediate segments.
//! - Non-negative indices count from the front (0 = first segment),
//!   negative indices from the back (-1 = last segment).
//! - Spans are verbatim slices of the input, delimiters included.
//!
//! # Example
//!
//! ```rust
//! use pathseg_span::{segment, segment_after, span, span_after};
//!
//! let path = "/users/42/posts/7";
//!
//! assert_eq!(segment(path, 1).unwrap(), "42");
//! assert_eq!(segment(path, -1).unwrap(), "7");
//! assert_eq!(segment_after(path, "users").unwrap(), "42");
//! assert_eq!(span(path, 0, 2).unwrap(), "/users/42");
//! assert_eq!(span_after(path, "users", 2).unwrap(), "/42/posts");
//! ```

mod error;
mod index;
mod span;

pub use error::SpanError;
pub use index::{segment, segment_after};
pub use span::{span, span_after};
