//! Pathseg: extract typed values and spans from slash-delimited paths.
//!
//! Pathseg pulls structured parameters out of route-like strings without a
//! router or a schema. Segments are addressed by signed position (negative
//! counts from the end) or by the key segment that precedes them, and are
//! coerced with a permissive longest-prefix parse: `/orders/17abc` still
//! yields order 17. Contiguous runs of segments come back as verbatim
//! sub-spans of the original string.
//!
//! The stack has two layers, re-exported here:
//! - [`pathseg_span`]: positional lookup on byte offsets, zero-copy.
//! - [`pathseg_typed`]: coercion into strings, integers, bools and floats.
//!
//! # Example
//!
//! ```rust
//! use pathseg::{value_at, value_after, span, span_after};
//!
//! let path = "/api/v2/users/42/active/true";
//!
//! let version: String = value_at(path, 1).unwrap();
//! assert_eq!(version, "v2");
//!
//! let id: u64 = value_after(path, "users").unwrap();
//! assert_eq!(id, 42);
//!
//! let active: bool = value_at(path, -1).unwrap();
//! assert!(active);
//!
//! assert_eq!(span(path, 2, 4).unwrap(), "/users/42");
//! assert_eq!(span_after(path, "api", 1).unwrap(), "/v2");
//! ```

pub use pathseg_span::SpanError;
pub use pathseg_typed::{
    segment, segment_after, span, span_after, value_after, value_at, Error, FromSegment,
};
