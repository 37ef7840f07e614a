//! Signed-index and key-based segment location.
//!
//! All resolution happens on byte offsets so that results can be returned
//! as slices of the input. `/` is ASCII, so scanning bytes is safe in
//! UTF-8 paths and every offset produced here is a char boundary.
//!
//! Indexing rules:
//! - A single leading delimiter does not create an empty first segment.
//! - Consecutive delimiters do create empty intermediate segments.
//! - Non-negative indices count from the front (0 = first segment).
//! - Negative indices count from the back (-1 = last segment).

use crate::error::SpanError;

/// Byte offset where forward segment `seg` begins.
///
/// The offset points at the delimiter preceding the segment (or at byte 0
/// for segment 0), so a span cut here carries its leading delimiter.
pub(crate) fn start_from_start(path: &str, seg: usize) -> Option<usize> {
    let bytes = path.as_bytes();
    let mut count = 0;
    for n in 0..bytes.len() {
        if n > 0 && bytes[n] == b'/' {
            count += 1;
        }
        if count == seg {
            return Some(n);
        }
    }
    None
}

/// Byte offset where the `|seg|`-th-from-last segment begins, `seg <= -1`.
///
/// Byte 0 counts as a segment boundary whether or not it is a delimiter,
/// which is what strips a single leading delimiter from backward counts.
pub(crate) fn start_from_end(path: &str, seg: isize) -> Option<usize> {
    let bytes = path.as_bytes();
    let mut count: isize = 0;
    for n in (0..bytes.len()).rev() {
        if bytes[n] == b'/' || n == 0 {
            count -= 1;
            if count == seg {
                return Some(n);
            }
        }
    }
    None
}

/// Byte offset one past forward segment `seg - 1`, `seg >= 1`.
///
/// That is the offset of the `seg`-th interior delimiter, or the path
/// length when the path ends exactly one segment short of that delimiter.
pub(crate) fn end_from_start(path: &str, seg: usize) -> Option<usize> {
    let bytes = path.as_bytes();
    let mut count = 0;
    for n in 1..bytes.len() {
        if bytes[n] == b'/' {
            count += 1;
            if count == seg {
                return Some(n);
            }
        }
    }
    if !bytes.is_empty() && count + 1 == seg {
        return Some(bytes.len());
    }
    None
}

/// Byte offset of the `|seg|`-th delimiter from the end, `seg <= 0`.
///
/// `seg == 0` means the end of the path itself.
pub(crate) fn end_from_end(path: &str, seg: isize) -> Option<usize> {
    if seg == 0 {
        return Some(path.len());
    }
    let bytes = path.as_bytes();
    let mut count: isize = 0;
    for n in (0..bytes.len()).rev() {
        if bytes[n] == b'/' || n == 0 {
            count -= 1;
            if count == seg {
                return Some(n);
            }
        }
    }
    None
}

/// Byte offset where the segment selected by a signed index begins.
pub(crate) fn start_offset(path: &str, index: isize) -> Result<usize, SpanError> {
    let found = if index < 0 {
        start_from_end(path, index)
    } else {
        start_from_start(path, index as usize)
    };
    found.ok_or_else(|| SpanError::out_of_bounds(index))
}

/// Byte offset one past the first segment equal to `key`.
///
/// A single leading delimiter is stripped before comparing, matching the
/// indexing rules above.
pub(crate) fn key_end(path: &str, key: &str) -> Option<usize> {
    let mut seg_start = usize::from(path.starts_with('/'));
    loop {
        let rest = &path[seg_start..];
        let seg_len = rest.find('/').unwrap_or(rest.len());
        if &rest[..seg_len] == key {
            return Some(seg_start + seg_len);
        }
        if seg_start + seg_len >= path.len() {
            return None;
        }
        seg_start += seg_len + 1;
    }
}

/// The remainder of `path` after the first segment equal to `key`.
///
/// The remainder always begins with a delimiter. Fails with `KeyNotFound`
/// when the key is absent or nothing follows it.
pub(crate) fn tail<'p>(path: &'p str, key: &str) -> Result<&'p str, SpanError> {
    let end = key_end(path, key).ok_or_else(|| SpanError::key_not_found(key))?;
    if end == path.len() {
        return Err(SpanError::key_not_found(key));
    }
    Ok(&path[end..])
}

/// Extract the segment at a signed index, without delimiters.
///
/// # Examples
///
/// ```
/// use pathseg_span::segment;
///
/// assert_eq!(segment("/users/42/posts", 1).unwrap(), "42");
/// assert_eq!(segment("/users/42/posts", -1).unwrap(), "posts");
/// assert_eq!(segment("/a//b", 1).unwrap(), "");
/// assert!(segment("/users", 3).is_err());
/// ```
pub fn segment(path: &str, index: isize) -> Result<&str, SpanError> {
    let start = start_offset(path, index)?;
    let rest = &path[start..];
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let end = rest.find('/').unwrap_or(rest.len());
    Ok(&rest[..end])
}

/// Extract the segment following the first segment equal to `key`.
///
/// # Examples
///
/// ```
/// use pathseg_span::segment_after;
///
/// assert_eq!(segment_after("/users/42/posts", "users").unwrap(), "42");
/// assert!(segment_after("/users", "users").is_err());
/// ```
pub fn segment_after<'p>(path: &'p str, key: &str) -> Result<&'p str, SpanError> {
    segment(tail(path, key)?, 0)
}
