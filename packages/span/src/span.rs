//! Inclusive multi-segment spans.
//!
//! A span is a verbatim slice of the original path, so it reproduces every
//! delimiter and empty segment inside the covered range. It begins with a
//! delimiter whenever the covered range does.

use crate::error::SpanError;
use crate::index::{end_from_end, end_from_start, start_offset, tail};

/// Extract the inclusive span between two signed segment indices.
///
/// `first` selects the segment whose start opens the span. `last` selects
/// the closing boundary: `last > 0` closes after forward segment
/// `last - 1`, `last == 0` closes at the end of the path, and `last < 0`
/// closes at the `|last|`-th delimiter from the end.
///
/// Equal boundaries yield an empty string; a start boundary past the end
/// boundary is out of bounds.
///
/// # Examples
///
/// ```
/// use pathseg_span::span;
///
/// assert_eq!(span("/test1/test-2/test_3", -3, -1).unwrap(), "/test1/test-2");
/// assert_eq!(span("/a/b/c", 1, 2).unwrap(), "/b");
/// assert_eq!(span("/a/b/c", 1, 0).unwrap(), "/b/c");
/// assert_eq!(span("/a/b", -1, -1).unwrap(), "");
/// assert!(span("/a/b/c", -1, -3).is_err());
/// ```
pub fn span(path: &str, first: isize, last: isize) -> Result<&str, SpanError> {
    let start = start_offset(path, first)?;
    let end = if last > 0 {
        end_from_start(path, last as usize)
    } else {
        end_from_end(path, last)
    }
    .ok_or_else(|| SpanError::out_of_bounds(last))?;

    if start > end {
        return Err(SpanError::out_of_bounds(last));
    }
    Ok(&path[start..end])
}

/// Extract the span anchored just past the first segment equal to `key`.
///
/// Equivalent to `span(remainder, 0, last)` where `remainder` is the path
/// after the key segment: `last == 0` runs to the end of the path,
/// `last > 0` covers that many segments from the anchor, and `last < 0`
/// drops that many segments from the end.
///
/// # Examples
///
/// ```
/// use pathseg_span::span_after;
///
/// let path = "/t1/res1/non1/xtra";
/// assert_eq!(span_after(path, "t1", 0).unwrap(), "/res1/non1/xtra");
/// assert_eq!(span_after(path, "t1", 2).unwrap(), "/res1/non1");
/// assert_eq!(span_after(path, "t1", -2).unwrap(), "/res1");
/// ```
pub fn span_after<'p>(path: &'p str, key: &str, last: isize) -> Result<&'p str, SpanError> {
    span(tail(path, key)?, 0, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oob(index: isize) -> SpanError {
        SpanError::OutOfBounds { index }
    }

    #[test]
    fn span_between_indices() {
        let cases: &[(isize, isize, &str, Result<&str, SpanError>)] = &[
            (0, 0, "/test1", Ok("/test1")),
            (0, 1, "/test1", Ok("/test1")),
            (0, 1, "/test1/test-2", Ok("/test1")),
            (1, 2, "/test1/test-2/test_3/", Ok("/test-2")),
            (0, 0, "test4/t4", Ok("test4/t4")),
            (0, 1, "t444/t4", Ok("t444")),
            (0, 1, "//test5", Ok("/")),
            (0, 1, "/test6//", Ok("/test6")),
            (0, 2, "/t6//", Ok("/t6/")),
            (0, 3, "/66//", Ok("/66//")),
            (1, 2, "/test7", Err(oob(1))),
            (0, -1, "/test8", Ok("")),
            (1, 1, "/t/9", Ok("")),
            (0, 0, "/", Ok("/")),
            (1, 1, "/", Err(oob(1))),
            (-1, -1, "/", Ok("")),
            (0, -1, "/", Ok("")),
            (-1, 0, "/", Ok("/")),
            (-1, 0, "/test1", Ok("/test1")),
            (0, -1, "/test1/test-2", Ok("/test1")),
            (-3, -1, "/test1/test-2/test_3", Ok("/test1/test-2")),
            (-1, -1, "/test11/test-12", Ok("")),
            (-1, -3, "/test11/test-12", Err(oob(-3))),
            (-2, -1, "test4/t4/", Ok("/t4")),
            (-1, -3, "/test5/test-6/test_7", Err(oob(-3))),
            (-3, 0, "/test7", Err(oob(-3))),
        ];
        for &(first, last, path, ref want) in cases {
            assert_eq!(
                &span(path, first, last),
                want,
                "span({:?}, {}, {})",
                path,
                first,
                last
            );
        }
    }

    #[test]
    fn span_after_key() {
        let cases: &[(&str, isize, &str, Result<&str, SpanError>)] = &[
            ("test1", 1, "/test1/res1/non1", Ok("/res1")),
            ("test2", 2, "test2/res2/non2", Ok("/res2/non2")),
            ("3", 1, "/3/33/333", Ok("/33")),
            ("4", 2, "4/44/444", Ok("/44/444")),
            ("55", 1, "/5/55/555", Ok("/555")),
            ("66", 2, "6/66/666", Err(oob(2))),
            (
                "77",
                1,
                "/77",
                Err(SpanError::KeyNotFound {
                    key: "77".to_string(),
                }),
            ),
            (
                "88",
                1,
                "/",
                Err(SpanError::KeyNotFound {
                    key: "88".to_string(),
                }),
            ),
            ("t1", -2, "/t1/res1/non1/xtra", Ok("/res1")),
            ("t2", 0, "t2/res2/non2/xtra", Ok("/res2/non2/xtra")),
            ("3", -1, "/3/33/333/303", Ok("/33/333")),
            (
                "77",
                -1,
                "/77",
                Err(SpanError::KeyNotFound {
                    key: "77".to_string(),
                }),
            ),
            (
                "88",
                0,
                "/",
                Err(SpanError::KeyNotFound {
                    key: "88".to_string(),
                }),
            ),
        ];
        for &(key, last, path, ref want) in cases {
            assert_eq!(
                &span_after(path, key, last),
                want,
                "span_after({:?}, {:?}, {})",
                path,
                key,
                last
            );
        }
    }

    #[test]
    fn span_is_verbatim_slice() {
        let path = "/a//b/c";
        let s = span(path, 0, 3).unwrap();
        assert_eq!(s, "/a//b");
        // Borrowed from the input, not rebuilt
        assert_eq!(s.as_ptr(), path.as_ptr());
    }
}
