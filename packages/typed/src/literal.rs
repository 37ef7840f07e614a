//! Prefix scanning for numeric literals.
//!
//! Coercion does not require the whole segment to be a literal. The scan
//! locates the first position where a literal can start (a digit, a `.`
//! followed by a digit, or for signed targets a `-` followed by either),
//! consumes the longest well-formed literal from there, and discards the
//! rest of the segment. A string with no literal start anywhere yields
//! `None`.
//!
//! Only the mantissa is consumed for integer targets. For float targets a
//! trailing exponent is consumed only when it is well-formed (`e` or `E`,
//! optional sign, at least one digit); a malformed exponent such as
//! `e.+12` is dropped entirely and the mantissa alone is kept.

/// Longest integer-shaped literal: optional `-` (signed only), digits,
/// at most one fractional part. The fractional part is kept so that the
/// caller can truncate (`".7"` coerces to 0, not 7).
pub(crate) fn int_literal(s: &str, signed: bool) -> Option<&str> {
    scan(s, signed, false)
}

/// Longest float-shaped literal, including a well-formed exponent.
pub(crate) fn float_literal(s: &str) -> Option<&str> {
    scan(s, true, true)
}

fn scan(s: &str, signed: bool, exponent: bool) -> Option<&str> {
    let bytes = s.as_bytes();
    let start = find_start(bytes, signed)?;

    let mut end = start;
    if bytes[end] == b'-' {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    if exponent && end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut k = end + 1;
        if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        if digit_at(bytes, k) {
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            end = k;
        }
    }

    Some(&s[start..end])
}

/// First offset where a literal can start, or `None`.
fn find_start(bytes: &[u8], signed: bool) -> Option<usize> {
    for i in 0..bytes.len() {
        if bytes[i].is_ascii_digit() {
            return Some(i);
        }
        if bytes[i] == b'.' && digit_at(bytes, i + 1) {
            return Some(i);
        }
        if signed
            && bytes[i] == b'-'
            && (digit_at(bytes, i + 1) || (bytes.get(i + 1) == Some(&b'.') && digit_at(bytes, i + 2)))
        {
            return Some(i);
        }
    }
    None
}

fn digit_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i).is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_literals() {
        assert_eq!(int_literal("4", true), Some("4"));
        assert_eq!(int_literal("5aaaa", true), Some("5"));
        assert_eq!(int_literal("aaa6aa", true), Some("6"));
        assert_eq!(int_literal("0.1", true), Some("0.1"));
        assert_eq!(int_literal(".7.aaaa", true), Some(".7"));
        assert_eq!(int_literal("10-", true), Some("10"));
        assert_eq!(int_literal("-9", true), Some("-9"));
        assert_eq!(int_literal("-.5x", true), Some("-.5"));
        // Exponents are never part of an integer literal
        assert_eq!(int_literal("3.14e+11", true), Some("3.14"));
    }

    #[test]
    fn unsigned_skips_sign() {
        assert_eq!(int_literal("-9", false), Some("9"));
        assert_eq!(int_literal("-.5", false), Some(".5"));
    }

    #[test]
    fn no_literal_start() {
        assert_eq!(int_literal("", true), None);
        assert_eq!(int_literal(".", true), None);
        assert_eq!(int_literal("error", true), None);
        assert_eq!(int_literal("-", true), None);
        assert_eq!(int_literal("-.", true), None);
        assert_eq!(float_literal("."), None);
        assert_eq!(float_literal("e10"), None);
    }

    #[test]
    fn float_literals() {
        assert_eq!(float_literal("0.2a"), Some("0.2"));
        assert_eq!(float_literal("aaaa1.3"), Some("1.3"));
        assert_eq!(float_literal(".8aa"), Some(".8"));
        assert_eq!(float_literal("3.14e+11"), Some("3.14e+11"));
        assert_eq!(float_literal("1E-5x"), Some("1E-5"));
        assert_eq!(float_literal("2e8"), Some("2e8"));
    }

    #[test]
    fn malformed_exponent_is_dropped() {
        assert_eq!(float_literal("3.14e.+12"), Some("3.14"));
        assert_eq!(float_literal("3.14e+.13"), Some("3.14"));
        assert_eq!(float_literal("5e"), Some("5"));
        assert_eq!(float_literal("5e+"), Some("5"));
    }

    #[test]
    fn second_fraction_stops_the_scan() {
        assert_eq!(float_literal("1.2.3"), Some("1.2"));
    }
}
