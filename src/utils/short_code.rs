//! Parsing of short codes received as path segments.

/// Parses a short code path segment.
///
/// Accepts non-negative decimal integers that fit in `i64`. Anything else
/// yields `None`, which callers treat as "no such mapping" rather than a
/// format error.
///
/// Codes are decimal integers only: exponent (`1e3`), fractional (`1.0`) and
/// hex (`0x10`) spellings of a number are misses.
pub fn parse_short_code(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|code| *code >= 0)
}
