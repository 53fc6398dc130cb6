//! Anchored blank-line detection shared by the bundled classifiers.
//!
//! The two patterns are not mirror images. A leading blank line is
//! `\r?\n\r?\n` at offset zero; a trailing one is `\n\r?\n` at the end, so
//! the trailing match never starts on a carriage return. Keep them as they
//! are: cleanup scores are tuned against these exact patterns.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Longest possible match of the leading pattern, in bytes.
const START_WINDOW_BYTES: usize = 4;

/// Longest possible match of the trailing pattern, in bytes.
const END_WINDOW_BYTES: usize = 3;

// Literal patterns; compilation cannot fail.
#[allow(clippy::expect_used)]
static BLANK_LINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\r?\n\r?\n").expect("valid blank-line start regex"));

#[allow(clippy::expect_used)]
static BLANK_LINE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\r?\n$").expect("valid blank-line end regex"));

/// Returns true if `s` begins with `\n\n`, `\r\n\n`, `\n\r\n` or `\r\n\r\n`.
///
/// Only the first few bytes of `s` are inspected, so the cost does not grow
/// with the length of the input.
///
/// ```
/// use diffmatch_classifier::begins_with_blank_line;
///
/// assert!(begins_with_blank_line("\r\n\r\nX"));
/// assert!(!begins_with_blank_line("X\n\n"));
/// ```
pub fn begins_with_blank_line(s: &str) -> bool {
    BLANK_LINE_START.is_match(head_window(s, START_WINDOW_BYTES))
}

/// Returns true if `s` ends with `\n\n` or `\n\r\n`.
///
/// Only the last few bytes of `s` are inspected.
///
/// ```
/// use diffmatch_classifier::ends_with_blank_line;
///
/// assert!(ends_with_blank_line("X\n\r\n"));
/// assert!(!ends_with_blank_line("X\n\nY"));
/// ```
pub fn ends_with_blank_line(s: &str) -> bool {
    BLANK_LINE_END.is_match(tail_window(s, END_WINDOW_BYTES))
}

/// Longest prefix of `s` no longer than `max_bytes` that ends on a char
/// boundary. Both patterns are ASCII, so a multi-byte char cut off here can
/// never have been part of a match.
fn head_window(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Longest suffix of `s` no longer than `max_bytes` that starts on a char
/// boundary.
fn tail_window(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut start = s.len() - max_bytes;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
