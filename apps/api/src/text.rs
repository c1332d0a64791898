//! Small text helpers shared by the requirement and answer engines.

use regex::{Regex, RegexBuilder};

/// Minimum length (exclusive) for a word to count as significant.
pub const SIGNIFICANT_WORD_MIN_LEN: usize = 3;

/// Compiled-size ceiling for patterns that arrive inside a request.
pub const CALLER_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiles a catalog or caller-supplied pattern. All matching in this crate
/// is case-insensitive.
pub fn case_insensitive_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Compiles a pattern supplied by a caller (a custom answer key). Patterns
/// whose compiled program exceeds `CALLER_PATTERN_SIZE_LIMIT` are rejected.
pub fn caller_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(CALLER_PATTERN_SIZE_LIMIT)
        .dfa_size_limit(CALLER_PATTERN_SIZE_LIMIT)
        .build()
}

/// Returns true when `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters (or the ends of the string). Both inputs are expected lower-cased.
pub fn contains_term(haystack: &str, needle: &str) -> bool {
    find_term(haystack, needle).is_some()
}

/// Byte offset of the first word-bounded occurrence of `needle`.
pub fn find_term(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack
        .match_indices(needle)
        .map(|(start, _)| start)
        .find(|&start| {
            let end = start + needle.len();
            let before_ok = haystack[..start]
                .chars()
                .next_back()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            let after_ok = haystack[end..]
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            before_ok && after_ok
        })
}

/// Lower-cases `text`, strips punctuation, and returns the words longer than
/// three characters in their original order.
pub fn significant_words(text: &str) -> Vec<String> {
    strip_punctuation(&text.to_lowercase())
        .split_whitespace()
        .filter(|w| w.chars().count() > SIGNIFICANT_WORD_MIN_LEN)
        .map(str::to_string)
        .collect()
}

/// Replaces every character that is neither alphanumeric nor whitespace with a space.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
