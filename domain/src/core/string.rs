//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` Unicode scalar values.
///
/// Never splits a character; returns the input unchanged when it is short
/// enough.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Push `value` onto `target` unless an equal value is already present.
///
/// Keeps first-seen order, which the aggregation code relies on.
pub fn push_unique(target: &mut Vec<String>, value: &str) {
    if !target.iter().any(|existing| existing == value) {
        target.push(value.to_string());
    }
}
