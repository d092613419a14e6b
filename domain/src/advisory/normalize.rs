//! Recommendation normalization used as the dedup and conflict key

use crate::core::string::{collapse_whitespace, truncate_chars};

/// Default cap on a normalized recommendation, in characters
pub const DEFAULT_INSIGHT_MAX_LEN: usize = 200;

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?', ';', ':', ','];

/// Normalize a recommendation into its comparison key.
///
/// Case-folds, strips terminal punctuation, trims and caps the result at
/// `max_len` characters. Interior whitespace runs collapse to one space so
/// that "Increase  sales" and "increase sales." share a key.
pub fn normalize_recommendation(text: &str, max_len: usize) -> String {
    let folded = collapse_whitespace(text).to_lowercase();
    let stripped = folded.trim_end_matches(TERMINAL_PUNCTUATION).trim_end();
    truncate_chars(stripped, max_len).trim_end().to_string()
}
