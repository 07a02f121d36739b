//! Word normalization shared by indexing and querying.

/// Normalize a lyric token (or a query word) into an index key.
///
/// Every character that is not alphanumeric is dropped, then the rest is lower-cased.
/// A token made only of punctuation normalizes to the empty string.
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
