//! Lyric context windows around word occurrences.

use std::ops::RangeInclusive;

/// Inclusive index window of `radius` words on each side of `position`, clamped to
/// `0..=len - 1`.
///
/// `len` must be non-zero.
pub(crate) fn window(len: usize, position: usize, radius: usize) -> RangeInclusive<usize> {
    let last = len - 1;
    let end = position.saturating_add(radius).min(last);
    let start = position.saturating_sub(radius).min(end);
    start..=end
}

/// One context string per position: the words of `lyrics` inside each window,
/// joined by single spaces.
///
/// Positions must be valid indices into `lyrics`.
pub fn extract<S: AsRef<str>>(lyrics: &[S], positions: &[usize], radius: usize) -> Vec<String> {
    if lyrics.is_empty() {
        return vec![String::new(); positions.len()];
    }
    positions
        .iter()
        .map(|&position| {
            let words: Vec<&str> = lyrics[window(lyrics.len(), position, radius)]
                .iter()
                .map(|word| word.as_ref())
                .collect();
            words.join(" ")
        })
        .collect()
}
