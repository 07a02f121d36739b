//! Per-song word usage: normalized word -> positions in that song's lyrics.

use crate::normalize::normalize_word;
use std::collections::HashMap;

/// Positions of every normalized word within one song, ascending per word.
pub type SongWordUsages = HashMap<String, Vec<usize>>;

/// Map each normalized word in `lyrics` to the positions where it occurs.
///
/// Positions index into `lyrics` itself, so tokens that normalize to nothing are
/// skipped without shifting the positions of the words after them.
pub fn index_lyrics<S: AsRef<str>>(lyrics: &[S]) -> SongWordUsages {
    let mut usages = SongWordUsages::new();
    for (position, token) in lyrics.iter().enumerate() {
        let word = normalize_word(token.as_ref());
        if word.is_empty() {
            continue;
        }
        usages.entry(word).or_default().push(position);
    }
    usages
}
