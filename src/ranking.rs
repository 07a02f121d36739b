//! Per-word bounded ranking of songs by occurrence count.
//!
//! Every word keeps at most `top_n` songs, sorted by how often the word occurs in
//! them (descending). The structure is fed one song at a time and stays sorted after
//! every update, so the lowest-ranked entry is always the last one.
//!
//! Ordering rules:
//! - count desc
//! - among equal counts, the earlier-ingested song ranks first
//! - at capacity, a song is admitted only if its count strictly exceeds the last entry's

use crate::corpus::SongId;
use crate::usage::SongWordUsages;
use crate::Error;
use std::collections::HashMap;
use tracing::trace;

/// All occurrences of one word within one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongUsage {
    /// Index of the song in the corpus.
    pub song_id: SongId,
    /// Ascending positions of the word in the song's lyrics.
    pub positions: Vec<usize>,
}

impl SongUsage {
    /// Occurrence count (the ranking key).
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }
}

/// Word -> top-N songs by occurrence count.
#[derive(Debug, Clone)]
pub struct WordRanking {
    top_n: usize,
    words: HashMap<String, Vec<SongUsage>>,
}

impl WordRanking {
    /// Create an empty ranking retaining at most `top_n` songs per word.
    pub fn new(top_n: usize) -> Result<Self, Error> {
        if top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1"));
        }
        Ok(Self {
            top_n,
            words: HashMap::new(),
        })
    }

    /// Maximum number of songs retained per word.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Number of distinct words seen so far.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate every distinct word seen so far (arbitrary order).
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(|w| w.as_str())
    }

    /// Fold one song's word usages into the ranking.
    ///
    /// Must be called at most once per `song_id`.
    pub fn ingest(&mut self, song_id: SongId, usages: SongWordUsages) {
        for (word, positions) in usages {
            let usage = SongUsage { song_id, positions };

            let Some(ranked) = self.words.get_mut(&word) else {
                self.words.insert(word, vec![usage]);
                continue;
            };
            debug_assert!(ranked.iter().all(|u| u.song_id != song_id));

            if ranked.len() < self.top_n {
                ranked.push(usage);
            } else {
                let Some(last) = ranked.last_mut() else {
                    continue;
                };
                if usage.occurrences() <= last.occurrences() {
                    continue;
                }
                trace!(word = %word, evicted = last.song_id, admitted = song_id, "ranking eviction");
                *last = usage;
            }
            bubble_up_last(ranked);
        }
    }

    /// Retained songs for an already-normalized word, best first.
    ///
    /// `None` means the word never occurred in any ingested song.
    pub fn lookup(&self, word: &str) -> Option<&[SongUsage]> {
        self.words.get(word).map(Vec::as_slice)
    }
}

/// Move the last entry toward the front while it outranks its predecessor.
///
/// Everything before the last entry must already be sorted (count desc). Only strict
/// inequality swaps, which keeps ties in ingestion order.
fn bubble_up_last(ranked: &mut [SongUsage]) {
    for i in (1..ranked.len()).rev() {
        if ranked[i].occurrences() > ranked[i - 1].occurrences() {
            ranked.swap(i, i - 1);
        } else {
            break;
        }
    }
}
