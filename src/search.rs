//! Building the index over a corpus and resolving query words.

use crate::context;
use crate::corpus::Song;
use crate::normalize::normalize_word;
use crate::ranking::WordRanking;
use crate::usage::index_lyrics;
use crate::Error;
use tracing::{debug, info};

/// Index parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Maximum number of songs retained (and returned) per word.
    pub top_n: usize,
    /// Words of context shown on each side of an occurrence.
    pub context_radius: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            top_n: 10,
            context_radius: 5,
        }
    }
}

impl Params {
    /// Check the parameters, returning them unchanged when valid.
    pub fn validate(self) -> Result<Self, Error> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1"));
        }
        Ok(self)
    }
}

/// One song in a query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMatch<'a> {
    /// 1-based rank among the results for the word.
    pub rank: usize,
    /// Artist of the song.
    pub artist: &'a str,
    /// Title of the song.
    pub title: &'a str,
    /// Number of times the word occurs in the song.
    pub occurrences: usize,
    /// One context string per occurrence, in lyric order.
    pub contexts: Vec<String>,
}

/// A song corpus together with its per-word top-N ranking.
#[derive(Debug, Clone)]
pub struct LyricIndex {
    songs: Vec<Song>,
    ranking: WordRanking,
    params: Params,
}

impl LyricIndex {
    /// Index every song of `songs`, in order.
    pub fn build(songs: Vec<Song>, params: Params) -> Result<Self, Error> {
        let params = params.validate()?;
        let mut ranking = WordRanking::new(params.top_n)?;
        for (song_id, song) in songs.iter().enumerate() {
            ranking.ingest(song_id, index_lyrics(&song.lyrics));
        }
        info!(
            songs = songs.len(),
            words = ranking.num_words(),
            top_n = params.top_n,
            "index built"
        );
        Ok(Self {
            songs,
            ranking,
            params,
        })
    }

    /// Parameters the index was built with.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Indexed songs, in corpus order (position = `SongId`).
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Per-word ranking over the corpus.
    pub fn ranking(&self) -> &WordRanking {
        &self.ranking
    }

    /// Top songs for `word` with context around each occurrence.
    ///
    /// The word is normalized the same way lyrics are. `None` means no song contains
    /// it; a found word always has at least one match.
    pub fn resolve(&self, word: &str) -> Option<Vec<SongMatch<'_>>> {
        let key = normalize_word(word);
        let Some(ranked) = self.ranking.lookup(&key) else {
            debug!(query = word, key = %key, "word not found");
            return None;
        };
        debug!(query = word, key = %key, songs = ranked.len(), "word resolved");

        let matches = ranked
            .iter()
            .enumerate()
            .map(|(i, usage)| {
                let song = &self.songs[usage.song_id];
                SongMatch {
                    rank: i + 1,
                    artist: &song.artist,
                    title: &song.title,
                    occurrences: usage.occurrences(),
                    contexts: context::extract(
                        &song.lyrics,
                        &usage.positions,
                        self.params.context_radius,
                    ),
                }
            })
            .collect();
        Some(matches)
    }
}
