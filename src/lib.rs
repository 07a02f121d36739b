//! `lyricdex`: a word-level lyric index.
//!
//! For every distinct normalized word in a song corpus, the index keeps the N songs
//! in which that word occurs most often, plus the positions of each occurrence so
//! results can be shown with surrounding lyric context.
//!
//! Scope:
//! - In-memory index, built once per process from a corpus
//! - Bounded retention per word (top-N by occurrence count)
//! - Deterministic ranking (count desc; ties keep ingestion order)
//! - Context windows clamped at song boundaries
//!
//! Non-goals:
//! - Persisting the index across runs
//! - Fuzzy, phrase or multi-word queries
//! - Stemming / language-aware normalization (case and punctuation folding only)
//!
//! Pipeline:
//! - [`corpus`] loads songs
//! - [`usage::index_lyrics`] maps each normalized word of one song to its positions
//! - [`ranking::WordRanking::ingest`] folds those positions into the per-word top-N
//! - [`search::LyricIndex::resolve`] looks a word up and renders contexts via [`context`]

pub mod context;
pub mod corpus;
pub mod normalize;
pub mod ranking;
pub mod search;
pub mod usage;

pub use corpus::{Song, SongId};
pub use error::Error;
pub use search::{LyricIndex, Params, SongMatch};

mod error {
    /// Errors for building a lyric index.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// Index parameters were invalid.
        #[error("invalid configuration: {0}")]
        InvalidConfig(&'static str),
        /// The corpus could not be read.
        #[error("i/o error: {0}")]
        Io(#[from] std::io::Error),
        /// The corpus was not valid CSV (or a record had missing columns).
        #[error("malformed corpus: {0}")]
        Csv(#[from] csv::Error),
    }
}
