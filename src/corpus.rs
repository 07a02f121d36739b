//! Song corpus loading.
//!
//! The expected input is a CSV file with a header row naming at least the columns
//! `artist`, `song` and `text` (the layout of the common `songdata.csv` lyrics dump,
//! which also carries a `link` column). Other columns are ignored.

use crate::Error;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Position of a song in its corpus. Stable for the lifetime of the corpus.
pub type SongId = usize;

/// One song: metadata plus lyric tokens in their original (un-normalized) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub artist: String,
    pub title: String,
    pub lyrics: Vec<String>,
}

impl Song {
    /// Build a song from raw lyric text, split on whitespace.
    pub fn new(artist: impl Into<String>, title: impl Into<String>, text: &str) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            lyrics: text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SongRecord {
    artist: String,
    #[serde(rename = "song")]
    title: String,
    text: String,
}

/// Load a corpus from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Song>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let songs = read_csv(BufReader::new(file))?;
    info!(path = %path.display(), songs = songs.len(), "loaded corpus");
    Ok(songs)
}

/// Read a corpus from CSV data. Song ids follow record order.
///
/// Records that repeat the header row (as happens when files are concatenated) are
/// skipped.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Song>, Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut songs = Vec::new();
    for record in rdr.deserialize() {
        let record: SongRecord = record?;
        if record.artist == "artist" {
            debug!(record = songs.len(), "skipping repeated header row");
            continue;
        }
        songs.push(Song::new(record.artist, record.title, &record.text));
    }
    Ok(songs)
}
