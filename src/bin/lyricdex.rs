//! `lyricdex` CLI: index a lyrics corpus, then look words up in it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lyricdex::{corpus, LyricIndex, Params, SongMatch};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Input line that ends the interactive loop.
const EXIT_SENTINEL: &str = "EXIT";

#[derive(Parser, Debug)]
#[command(author, version, about = "Lyric word search", long_about = None)]
struct Args {
    /// Corpus CSV with `artist`, `song` and `text` columns.
    #[arg(short, long, env = "LYRICDEX_INPUT", default_value = "songdata.csv", global = true)]
    input: PathBuf,

    /// Songs returned per word.
    #[arg(short = 'n', long, env = "LYRICDEX_TOP_N", default_value_t = Params::default().top_n, global = true)]
    top_n: usize,

    /// Words of context on each side of an occurrence.
    #[arg(short, long, env = "LYRICDEX_CONTEXT", default_value_t = Params::default().context_radius, global = true)]
    context: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prompt for words until EXIT or end of input (the default).
    Repl,

    /// Look up a single word and exit.
    Search {
        /// Word to look up.
        word: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let params = Params {
        top_n: args.top_n,
        context_radius: args.context,
    }
    .validate()?;

    let start = Instant::now();
    let songs = corpus::load_csv(&args.input)
        .with_context(|| format!("reading corpus {}", args.input.display()))?;
    let index = LyricIndex::build(songs, params)?;
    info!(
        elapsed_secs = start.elapsed().as_secs_f64(),
        "data structure built"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(&index, io::stdin().lock(), &mut out)?,
        Commands::Search { word } => render(&index, &word, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn repl(index: &LyricIndex, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(out, "Enter a word to search, or {EXIT_SENTINEL} to exit: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF: leave the terminal on a fresh line.
            writeln!(out)?;
            return Ok(());
        }
        let line = trim_line_ending(&buf);
        if line == EXIT_SENTINEL.as_bytes() {
            return Ok(());
        }
        match std::str::from_utf8(line) {
            Ok(word) => render(index, word, out)?,
            // Lyrics are UTF-8, so a non-UTF-8 query cannot match any word.
            Err(err) => {
                debug!(error = %err, "query is not valid UTF-8");
                writeln!(out, "Word not found.")?;
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn render(index: &LyricIndex, word: &str, out: &mut impl Write) -> io::Result<()> {
    let Some(matches) = index.resolve(word) else {
        return writeln!(out, "Word not found.");
    };
    for song in &matches {
        render_match(song, out)?;
    }
    Ok(())
}

fn render_match(song: &SongMatch<'_>, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Result #{} has {} occurrences:\n",
        song.rank, song.occurrences
    )?;
    for context in &song.contexts {
        writeln!(out, "Title: {}", song.title)?;
        writeln!(out, "Artist: {}", song.artist)?;
        writeln!(out, "Context: {context}\n")?;
    }
    Ok(())
}
