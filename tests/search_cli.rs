//! CLI contract tests for `lyricdex`.
#![cfg(feature = "cli")]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const CORPUS: &str = "artist,song,link,text\n\
    Fire Band,Burning,/f/burning.html,\"fire fire fire fire fire\"\n\
    Ember,Smoulder,/e/smoulder.html,\"a little fire, a little smoke, fire fire\"\n\
    Quiet,Calm,/q/calm.html,\"nothing to see here\"\n";

fn lyricdex() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lyricdex");
    cmd.env_remove("LYRICDEX_INPUT")
        .env_remove("LYRICDEX_TOP_N")
        .env_remove("LYRICDEX_CONTEXT")
        .env("RUST_LOG", "info");
    cmd
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("songdata.csv");
    fs::write(&path, CORPUS).expect("write corpus");
    path
}

#[test]
fn search_prints_ranked_results_with_context() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap(), "--context", "1", "search", "Fire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result #1 has 5 occurrences:"))
        .stdout(predicate::str::contains("Result #2 has 3 occurrences:"))
        .stdout(predicate::str::contains("Title: Smoulder"))
        .stdout(predicate::str::contains("Artist: Ember"))
        .stdout(predicate::str::contains("Context: little fire, a"))
        .stderr(predicate::str::contains("data structure built"));
}

#[test]
fn search_respects_top_n() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap(), "--top-n", "1", "search", "fire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result #1 has 5 occurrences:"))
        .stdout(predicate::str::contains("Result #2").not())
        .stdout(predicate::str::contains("Smoulder").not());
}

#[test]
fn search_reports_unknown_word() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap(), "search", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word not found."));
}

#[test]
fn repl_answers_until_exit_sentinel() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap()])
        .write_stdin("water\nsee\nEXIT\nfire\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a word to search, or EXIT to exit: ").count(3))
        .stdout(predicate::str::contains("Word not found."))
        .stdout(predicate::str::contains("Title: Calm"))
        .stdout(predicate::str::contains("Title: Burning").not());
}

#[test]
fn repl_survives_non_utf8_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap()])
        .write_stdin(b"caf\xe9\nfire\nEXIT\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Word not found."))
        .stdout(predicate::str::contains("Result #1 has 5 occurrences:"));
}

#[test]
fn repl_stops_at_end_of_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap(), "repl"])
        .write_stdin("smoke\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result #1 has 1 occurrences:"));
}

#[test]
fn missing_corpus_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("absent.csv");

    lyricdex()
        .args(["--input", missing.to_str().unwrap(), "search", "fire"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading corpus"));
}

#[test]
fn zero_top_n_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let corpus = write_corpus(tmp.path());

    lyricdex()
        .args(["--input", corpus.to_str().unwrap(), "--top-n", "0", "search", "fire"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("top_n must be at least 1"));
}
