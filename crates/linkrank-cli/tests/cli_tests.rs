//! Integration tests for the linkrank binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkrank_cmd() -> Command {
    Command::cargo_bin("linkrank").unwrap()
}

fn create_corpus(dir: &TempDir) {
    let pages = [
        ("1.html", r#"<html><body><a href="2.html">two</a></body></html>"#),
        (
            "2.html",
            r#"<html><body><a href="1.html">one</a><a href="3.html">three</a></body></html>"#,
        ),
        ("3.html", r#"<html><body><a href="2.html">two</a></body></html>"#),
    ];
    for (name, body) in &pages {
        fs::write(dir.path().join(name), body).unwrap();
    }
}

#[test]
fn test_no_arguments_shows_usage() {
    let mut cmd = linkrank_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_ranks_corpus() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path())
        .arg("--samples")
        .arg("500")
        .arg("--seed")
        .arg("42");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 500)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("1.html"))
        .stdout(predicate::str::contains("2.html"))
        .stdout(predicate::str::contains("3.html"));
}

#[test]
fn test_seeded_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let run = || {
        let mut cmd = linkrank_cmd();
        cmd.arg(dir.path())
            .arg("--samples")
            .arg("500")
            .arg("--seed")
            .arg("7");
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_empty_corpus_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no pages"));
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path())
        .arg("--samples")
        .arg("500")
        .arg("--seed")
        .arg("42")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sampling\""))
        .stdout(predicate::str::contains("\"iteration\""))
        .stdout(predicate::str::contains("\"samples\": 500"));
}

#[test]
fn test_verbose_enables_debug_logging() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path())
        .arg("--samples")
        .arg("100")
        .arg("--seed")
        .arg("5")
        .arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("corpus loaded"))
        .stdout(predicate::str::contains("PageRank Results from Iteration"));
}

#[test]
fn test_zero_samples_exits_with_invalid_input() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path()).arg("--samples").arg("0");

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_custom_pattern() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.htm"),
        r#"<a href="b.htm">b</a>"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("b.htm"),
        r#"<a href="a.htm">a</a>"#,
    )
    .unwrap();

    let mut cmd = linkrank_cmd();
    cmd.arg(dir.path())
        .arg("--pattern")
        .arg("*.htm")
        .arg("--samples")
        .arg("100")
        .arg("--seed")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.htm"))
        .stdout(predicate::str::contains("b.htm"));
}
