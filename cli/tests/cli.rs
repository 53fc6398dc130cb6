//! End-to-end tests for the `diffmatch` binary.
//!
//! ## Exit Codes
//! - 0: Success
//! - 1: Input file could not be read
//! - 2: Invalid arguments

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn diffmatch() -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("diffmatch")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

fn write(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn diff_prints_aligned_markers() -> Result<()> {
    let dir = TempDir::new()?;
    let old = write(dir.path(), "old.txt", "The cat.")?;
    let new = write(dir.path(), "new.txt", "The cow and the cat.")?;

    let output = diffmatch()?
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .args(["--color", "never"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "The {+cow and the +}cat.\n");
    Ok(())
}

#[test]
fn diff_without_lossless_keeps_raw_boundaries() -> Result<()> {
    let dir = TempDir::new()?;
    let old = write(dir.path(), "old.txt", "The cat.")?;
    let new = write(dir.path(), "new.txt", "The cow and the cat.")?;

    diffmatch()?
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .args(["--color", "never", "--no-semantic-lossless"])
        .assert()
        .success()
        .stdout("The c{+ow and the c+}at.\n");
    Ok(())
}

#[test]
fn diff_in_line_mode() -> Result<()> {
    let dir = TempDir::new()?;
    let old = write(dir.path(), "old.txt", "a\nb\nc\n")?;
    let new = write(dir.path(), "new.txt", "a\nx\nc\n")?;

    diffmatch()?
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .args(["--check-lines", "--algorithm", "patience", "--color", "never"])
        .assert()
        .success()
        .stdout("a\n[-b\n-]{+x\n+}c\n\n");
    Ok(())
}

#[test]
fn diff_always_color_emits_ansi() -> Result<()> {
    let dir = TempDir::new()?;
    let old = write(dir.path(), "old.txt", "ab")?;
    let new = write(dir.path(), "new.txt", "abc")?;

    diffmatch()?
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[32mc\u{1b}[39m"));
    Ok(())
}

#[test]
fn missing_file_exits_1() -> Result<()> {
    let dir = TempDir::new()?;
    let new = write(dir.path(), "new.txt", "text")?;

    diffmatch()?
        .arg("diff")
        .arg(dir.path().join("absent.txt"))
        .arg(&new)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
    Ok(())
}

#[test]
fn unknown_classifier_exits_2() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write(dir.path(), "a.txt", "text")?;

    diffmatch()?
        .arg("classify")
        .arg(&file)
        .args(["--classifier", "ebcdic"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn classify_reports_counts_and_blank_lines() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write(dir.path(), "doc.txt", "\r\n\r\nHé llo\n\n")?;

    diffmatch()?
        .arg("classify")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "chars: 12\nalphanumeric: 5\nwhitespace: 7\nlinebreaks: 6\n\
             begins_with_blank_line: true\nends_with_blank_line: true\n",
        );

    diffmatch()?
        .arg("classify")
        .arg(&file)
        .args(["--classifier", "ascii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alphanumeric: 4\n"));
    Ok(())
}
