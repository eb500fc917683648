use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const WORDS: &str = "the\nquick\nbrown\nfox\njumps\nover\nlazy\ndog\n";

/// A scratch directory with a word list, isolated from the user's config.
fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("words.txt"), WORDS).unwrap();
    dir
}

fn bkspell(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bkspell").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("BKSPELL_DICTIONARY")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn reports_misspellings_and_fails() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh quikc brown fox\n").unwrap();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "doc.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:1 teh"))
        .stdout(predicate::str::contains("1:5 quikc"))
        .stdout(predicate::str::contains("→ the"))
        .stdout(predicate::str::contains("2 errors found in 1 file"));
}

#[test]
fn no_fail_exits_zero() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh fox").unwrap();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "--no-fail", "doc.txt"])
        .assert()
        .success();
}

#[test]
fn clean_file_passes() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "The quick brown fox jumps over the lazy dog.").unwrap();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "doc.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn json_report() {
    let dir = workspace();
    fs::write(dir.path().join("a.txt"), "teh fox").unwrap();
    fs::write(dir.path().join("b.txt"), "lazy dgo").unwrap();

    let output = bkspell(dir.path())
        .args(["--dictionary", "words.txt", "--format", "json", "--no-fail", "a.txt", "b.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_checked"], 2);
    assert_eq!(json["total_errors"], 2);
    assert_eq!(json["errors"][0]["word"], "teh");
    assert_eq!(json["errors"][1]["word"], "dgo");
    assert_eq!(json["errors"][1]["suggestions"][0], "dog");
}

#[test]
fn tolerance_limits_suggestions() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh").unwrap();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "--tolerance", "1", "doc.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("→").not());
}

#[test]
fn local_config_file_is_read() {
    let dir = workspace();
    fs::write(dir.path().join(".bkspell.toml"), "dictionary = \"words.txt\"\n").unwrap();
    fs::write(dir.path().join("doc.txt"), "the fox").unwrap();

    bkspell(dir.path()).arg("doc.txt").assert().success();
}

#[test]
fn suggest_unknown_word() {
    let dir = workspace();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "suggest", "teh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"teh\" not found in dictionary"))
        .stdout(predicate::str::contains("the (distance 2)"));
}

#[test]
fn suggest_known_word() {
    let dir = workspace();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "suggest", "Fox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fox\" is spelled correctly"));
}

#[test]
fn cursor_analysis_as_json() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh quikc fox").unwrap();

    let output = bkspell(dir.path())
        .args(["--dictionary", "words.txt", "-o", "json", "cursor", "doc.txt", "--offset", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["offset"], 9);
    assert_eq!(json["current_token"], "quikc");
    assert_eq!(json["is_known"], false);
    assert_eq!(json["suggestions"][0]["word"], "quick");
    assert_eq!(json["suggestions"][0]["distance"], 2);
}

#[test]
fn missing_dictionary_is_unavailable() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh").unwrap();

    bkspell(dir.path())
        .args(["--dictionary", "missing.txt", "doc.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dictionary unavailable"));
}

#[test]
fn uninstalled_language_points_to_download() {
    let dir = workspace();
    fs::write(dir.path().join("doc.txt"), "teh").unwrap();

    bkspell(dir.path())
        .args(["--language", "en_GB", "doc.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bkspell dict download en_GB"));
}

#[test]
fn requires_files() {
    let dir = workspace();

    bkspell(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files specified"));
}

#[test]
fn generates_completions() {
    let dir = workspace();

    bkspell(dir.path())
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bkspell"));
}

#[test]
fn suggest_without_letters_reports_no_word() {
    let dir = workspace();

    bkspell(dir.path())
        .args(["--dictionary", "words.txt", "suggest", "hi!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No word to look up"))
        .stdout(predicate::str::contains("spelled correctly").not());
}
