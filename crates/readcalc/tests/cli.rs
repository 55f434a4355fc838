//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const FOUR_SENTENCES: &str = "<<This is a small text. Only a few sentences are present. \
    What else can I talk about this text? Well, it has only four sentences!!>>";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn analyze_json(args: &[&str]) -> Value {
    let output = cmd()
        .arg("--json")
        .arg("analyze")
        .args(args)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("READCALC_LOG_PATH"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help prints help to stderr and exits 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_lists_languages_and_metrics() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    let languages = json["languages"].as_array().unwrap();
    assert!(languages.contains(&Value::from("en-gb")));
    assert_eq!(json["metrics"].as_array().unwrap().len(), 9);
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_inline_text_prints_report() {
    cmd()
        .args(["analyze", "--text", FOUR_SENTENCES])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sentences: 4"))
        .stdout(predicate::str::contains("# Words: 25"))
        .stdout(predicate::str::contains("LIX Index: 18.250"));
}

#[test]
fn analyze_reads_stdin() {
    cmd()
        .arg("analyze")
        .write_stdin("The cat sat. The dog ran.")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sentences: 2"));
}

#[test]
fn analyze_dash_reads_stdin() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin("One sentence here.")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sentences: 1"));
}

#[test]
fn analyze_empty_input_is_not_an_error() {
    cmd()
        .arg("analyze")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Words: 0"))
        .stdout(predicate::str::contains("Flesch Reading Ease: 100.000"));
}

#[test]
fn analyze_json_has_full_report() {
    let json = analyze_json(&["--text", FOUR_SENTENCES]);
    assert_eq!(json["source"], "<text>");
    assert_eq!(json["language"], "en-us");
    let report = &json["report"];
    assert_eq!(report["sentences"], 4);
    assert_eq!(report["words"], 25);
    assert_eq!(report["unique_words"], 20);
    assert_eq!(report["difficult_words"], 4);
    assert!((report["dale_chall_known_fraction"].as_f64().unwrap() - 0.84).abs() < 1e-9);
}

#[test]
fn analyze_selected_metrics() {
    let json = analyze_json(&[
        "--text",
        FOUR_SENTENCES,
        "--metric",
        "lix-index",
        "-m",
        "smog-index",
        "--longer-than",
        "6",
    ]);
    assert!(json.get("report").is_none());
    let scores = json["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0]["metric"], "lix-index");
    assert!((scores[0]["value"].as_f64().unwrap() - 18.25).abs() < 1e-9);
    assert_eq!(scores[1]["metric"], "smog-index");
    assert_eq!(json["words_longer_than"]["threshold"], 6);
    assert_eq!(json["words_longer_than"]["count"], 3);
}

#[test]
fn analyze_selected_metrics_text_output() {
    cmd()
        .args(["--color", "never", "analyze", "--text", "Hello world."])
        .args(["--metric", "flesch-reading-ease", "--longer-than", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch Reading Ease:"))
        .stdout(predicate::str::contains("Words longer than 4: 2"))
        .stdout(predicate::str::contains("SMOG").not());
}

#[test]
fn analyze_unknown_metric_fails() {
    cmd()
        .args(["analyze", "--text", "Hi.", "--metric", "readability-vibes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn analyze_multiple_files() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    fs::write(&a, "First file. Two sentences.").unwrap();
    fs::write(&b, "Second file has one sentence.").unwrap();

    let output = cmd()
        .arg("--json")
        .arg("analyze")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["report"]["sentences"], 2);
    assert_eq!(items[1]["report"]["sentences"], 1);

    cmd()
        .args(["--color", "never", "analyze"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("==> "))
        .stdout(predicate::str::contains("a.txt <=="));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/readcalc-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_text_and_files_conflict() {
    cmd()
        .args(["analyze", "notes.txt", "--text", "Hi."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn analyze_british_language() {
    let json = analyze_json(&["--language", "en_GB", "--text", "Colourful behaviour."]);
    assert_eq!(json["language"], "en-gb");
}

#[test]
fn analyze_unsupported_language_fails() {
    cmd()
        .args(["analyze", "--language", "xx", "--text", "Hi."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn analyze_custom_patterns_and_word_list() {
    let tmp = TempDir::new().unwrap();
    let patterns = tmp.path().join("hyph-test.tex");
    fs::write(&patterns, "\\patterns{\n1b\n}\n").unwrap();
    let words = tmp.path().join("easy.txt");
    fs::write(&words, "abba\n").unwrap();

    let json = analyze_json(&[
        "--patterns",
        patterns.to_str().unwrap(),
        "--word-list",
        words.to_str().unwrap(),
        "--language",
        "test",
        "--text",
        "Abba abbba.",
    ]);
    assert_eq!(json["language"], "test");
    // ab-ba and ab-b-ba
    assert_eq!(json["report"]["syllables"], 5);
    assert_eq!(json["report"]["difficult_words"], 1);
}

#[test]
fn analyze_malformed_patterns_fail() {
    let tmp = TempDir::new().unwrap();
    let patterns = tmp.path().join("broken.tex");
    fs::write(&patterns, "a1b\nx#y\n").unwrap();

    cmd()
        .args(["analyze", "--text", "Hi.", "--patterns"])
        .arg(&patterns)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed hyphenation patterns"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/readcalc-dir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

#[test]
fn log_path_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("logs").join("run.jsonl");

    cmd()
        .env("READCALC_LOG_PATH", &log)
        .args(["-v", "analyze", "--text", "Logged text."])
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    let first = contents.lines().next().expect("log file is empty");
    let entry: Value = serde_json::from_str(first).unwrap();
    assert!(entry.get("level").is_some());
}
