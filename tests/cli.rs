//! Integration tests driving the `strmatch` binary on temporary files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Get path to the strmatch binary
fn strmatch_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_strmatch"))
}

/// Run strmatch with given args, returning (stdout, stderr, success)
fn run(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(strmatch_binary())
        .args(args)
        .arg("--color=never")
        .output()
        .expect("Failed to run strmatch");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().expect("non-UTF-8 temp path").to_string()
}

#[test]
fn test_search_json() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "abcabcabc");

    let (stdout, stderr, ok) = run(&["search", "abc", &file, "-a", "kmp", "--json"]);
    assert!(ok, "stderr: {}", stderr);

    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["algorithm"], "kmp");
    assert_eq!(report["offsets"], serde_json::json!([0, 3, 6]));
}

#[test]
fn test_search_plain_output() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "orwell.txt", "Julia i Winston\nJulia\n");

    let (stdout, _, ok) = run(&["search", "Julia", &file]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["0:Julia i Winston", "16:Julia"]);
}

#[test]
fn test_search_ignore_case() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "Ministerstwo MINISTERSTWO");

    let (stdout, _, ok) = run(&["search", "ministerstwo", &file, "-i", "--json"]);
    assert!(ok);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["offsets"], serde_json::json!([0, 13]));
}

#[test]
fn test_search_all_algorithms_agree() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "aaaa");

    let (stdout, stderr, ok) = run(&["search", "aa", &file, "--all", "--json"]);
    assert!(ok, "stderr: {}", stderr);
    let reports: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 7);
    for report in reports {
        assert_eq!(report["offsets"], serde_json::json!([0, 1, 2]));
    }
}

#[test]
fn test_empty_pattern_fails() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "abc");

    let (_, stderr, ok) = run(&["search", "", &file]);
    assert!(!ok);
    assert!(stderr.contains("invalid pattern"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir.path().join("missing.txt"));

    let (_, stderr, ok) = run(&["search", "abc", &missing]);
    assert!(!ok);
    assert!(stderr.contains("Failed to open"), "stderr: {}", stderr);
}

#[test]
fn test_fuzzy_hamming() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "xabdx");

    let (stdout, _, ok) = run(&["fuzzy", "abc", &file, "-k", "1", "--json"]);
    assert!(ok);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["mode"], "hamming");
    assert_eq!(report["ends"], serde_json::json!([4]));
}

#[test]
fn test_fuzzy_pattern_too_long() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "abc");
    let pattern = "a".repeat(65);

    let (_, stderr, ok) = run(&["fuzzy", &pattern, &file]);
    assert!(!ok);
    assert!(stderr.contains("unsupported pattern length"), "stderr: {}", stderr);
}

#[test]
fn test_index_lookups() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "ananas");

    let (stdout, stderr, ok) = run(&["index", &file, "ana", "na", "ananasx", "--json"]);
    assert!(ok, "stderr: {}", stderr);
    let reports: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        reports,
        serde_json::json!([
            {"pattern": "ana", "offsets": [0, 2]},
            {"pattern": "na", "offsets": [1, 3]},
            {"pattern": "ananasx", "offsets": []},
        ])
    );
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "text.txt", "w pokj i dalej");
    let config = fixture(&dir, "config.json", r#"{"fuzzy_mode": "edit", "max_errors": 1}"#);

    let (stdout, stderr, ok) = run(&["--config", &config, "fuzzy", "pokoj", &file, "--json"]);
    assert!(ok, "stderr: {}", stderr);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["mode"], "edit");
    assert_eq!(report["ends"], serde_json::json!([6]));
}

#[test]
fn test_split_scores() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "slowa.txt", "a\nb\nab\nba\naa\n");

    let (stdout, _, ok) = run(&["split", &file]);
    assert!(ok);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["4 a", "2 b"]);
}
