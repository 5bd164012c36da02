//! CLI diff integration tests
//!
//! These tests run the `shutter` binary against snapshot files in a
//! temporary directory and check output and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_pair(temp_dir: &TempDir, old: &str, new: &str) -> (PathBuf, PathBuf) {
    let old_path = temp_dir.path().join("case.snap");
    let new_path = temp_dir.path().join("case.snap.new");
    fs::write(&old_path, old).unwrap();
    fs::write(&new_path, new).unwrap();
    (old_path, new_path)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shutter"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_diff_unchanged_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "a\nb\n", "a\nb\n");

    let output = run(&["diff", old.to_str().unwrap(), new.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1 1   a\n2 2   b\n");
}

#[test]
fn test_cli_diff_changed_exits_one_with_plain_rows() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(
        &temp_dir,
        "line1\nline2\nline3",
        "line1\nmodified\nline3",
    );

    let output = run(&["diff", old.to_str().unwrap(), new.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1 1   line1\n2   - line2\n  2 + modified\n3 3   line3\n"
    );
}

#[test]
fn test_cli_diff_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "a\nb", "a\nb\nc");

    let output = run(&[
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let lines: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = lines.as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2]["kind"], "added");
    assert_eq!(lines[2]["new_number"], 3);
    assert!(lines[2].get("old_number").is_none());
}

#[test]
fn test_cli_stats_prints_counts() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "a\nb\nc\nd", "a\nb");

    let output = run(&["stats", old.to_str().unwrap(), new.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "2 shared, 2 deleted, 0 added"
    );
}

#[test]
fn test_cli_blank_junk_flag_changes_matching() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "alpha\n\nbeta", "gamma\n\ndelta");

    let plain = run(&["stats", old.to_str().unwrap(), new.to_str().unwrap()]);
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout).trim(),
        "1 shared, 2 deleted, 2 added"
    );

    let junked = run(&[
        "stats",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--blank-junk",
    ]);
    assert_eq!(
        String::from_utf8_lossy(&junked.stdout).trim(),
        "0 shared, 3 deleted, 3 added"
    );
}

#[test]
fn test_cli_config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "alpha\n\nbeta", "gamma\n\ndelta");
    let config = temp_dir.path().join("shutter.toml");
    fs::write(&config, "[diff]\njunk = \"blank_lines\"\n").unwrap();

    let output = run(&[
        "stats",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "0 shared, 3 deleted, 3 added"
    );
}

#[test]
fn test_cli_invalid_config_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "a", "a");
    let config = temp_dir.path().join("shutter.toml");
    fs::write(&config, "junk = \"sometimes\"\n").unwrap();

    let output = run(&[
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}

#[test]
fn test_cli_missing_file_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.snap");

    let output = run(&["diff", missing.to_str().unwrap(), missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}

#[test]
fn test_cli_generous_timeout_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, "a\nb", "a\nc");

    let output = run(&[
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--timeout-ms",
        "60000",
    ]);

    assert_eq!(output.status.code(), Some(1));
}
