//! End-to-end tests driving the `mood` binary.
//!
//! Tests the full pipeline: log → store → streak / heatmap / show

use std::path::Path;
use std::process::{Command, Output};

use chrono::Local;
use tempfile::TempDir;

fn mood_binary() -> String {
    env!("CARGO_BIN_EXE_mood").to_string()
}

/// Runs `mood` with an isolated home and data directory.
fn mood(home: &Path, args: &[&str]) -> Output {
    Command::new(mood_binary())
        .env("HOME", home)
        .env("MOOD_DATA_DIR", home.join("data"))
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run mood")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "mood should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_log_then_streak_and_heatmap() {
    let temp = TempDir::new().unwrap();

    let output = mood(temp.path(), &["log", "--mood", "happy", "finished", "the", "project"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Mood logged successfully!\n");

    let output = mood(temp.path(), &["log", "calm", "evening"]);
    assert_success(&output);

    let content = std::fs::read_to_string(temp.path().join("data/mood_data.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "timestamp,mood,reason");
    assert!(lines[1].ends_with(",Happy,finished the project"), "{}", lines[1]);
    assert!(lines[2].ends_with(",Neutral,calm evening"), "{}", lines[2]);

    let output = mood(temp.path(), &["streak"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Current mood log streak: 1 day\n");

    let output = mood(temp.path(), &["heatmap", "--json"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(json["total"], 2);
    assert_eq!(json["days"][0]["date"], today.as_str());
    assert_eq!(json["days"][0]["count"], 2);
}

#[test]
fn test_empty_store_degrades_to_zero() {
    let temp = TempDir::new().unwrap();

    let output = mood(temp.path(), &["streak"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Current mood log streak: 0 days\n");

    let output = mood(temp.path(), &["heatmap"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "Log some moods to see your activity heatmap!\n"
    );

    let output = mood(temp.path(), &["show"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "No mood log found or log is empty. Please log your mood first.\n"
    );
}

#[test]
fn test_legacy_log_with_unparseable_row() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();

    let now = Local::now().naive_local();
    let yesterday = now - chrono::Duration::days(1);
    std::fs::write(
        data_dir.join("mood_data.csv"),
        format!(
            "Date and Time,Mood,Reason\n{},Sad,rain\nnot a date,Happy,?\n{},Happy,sun\n",
            yesterday.format("%Y-%m-%d %H:%M"),
            now.format("%Y-%m-%d %H:%M"),
        ),
    )
    .unwrap();

    let output = mood(temp.path(), &["streak"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Current mood log streak: 2 days\n");

    let output = mood(temp.path(), &["heatmap", "--json"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total"], 2);
}

#[test]
fn test_unrecognised_schema_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("mood_data.csv"), "feeling,why\nHappy,sun\n").unwrap();

    let output = mood(temp.path(), &["streak"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.starts_with("Could not compute streak:"), "{out}");
    assert!(out.ends_with("Current mood log streak: 0 days\n"), "{out}");
}

#[test]
fn test_log_rejects_unknown_mood() {
    let temp = TempDir::new().unwrap();

    let output = mood(temp.path(), &["log", "--mood", "ecstatic", "why", "not"]);
    assert!(!output.status.success());
    assert!(!temp.path().join("data/mood_data.csv").exists());
}

#[test]
fn test_log_rejects_blank_reason() {
    let temp = TempDir::new().unwrap();

    let output = mood(temp.path(), &["log", "--mood", "sad", "  "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please select a mood and provide a reason."),
        "{stderr}"
    );
}

#[test]
fn test_config_file_sets_data_dir() {
    let temp = TempDir::new().unwrap();
    let custom_dir = temp.path().join("custom");
    let config_path = temp.path().join("mood.toml");
    std::fs::write(
        &config_path,
        format!("data_dir = {:?}\n", custom_dir.display().to_string()),
    )
    .unwrap();

    let output = Command::new(mood_binary())
        .env("HOME", temp.path())
        .env_remove("MOOD_DATA_DIR")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .arg("--config")
        .arg(&config_path)
        .args(["log", "testing", "config"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(custom_dir.join("mood_data.csv").exists());
}
