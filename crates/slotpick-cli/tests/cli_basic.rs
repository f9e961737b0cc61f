//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Network
//! commands (suggest) are not exercised here; the offline select path
//! covers the selection pipeline end to end.

use std::io::Write;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "slotpick-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Write a slots fixture and return the file handle (deleted on drop).
fn slots_fixture(starts: &[&str]) -> tempfile::NamedTempFile {
    let slots: Vec<serde_json::Value> = starts
        .iter()
        .map(|s| {
            let start: chrono::DateTime<chrono::Utc> = s.parse().unwrap();
            let end = start + chrono::Duration::minutes(30);
            serde_json::json!({ "start": start, "end": end })
        })
        .collect();

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create fixture");
    write!(file, "{}", serde_json::Value::Array(slots)).expect("Failed to write fixture");
    file
}

#[test]
fn test_help() {
    let (_, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "Help failed");
}

#[test]
fn test_select_pass_through() {
    let fixture = slots_fixture(&[
        "2026-03-02T14:00:00Z",
        "2026-03-02T09:00:00Z",
        "2026-03-02T11:30:00Z",
    ]);

    let (stdout, _, code) = run_cli(&[
        "select",
        "--file",
        fixture.path().to_str().unwrap(),
        "--timezone",
        "UTC",
        "--max",
        "4",
    ]);

    assert_eq!(code, 0, "Select failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("09:00"));
    assert!(lines[1].contains("11:30"));
    assert!(lines[2].contains("14:00"));
}

#[test]
fn test_select_batches_around_inferred_meeting() {
    let fixture = slots_fixture(&[
        "2026-03-02T09:00:00Z",
        "2026-03-02T09:30:00Z",
        "2026-03-02T10:00:00Z",
        "2026-03-02T14:00:00Z",
        "2026-03-02T14:30:00Z",
        "2026-03-02T15:00:00Z",
        "2026-03-02T15:30:00Z",
        "2026-03-02T16:00:00Z",
    ]);

    let (stdout, _, code) = run_cli(&[
        "select",
        "--file",
        fixture.path().to_str().unwrap(),
        "--timezone",
        "UTC",
        "--max",
        "4",
        "--json",
    ]);

    assert_eq!(code, 0, "Select failed");
    let selected: Vec<serde_json::Value> =
        serde_json::from_str(&stdout).expect("Failed to parse JSON output");
    let starts: Vec<&str> = selected
        .iter()
        .map(|s| s["start"].as_str().unwrap())
        .collect();

    assert_eq!(
        starts,
        vec![
            "2026-03-02T09:30:00Z",
            "2026-03-02T10:00:00Z",
            "2026-03-02T14:00:00Z",
            "2026-03-02T14:30:00Z",
        ]
    );
}

#[test]
fn test_select_empty_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();

    let (stdout, _, code) = run_cli(&[
        "select",
        "--file",
        file.path().to_str().unwrap(),
        "--timezone",
        "UTC",
    ]);

    assert_eq!(code, 0, "Select failed");
    assert!(stdout.contains("no slots available"));
}

#[test]
fn test_select_rejects_unknown_timezone() {
    let fixture = slots_fixture(&["2026-03-02T09:00:00Z"]);

    let (_, stderr, code) = run_cli(&[
        "select",
        "--file",
        fixture.path().to_str().unwrap(),
        "--timezone",
        "Mars/Olympus_Mons",
    ]);

    assert_ne!(code, 0, "Select unexpectedly succeeded");
    assert!(stderr.contains("unknown timezone"));
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "Config show failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Failed to parse config JSON");
    assert!(parsed.get("scheduling").is_some());
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "Config path failed");
    assert!(stdout.contains("config.toml"));
}
