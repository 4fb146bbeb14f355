//! CLI behavior tests: subcommands, output formats, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const ROSTER: &str = "tests/fixtures/roster.csv";

fn grade_cmd(log_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_grade_analyzer"));
    cmd.env("LOG_FILE_PATH", log_dir.path().join("test.log"));
    cmd
}

#[test]
fn no_args_returns_error_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    grade_cmd(&dir).assert().failure().code(2);
}

#[test]
fn report_prints_statistics() {
    let dir = tempfile::tempdir().unwrap();
    grade_cmd(&dir)
        .args(["report", "--input", ROSTER])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol's average grade is N/A"))
        .stdout(predicate::str::contains("Max average: 95.00"));
}

#[test]
fn report_json_output_valid() {
    let dir = tempfile::tempdir().unwrap();
    let output = grade_cmd(&dir)
        .args(["report", "--input", ROSTER, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["graded_count"], 3);
    assert!(value["students"][2]["average"].is_null());
}

#[test]
fn report_appends_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshots = dir.path().join("snapshots.csv");
    for _ in 0..2 {
        grade_cmd(&dir)
            .args(["report", "--input", ROSTER, "--output"])
            .arg(&snapshots)
            .assert()
            .success();
    }
    let content = fs::read_to_string(&snapshots).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("Alice"));
}

#[test]
fn report_without_grades_fails_and_records_error() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("empty.csv");
    fs::write(&roster, "name,grade\nann,\n").unwrap();
    let snapshots = dir.path().join("snapshots.csv");

    grade_cmd(&dir)
        .arg("report")
        .arg("--input")
        .arg(&roster)
        .arg("--output")
        .arg(&snapshots)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no student has any grades yet"));

    let content = fs::read_to_string(&snapshots).unwrap();
    assert!(content.contains("no_graded_students"));
}

#[test]
fn top_lists_best_student() {
    let dir = tempfile::tempdir().unwrap();
    grade_cmd(&dir)
        .args(["top", "--input", ROSTER])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice with an average of 95.00"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn missing_roster_fails() {
    let dir = tempfile::tempdir().unwrap();
    grade_cmd(&dir)
        .args(["top", "--input", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not open roster"));
}

#[test]
fn shell_session_over_stdin() {
    let dir = tempfile::tempdir().unwrap();
    grade_cmd(&dir)
        .arg("shell")
        .write_stdin("1\nzoe\n2\nzoe\n77\ndone\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zoe with an average of 77.00"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}
