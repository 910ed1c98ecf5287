//! Integration tests for the CLI interface
//!
//! Runs the compiled `drills` binary and checks output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drills() -> Command {
    Command::cargo_bin("drills").unwrap()
}

#[test]
fn test_cli_help_default() {
    // Running without arguments shows help
    drills()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_flag() {
    drills()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_command() {
    drills()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_arrays_prints_values_then_max() {
    drills()
        .arg("arrays")
        .assert()
        .success()
        .stdout("0\n10\n20\n30\n40\nmax num in array: 40\n");
}

#[test]
fn test_branch_age_brackets() {
    let cases = [
        ("20\n", "You can not buy alcohol"),
        ("21\n", "You can buy alcohol but not rent a car"),
        ("24\n", "You can buy alcohol but not rent a car"),
        ("25\n", "You can rent a car and buy alcohol"),
    ];

    for (input, expected) in cases {
        drills()
            .args(["branch", "age"])
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Enter your age: "))
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_branch_age_invalid_value() {
    drills()
        .args(["branch", "age"])
        .write_stdin("-1\n")
        .assert()
        .success()
        .stdout("Enter your age: -1 is not a valid age\n");
}

#[test]
fn test_branch_age_non_numeric_input() {
    drills()
        .args(["branch", "age"])
        .write_stdin("old\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'old' is not a whole number"));
}

#[test]
fn test_branch_age_no_input() {
    drills()
        .args(["branch", "age"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No input provided"));
}

#[test]
fn test_branch_switch() {
    for age in ["10", "20", "30"] {
        drills()
            .args(["branch", "switch"])
            .write_stdin(format!("{age}\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("You are {age} years old")));
    }

    drills()
        .args(["branch", "switch"])
        .write_stdin("15\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are 15 years old"));
}

#[test]
fn test_branch_countdown() {
    drills()
        .args(["branch", "countdown"])
        .assert()
        .success()
        .stdout("5\n4\n3\n2\n1\n0\nLift off!\n");
}

#[test]
fn test_params_output() {
    drills()
        .arg("params")
        .assert()
        .success()
        .stdout(
            "Data = 10\nCall by value: change()\nData = 10\n\
             Call by reference: swap()\nData = 20\nData2 = 10\n",
        );
}

#[test]
fn test_lines_prints_file_in_order() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("io.txt"), "one\r\ntwo\n\nfour\n").unwrap();

    drills()
        .arg("lines")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout("one\ntwo\n\nfour\n");
}

#[test]
fn test_lines_with_path_option() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("io.txt"), "hello\n").unwrap();

    drills()
        .args(["lines", "-p"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_lines_missing_file_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    drills()
        .arg("lines")
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("io.txt"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    drills()
        .args(["-v", "branch", "countdown"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("5\n4\n3\n2\n1\n0\nLift off!\n")
        .stderr(predicate::str::contains("verbosity level: 1"));
}

#[test]
fn test_lines_passes_non_utf8_bytes_through() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("io.txt"), b"caf\xe9\nsecond\n").unwrap();

    drills()
        .arg("lines")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(b"caf\xe9\nsecond\n".to_vec());
}

#[test]
fn test_branch_age_non_utf8_input() {
    drills()
        .args(["branch", "age"])
        .write_stdin(b"\xff\n".to_vec())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_fatal_error_reported_once_without_color() {
    let temp_dir = TempDir::new().unwrap();

    let output = drills()
        .arg("lines")
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("io.txt").count(), 1, "stderr: {stderr}");
    assert!(!stderr.contains("Fatal error"));
    assert!(!stderr.contains('\u{1b}'));
}
