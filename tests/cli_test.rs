// tests/cli_test.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_mentions_parameters() {
    Command::cargo_bin("montepi")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--samples"))
        .stdout(predicate::str::contains("--interval"));
}

#[test]
fn zero_interval_fails_before_terminal_setup() {
    Command::cargo_bin("montepi")
        .unwrap()
        .args(["--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'interval'"));
}

#[test]
fn zero_samples_fails_before_terminal_setup() {
    Command::cargo_bin("montepi")
        .unwrap()
        .args(["--samples", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'samples'"));
}

#[test]
fn log_file_is_created_even_on_parameter_error() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("montepi.log");

    Command::cargo_bin("montepi")
        .unwrap()
        .args(["--interval", "0", "--log"])
        .arg(&log_path)
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("Starting Montepi"));
}
