//! Surface-level CLI tests for the genvy binary.
//!
//! These run the actual compiled binary against a fresh temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a genvy command rooted in an isolated temp directory.
#[allow(deprecated)]
fn genvy_cmd(tempdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("genvy").unwrap();
    cmd.current_dir(tempdir.path());
    cmd
}

#[test]
fn test_help_mentions_environment_argument() {
    let temp = TempDir::new().unwrap();

    genvy_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ENVIRONMENT"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    genvy_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("genvy"));
}

#[test]
fn test_success_message_on_stdout() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("genvy.json"), r#"{"files": {}}"#).unwrap();

    genvy_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated all targets"));
}

#[test]
fn test_errors_go_to_stderr_with_nonzero_exit() {
    let temp = TempDir::new().unwrap();

    genvy_cmd(&temp)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not find genvy.json"));
}

#[test]
fn test_verbose_flag_accepted() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("genvy.json"), r#"{"files": {}}"#).unwrap();

    genvy_cmd(&temp).arg("--verbose").assert().success();
}

#[test]
fn test_extra_positional_arguments_rejected() {
    let temp = TempDir::new().unwrap();

    genvy_cmd(&temp).args(["prod", "extra"]).assert().failure();
}
