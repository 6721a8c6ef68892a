use assert_cmd::Command;
use predicates::prelude::*;

const BINARY_NAME: &str = "classdeck";

#[test]
fn prints_help() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line arguments"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn prints_version() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_reports_connection_errors_without_failing() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["check", "--base-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection error"));
}

#[test]
fn rejects_unknown_subcommands() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("frobnicate").assert().failure();
}
