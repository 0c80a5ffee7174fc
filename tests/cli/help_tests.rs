use crate::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mockforge"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_version_flag() {
    TestContext::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_help() {
    TestContext::new()
        .command()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--stub"))
        .stdout(predicate::str::contains("--throw"))
        .stdout(predicate::str::contains("--call"));
}

#[test]
fn test_missing_subcommand_fails() {
    TestContext::new().command().assert().failure();
}
