//! Cross-cutting CLI tests (help, version, argument errors)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("md2html")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("converts a Markdown document"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("md2html")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments() {
    cargo_bin_cmd!("md2html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_too_many_arguments() {
    cargo_bin_cmd!("md2html")
        .args(["a.md", "b.html", "c.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
