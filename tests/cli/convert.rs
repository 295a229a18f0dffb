//! Conversion tests: sentinels, destination defaulting, I/O errors

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_stdin_to_stdout() {
    cargo_bin_cmd!("md2html")
        .arg("-")
        .write_stdin("# Hello\n")
        .assert()
        .success()
        .stdout("<h1>Hello</h1>\n");
}

#[test]
fn test_stdin_without_dest_defaults_to_stdout() {
    cargo_bin_cmd!("md2html")
        .arg("-")
        .write_stdin("*hi*\n")
        .assert()
        .success()
        .stdout("<em>hi</em>\n");
}

#[test]
fn test_file_dest_defaults_to_html_extension() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("doc.md");
    fs::write(&source, "# Title\n\nBody text.\n").unwrap();

    cargo_bin_cmd!("md2html")
        .arg(source.to_str().unwrap())
        .assert()
        .success();

    let html = fs::read_to_string(temp_dir.path().join("doc.html")).unwrap();
    assert_eq!(html, "<h1>Title</h1>\n\nBody text.\n");
}

#[test]
fn test_explicit_destination() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("doc.md");
    let dest = temp_dir.path().join("out.html");
    fs::write(&source, "- a\n- b\n").unwrap();

    cargo_bin_cmd!("md2html")
        .args([source.to_str().unwrap(), dest.to_str().unwrap()])
        .assert()
        .success();

    let html = fs::read_to_string(&dest).unwrap();
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn test_file_to_stdout_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("doc.md");
    fs::write(&source, "> q\n").unwrap();

    cargo_bin_cmd!("md2html")
        .args([source.to_str().unwrap(), "-"])
        .assert()
        .success()
        .stdout("<blockquote>\nq\n</blockquote>\n");

    // The default .html sibling must not appear when stdout is selected.
    assert!(!temp_dir.path().join("doc.html").exists());
}

#[test]
fn test_missing_source_reports_path() {
    cargo_bin_cmd!("md2html")
        .arg("/nonexistent/doc.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("doc.md"));
}

#[test]
fn test_missing_dest_dir_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("doc.md");
    let dest = temp_dir.path().join("no/such/dir/out.html");
    fs::write(&source, "# Title\n").unwrap();

    cargo_bin_cmd!("md2html")
        .args([source.to_str().unwrap(), dest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination directory"));

    assert!(!dest.exists());
}
