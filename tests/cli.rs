mod common;

use std::fs;

use assert_cmd::Command;
use common::{PageSpec, TextLine};
use predicates::prelude::*;
use tempfile::tempdir;

fn pdf2docx() -> Command {
    Command::cargo_bin("pdf2docx").unwrap()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    pdf2docx()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: pdf2docx <INPUT_PDF>"));
}

#[test]
fn extra_arguments_print_usage_and_exit_1() {
    pdf2docx()
        .args(["one.pdf", "two.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_is_not_an_error() {
    pdf2docx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT_PDF"));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempdir().unwrap();
    pdf2docx()
        .arg(dir.path().join("absent.pdf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn directory_input_fails() {
    let dir = tempdir().unwrap();
    pdf2docx()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn converts_and_reports_both_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("letter.pdf");
    common::write_pdf(&input, &[PageSpec::letter(vec![TextLine::new("Dear reader", 72.0, 700.0)])]);
    let output = dir.path().join("letter.docx");

    pdf2docx()
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("Converted '{}' to '{}'\n", input.display(), output.display()));

    assert!(output.is_file());
    assert_eq!(common::paragraph_texts(&output), vec!["Dear reader"]);
}

#[test]
fn corrupt_pdf_reports_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.pdf");
    fs::write(&input, b"%PDF-1.7\nthis is not really a pdf").unwrap();

    pdf2docx()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
    assert!(!dir.path().join("broken.docx").exists());
}
