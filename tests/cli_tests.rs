//! End-to-end CLI test suite.
//!
//! Each test drives the binary through its public interface against a
//! note document on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

const NOTE_JSON: &str = r#"{
    "title": "Test Note",
    "content": "Abc\n123",
    "creation": 1551464308000,
    "last_modification": 1551464308000
}"#;

fn write_note(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("note.json");
    std::fs::write(&path, json).expect("failed to write note fixture");
    path
}

fn jotter() -> Command {
    Command::cargo_bin("jotter").expect("binary should build")
}

#[test]
fn test_export_text_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(&dir, NOTE_JSON);

    jotter()
        .arg("export")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Test Note\n=========\n"))
        .stdout(predicate::str::contains("Abc\n123"))
        .stdout(predicate::str::contains("Last update"));
}

#[test]
fn test_export_html_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(&dir, NOTE_JSON);

    jotter()
        .arg("export")
        .arg(&note)
        .args(["--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Test Note"));
}

#[test]
fn test_export_pdf_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(&dir, NOTE_JSON);
    let output = dir.path().join("note.pdf");

    jotter()
        .arg("export")
        .arg(&note)
        .args(["--format", "pdf"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[1..4], b"PDF");
}

#[test]
fn test_export_to_directory_uses_title_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(&dir, NOTE_JSON);
    let out_dir = dir.path().join("exports");
    std::fs::create_dir(&out_dir).unwrap();

    jotter()
        .arg("export")
        .arg(&note)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Note.txt"));

    assert!(out_dir.join("Test Note.txt").exists());
}

#[test]
fn test_export_checklist_note() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(
        &dir,
        r#"{
            "title": "List",
            "content": "[x] Done\n[ ] Todo",
            "checklist": true
        }"#,
    );

    jotter()
        .arg("export")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains(" - [X] Done"))
        .stdout(predicate::str::contains(" - [ ] Todo"));
}

#[test]
fn test_export_missing_note_fails() {
    jotter()
        .arg("export")
        .arg("/nonexistent/note.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_export_invalid_note_fails() {
    let dir = tempfile::tempdir().unwrap();
    let note = write_note(&dir, "not json at all");

    jotter()
        .arg("export")
        .arg(&note)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn test_completions() {
    jotter()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jotter"));
}
