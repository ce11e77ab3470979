//! Integration test: validate report documents read from disk.
//!
//! Each test writes a `todo_report.json` into a fresh temporary directory
//! and runs the full read → parse → check pipeline on it.

use std::path::PathBuf;

use tempfile::TempDir;
use trv_core::{FailureClass, ReportError, ReportField};
use trv_schema::{validate, SchemaValidator};

const VALID_ITEM: &str = r#"{"title":"t","description":"d","deepLink":"l","filePath":"f","lineNumber":5,"confidence":2,"rationale":"r","context":"c","language":"py"}"#;

/// Write `content` to `todo_report.json` in a new temp dir.
fn report_file(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_report.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn valid_report_from_disk() {
    let (_dir, path) = report_file(format!("[{VALID_ITEM}, {VALID_ITEM}]").as_bytes());
    let doc = validate(&path).unwrap();
    assert_eq!(doc.len(), 2);
}

#[test]
fn pretty_printed_report_with_unicode() {
    let content = r#"[
  {
    "title": "Remove dead branch",
    "description": "Der Zweig ist nie erreichbar ✅",
    "deepLink": "https://example.invalid/src/lib.rs#L10",
    "filePath": "src/lib.rs",
    "lineNumber": 10,
    "confidence": 3,
    "rationale": "日本語",
    "context": "if false { .. }",
    "language": "rust"
  }
]
"#;
    let (_dir, path) = report_file(content.as_bytes());
    let doc = validate(&path).unwrap();
    assert_eq!(doc.items()[0].rationale, "日本語");
    assert_eq!(doc.items()[0].confidence.get(), 3);
}

#[test]
fn empty_array_file_is_valid() {
    let (_dir, path) = report_file(b"[]");
    assert!(validate(&path).unwrap().is_empty());
}

#[test]
fn missing_description_reported() {
    let (_dir, path) = report_file(br#"[{"title":"t","confidence":2}]"#);
    let err = validate(&path).unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingKey {
            index: 0,
            key: ReportField::Description
        }
    ));
}

#[test]
fn object_root_file_rejected() {
    let (_dir, path) = report_file(format!(r#"{{"items": [{VALID_ITEM}]}}"#).as_bytes());
    let err = validate(&path).unwrap_err();
    assert_eq!(err.to_string(), "Error: Root element must be a JSON array.");
}

#[test]
fn trailing_comma_is_decode_error() {
    let (_dir, path) = report_file(format!("[{VALID_ITEM},]").as_bytes());
    let err = validate(&path).unwrap_err();
    assert_eq!(err.class(), FailureClass::Syntax);
    assert!(err.to_string().starts_with("JSON Decode Error: "));
}

#[test]
fn unclosed_brace_is_decode_error() {
    let (_dir, path) = report_file(b"[{\"title\": \"t\"\n");
    let err = validate(&path).unwrap_err();
    assert_eq!(err.class(), FailureClass::Syntax);
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn invalid_utf8_is_io_error() {
    let (_dir, path) = report_file(&[b'[', 0xff, 0xfe, b']']);
    let err = validate(&path).unwrap_err();
    assert_eq!(err.class(), FailureClass::Io);
}

#[test]
fn nonexistent_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_report.json");
    let err = SchemaValidator::new().validate_file(&path).unwrap_err();
    assert_eq!(err.class(), FailureClass::Io);
    assert!(err.to_string().contains("todo_report.json"), "{err}");
}

#[test]
fn directory_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate(dir.path()).unwrap_err();
    assert_eq!(err.class(), FailureClass::Io);
}
