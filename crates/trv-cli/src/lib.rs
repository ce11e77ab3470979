//! # trv-cli — Todo-Report Validator CLI
//!
//! Provides the `trv` command. Running it validates `todo_report.json` in
//! the current working directory, prints one diagnostic line to stdout,
//! and exits 0 on success or 1 on any failure.
//!
//! ```bash
//! trv          # validates ./todo_report.json
//! echo $?      # 0 or 1
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers delegate to `trv-schema`; no validation logic here.
//! - Stdout carries exactly the diagnostic line. Logs go to stderr.

use std::any::Any;
use std::io::Write;
use std::panic::{self, UnwindSafe};
use std::path::Path;

use anyhow::Context;
use trv_core::{ReportDocument, ReportError};

/// Report file validated by the `trv` binary, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "todo_report.json";

/// Line printed when every item conforms.
pub const SUCCESS_MESSAGE: &str = "Validation successful!";

/// Validate the report at `path` and write the diagnostic line to `out`.
///
/// Returns `true` only if the document conforms and the line was written.
pub fn run_validate(path: &Path, out: &mut impl Write) -> bool {
    tracing::debug!(path = %path.display(), "validating report");

    let outcome = guarded(|| trv_schema::validate(path));
    let (line, passed) = match &outcome {
        Ok(doc) => {
            tracing::info!(items = doc.len(), "report valid");
            (SUCCESS_MESSAGE.to_string(), true)
        }
        Err(e) => {
            tracing::info!(
                class = e.class().as_str(),
                index = ?e.item_index(),
                "report invalid"
            );
            (e.to_string(), false)
        }
    };

    match write_line(out, &line) {
        Ok(()) => passed,
        Err(e) => {
            tracing::error!("{e:#}");
            false
        }
    }
}

/// Run `check` inside an error boundary.
///
/// A panic anywhere in `check` becomes `ReportError::Unexpected` carrying
/// the panic message, so the caller always gets a diagnostic.
pub fn guarded<F>(check: F) -> Result<ReportDocument, ReportError>
where
    F: FnOnce() -> Result<ReportDocument, ReportError> + UnwindSafe,
{
    panic::catch_unwind(check)
        .unwrap_or_else(|payload| Err(ReportError::Unexpected(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "validator panicked".to_string()
    }
}

fn write_line(out: &mut impl Write, line: &str) -> anyhow::Result<()> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .context("failed to write diagnostic to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const VALID: &str = r#"[{"title":"t","description":"d","deepLink":"l","filePath":"f","lineNumber":5,"confidence":2,"rationale":"r","context":"c","language":"py"}]"#;

    fn run_on(content: &str) -> (bool, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REPORT_PATH);
        std::fs::write(&path, content).unwrap();
        let mut out = Vec::new();
        let passed = run_validate(&path, &mut out);
        (passed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn success_prints_single_line() {
        let (passed, out) = run_on(VALID);
        assert!(passed);
        assert_eq!(out, "Validation successful!\n");
    }

    #[test]
    fn failure_prints_error_line() {
        let (passed, out) = run_on(r#"[{"title":"t","confidence":2}]"#);
        assert!(!passed);
        assert_eq!(out, "Error: Item at index 0 is missing key 'description'.\n");
    }

    #[test]
    fn decode_error_line() {
        let (passed, out) = run_on("[");
        assert!(!passed);
        assert!(out.starts_with("JSON Decode Error: "), "{out}");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn missing_file_reports_generic_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let passed = run_validate(&dir.path().join(DEFAULT_REPORT_PATH), &mut out);
        assert!(!passed);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("An unexpected error occurred: "), "{out}");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn panic_becomes_unexpected_error() {
        let err = guarded(|| panic!("index out of bounds")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: index out of bounds"
        );
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let code = 7;
        let err = guarded(move || panic!("bad state {code}")).unwrap_err();
        assert_eq!(err.to_string(), "An unexpected error occurred: bad state 7");
    }

    #[test]
    fn non_panicking_check_passes_through() {
        let doc = guarded(|| Ok(ReportDocument::default())).unwrap();
        assert!(doc.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_output_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REPORT_PATH);
        std::fs::write(&path, VALID).unwrap();
        assert!(!run_validate(&path, &mut BrokenPipe));
    }
}
