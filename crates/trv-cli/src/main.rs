//! # trv CLI entry point
//!
//! Validates `todo_report.json` in the working directory. Recognizes only
//! clap's `--help` and `--version`; any other arguments are ignored.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trv_cli::{run_validate, DEFAULT_REPORT_PATH};

/// Todo-report validator.
///
/// Checks that ./todo_report.json is a JSON array of report items, each
/// with title, description, deepLink, filePath, lineNumber, confidence
/// (1-3), rationale, context and language. Prints the first violation.
#[derive(Parser, Debug)]
#[command(name = "trv", version, about, long_about = None)]
struct Cli {
    /// Accepted and ignored; the report path is fixed.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
    }

    if !cli.ignored.is_empty() {
        tracing::debug!(args = ?cli.ignored, "ignoring command-line arguments");
    }

    // Panics are caught by the validation boundary; route the report to the log.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "validator panicked");
    }));

    let mut stdout = std::io::stdout().lock();
    if run_validate(Path::new(DEFAULT_REPORT_PATH), &mut stdout) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `error`).
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
