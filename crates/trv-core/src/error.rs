//! # Error Types — Report Failure Taxonomy
//!
//! Every way a validation run can fail, as one `thiserror` enum.
//!
//! ## Design
//!
//! - The `Display` of each variant is the exact diagnostic line the CLI
//!   prints, so callers never format messages themselves.
//! - Every failure is terminal: nothing is retried and no further checks
//!   run after the first error.
//! - [`FailureClass`] groups variants into IO, syntax, schema and
//!   unexpected failures for logging.

use thiserror::Error;

use crate::field::ReportField;

/// Coarse classification of a [`ReportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The document could not be read.
    Io,
    /// The document is not well-formed JSON.
    Syntax,
    /// The JSON does not match the report contract.
    Schema,
    /// Anything else that went wrong while processing.
    Unexpected,
}

impl FailureClass {
    /// Returns a lowercase label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Syntax => "syntax",
            Self::Schema => "schema",
            Self::Unexpected => "unexpected",
        }
    }
}

/// First failure encountered while validating a report document.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The document file could not be opened or read as UTF-8 text.
    #[error("An unexpected error occurred: cannot read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("JSON Decode Error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The top-level value is not an array.
    #[error("Error: Root element must be a JSON array.")]
    RootNotArray,

    /// An item lacks a required key.
    #[error("Error: Item at index {index} is missing key '{key}'.")]
    MissingKey {
        /// Zero-based item index.
        index: usize,
        /// First missing key in declared order.
        key: ReportField,
    },

    /// `confidence` is not an integer in 1..=3.
    #[error("Error: Item at index {index} has invalid confidence score. Must be int 1-3.")]
    InvalidConfidence {
        /// Zero-based item index.
        index: usize,
    },

    /// A string field holds a non-string value.
    #[error("Error: Item at index {index} key '{key}' must be a string.")]
    NotAString {
        /// Zero-based item index.
        index: usize,
        /// The offending field.
        key: ReportField,
    },

    /// An integer field holds a non-integer value.
    #[error("Error: Item at index {index} key '{key}' must be an integer.")]
    NotAnInteger {
        /// Zero-based item index.
        index: usize,
        /// The offending field.
        key: ReportField,
    },

    /// Catch-all for faults outside the enumerated schema errors.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ReportError {
    /// Returns the taxonomy class of this failure.
    pub fn class(&self) -> FailureClass {
        match self {
            Self::Io { .. } => FailureClass::Io,
            Self::Syntax(_) => FailureClass::Syntax,
            Self::RootNotArray
            | Self::MissingKey { .. }
            | Self::InvalidConfidence { .. }
            | Self::NotAString { .. }
            | Self::NotAnInteger { .. } => FailureClass::Schema,
            Self::Unexpected(_) => FailureClass::Unexpected,
        }
    }

    /// Returns the index of the offending item, if the failure is tied to one.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::MissingKey { index, .. }
            | Self::InvalidConfidence { index }
            | Self::NotAString { index, .. }
            | Self::NotAnInteger { index, .. } => Some(*index),
            Self::Io { .. } | Self::Syntax(_) | Self::RootNotArray | Self::Unexpected(_) => None,
        }
    }
}

/// A string that does not name any [`ReportField`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown report field: {0}")]
pub struct UnknownFieldError(pub String);
