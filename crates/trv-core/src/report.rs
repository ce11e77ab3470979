//! # Report Model
//!
//! Typed view of a validated `todo_report.json` document. Values of these
//! types are built by the validator only after every check has passed.

use serde::Serialize;

use crate::confidence::Confidence;
use crate::line_number::LineNumber;

/// One finding in a report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    pub title: String,
    pub description: String,
    pub deep_link: String,
    pub file_path: String,
    pub line_number: LineNumber,
    pub confidence: Confidence,
    pub rationale: String,
    pub context: String,
    pub language: String,
}

/// An ordered sequence of report items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportDocument {
    items: Vec<ReportItem>,
}

impl ReportDocument {
    /// Wrap items that have already been validated.
    pub fn new(items: Vec<ReportItem>) -> Self {
        Self { items }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the document holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a slice of all items.
    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    /// Iterate items in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportItem> {
        self.items.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ReportItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ReportDocument {
    type Item = &'a ReportItem;
    type IntoIter = std::slice::Iter<'a, ReportItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
