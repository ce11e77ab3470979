//! # Report Validation
//!
//! Single-pass structural check of a report document:
//!
//! 1. read the file as UTF-8 text,
//! 2. parse it as JSON,
//! 3. require an array at the root,
//! 4. check each item in order.
//!
//! ## Item Checks
//!
//! Within an item, presence of every key is checked first in declared
//! order. Type checks then run per [`FieldKind::check_order`]:
//! `confidence`, then the string fields, then `lineNumber`. The first
//! failing check aborts the whole run.
//!
//! Array and string elements are asked for keys by membership, so they
//! normally fail with a missing `title`. Numbers, booleans and null cannot
//! be asked at all and are reported through [`ReportError::Unexpected`].

use std::path::Path;

use serde_json::{Map, Value};
use trv_core::{
    Confidence, FieldKind, LineNumber, ReportDocument, ReportError, ReportField, ReportItem,
};

/// Validator for `todo_report.json` documents.
///
/// Stateless: the field table is static, so one instance can validate any
/// number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Create a validator bound to the report field table.
    pub fn new() -> Self {
        Self
    }

    /// The fields every item must carry, in declared order.
    pub fn fields(&self) -> &'static [ReportField] {
        ReportField::all()
    }

    /// Read, parse and validate the document at `path`.
    ///
    /// The file is read to completion and closed before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Io` if the file cannot be read as UTF-8 text,
    /// otherwise any error from [`validate_str`](Self::validate_str).
    pub fn validate_file(&self, path: &Path) -> Result<ReportDocument, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.validate_str(&content)
    }

    /// Parse and validate a document held in memory.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Syntax` with the parser's message (including
    /// line and column) if `content` is not valid JSON, otherwise any error
    /// from [`validate_value`](Self::validate_value).
    pub fn validate_str(&self, content: &str) -> Result<ReportDocument, ReportError> {
        let document: Value = serde_json::from_str(content)?;
        self.validate_value(&document)
    }

    /// Validate an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RootNotArray` if `document` is not an array,
    /// otherwise the first item failure from [`check_item`](Self::check_item).
    pub fn validate_value(&self, document: &Value) -> Result<ReportDocument, ReportError> {
        let items = document.as_array().ok_or(ReportError::RootNotArray)?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.check_item(index, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ReportDocument::new)
    }

    /// Check a single item and build its typed form.
    pub fn check_item(&self, index: usize, item: &Value) -> Result<ReportItem, ReportError> {
        let map = match item {
            Value::Object(map) => map,
            Value::Array(_) | Value::String(_) => return Err(self.non_object_item(index, item)),
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                return Err(ReportError::Unexpected(format!(
                    "item at index {index} is not a JSON object"
                )));
            }
        };

        if let Some(key) = self
            .fields()
            .iter()
            .copied()
            .find(|field| !map.contains_key(field.as_str()))
        {
            return Err(ReportError::MissingKey { index, key });
        }

        for &kind in FieldKind::check_order() {
            for field in kind.fields() {
                let value = field_value(map, index, field)?;
                if !kind.accepts(value) {
                    return Err(violation(kind, index, field));
                }
            }
        }

        build_item(map, index)
    }

    /// Failure for an array or string item.
    ///
    /// Key presence is answered by membership: an array holds a key if one
    /// of its elements is that string, a string holds a key if it contains
    /// it. The first key not held is reported missing. An item holding
    /// every key still has no values to check, which is unexpected.
    fn non_object_item(&self, index: usize, item: &Value) -> ReportError {
        let holds = |key: &str| match item {
            Value::Array(elements) => elements.iter().any(|e| e.as_str() == Some(key)),
            Value::String(text) => text.contains(key),
            _ => false,
        };

        match self
            .fields()
            .iter()
            .copied()
            .find(|field| !holds(field.as_str()))
        {
            Some(key) => ReportError::MissingKey { index, key },
            None => ReportError::Unexpected(format!(
                "item at index {index} is not a JSON object"
            )),
        }
    }
}

/// Validate the document at `path` with a default [`SchemaValidator`].
pub fn validate(path: impl AsRef<Path>) -> Result<ReportDocument, ReportError> {
    SchemaValidator::new().validate_file(path.as_ref())
}

/// The error reported when a value of `kind` is rejected.
fn violation(kind: FieldKind, index: usize, key: ReportField) -> ReportError {
    match kind {
        FieldKind::Confidence => ReportError::InvalidConfidence { index },
        FieldKind::String => ReportError::NotAString { index, key },
        FieldKind::Integer => ReportError::NotAnInteger { index, key },
    }
}

fn field_value<'a>(
    map: &'a Map<String, Value>,
    index: usize,
    field: ReportField,
) -> Result<&'a Value, ReportError> {
    map.get(field.as_str())
        .ok_or(ReportError::MissingKey { index, key: field })
}

/// Convert a fully checked item into its typed form.
fn build_item(map: &Map<String, Value>, index: usize) -> Result<ReportItem, ReportError> {
    let text = |field: ReportField| -> Result<String, ReportError> {
        field_value(map, index, field)?
            .as_str()
            .map(str::to_owned)
            .ok_or(ReportError::NotAString { index, key: field })
    };

    let line_number = LineNumber::from_json(field_value(map, index, ReportField::LineNumber)?)
        .ok_or(ReportError::NotAnInteger {
            index,
            key: ReportField::LineNumber,
        })?;
    let confidence = Confidence::from_json(field_value(map, index, ReportField::Confidence)?)
        .ok_or(ReportError::InvalidConfidence { index })?;

    Ok(ReportItem {
        title: text(ReportField::Title)?,
        description: text(ReportField::Description)?,
        deep_link: text(ReportField::DeepLink)?,
        file_path: text(ReportField::FilePath)?,
        line_number,
        confidence,
        rationale: text(ReportField::Rationale)?,
        context: text(ReportField::Context)?,
        language: text(ReportField::Language)?,
    })
}
