//! # Report Fields — Single Source of Truth
//!
//! Defines the nine keys every report item must carry, in the order the
//! validator checks their presence, and the kind of value each holds.
//!
//! ## Check Ordering
//!
//! Presence is checked for all fields in declared order first. Type
//! checks then run kind by kind in [`FieldKind::check_order`]
//! (confidence, strings, integers), and within a kind in declared order.
//! Keeping both orders in this module means adding a field cannot
//! silently reorder which violation is reported first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::confidence::Confidence;
use crate::error::UnknownFieldError;

/// A required key of a report item.
///
/// | # | Field | Kind |
/// |---|-------|------|
/// | 1 | `title` | string |
/// | 2 | `description` | string |
/// | 3 | `deepLink` | string |
/// | 4 | `filePath` | string |
/// | 5 | `lineNumber` | integer |
/// | 6 | `confidence` | integer in 1..=3 |
/// | 7 | `rationale` | string |
/// | 8 | `context` | string |
/// | 9 | `language` | string |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    /// Short headline of the finding.
    Title,
    /// Longer explanation of the finding.
    Description,
    /// Link back to the finding's location in a code host.
    DeepLink,
    /// Path of the file the finding refers to.
    FilePath,
    /// Line within `filePath`.
    LineNumber,
    /// Reviewer confidence, 1 (low) to 3 (high).
    Confidence,
    /// Why the finding matters.
    Rationale,
    /// Surrounding code or prose.
    Context,
    /// Source language of the file.
    Language,
}

/// Number of required report fields.
pub const REPORT_FIELD_COUNT: usize = 9;

impl ReportField {
    /// Returns all required fields in declared order.
    pub fn all() -> &'static [ReportField] {
        &[
            Self::Title,
            Self::Description,
            Self::DeepLink,
            Self::FilePath,
            Self::LineNumber,
            Self::Confidence,
            Self::Rationale,
            Self::Context,
            Self::Language,
        ]
    }

    /// Returns the JSON key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DeepLink => "deepLink",
            Self::FilePath => "filePath",
            Self::LineNumber => "lineNumber",
            Self::Confidence => "confidence",
            Self::Rationale => "rationale",
            Self::Context => "context",
            Self::Language => "language",
        }
    }

    /// Returns the kind of value this field must hold.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::LineNumber => FieldKind::Integer,
            Self::Confidence => FieldKind::Confidence,
            Self::Title
            | Self::Description
            | Self::DeepLink
            | Self::FilePath
            | Self::Rationale
            | Self::Context
            | Self::Language => FieldKind::String,
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// The kind of value a [`ReportField`] must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// An integer in [`Confidence::MIN`]..=[`Confidence::MAX`].
    Confidence,
    /// A JSON string.
    String,
    /// A JSON integer (see [`is_integer`]).
    Integer,
}

impl FieldKind {
    /// The order in which kinds are type-checked once all keys are present.
    pub fn check_order() -> &'static [FieldKind] {
        &[Self::Confidence, Self::String, Self::Integer]
    }

    /// Fields of this kind, in declared order.
    pub fn fields(self) -> impl Iterator<Item = ReportField> {
        ReportField::all()
            .iter()
            .copied()
            .filter(move |field| field.kind() == self)
    }

    /// Whether `value` is acceptable for a field of this kind.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Confidence => Confidence::from_json(value).is_some(),
            Self::String => value.is_string(),
            Self::Integer => is_integer(value),
        }
    }
}

/// Whether a JSON value is integer-typed.
///
/// A number is an integer when its JSON text has no fraction or exponent.
/// `serde_json` keeps that text verbatim (`arbitrary_precision`), so
/// integers of any size qualify while `2.0` and `1e2` do not. Booleans are
/// never integers.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n.to_string().contains(&['.', 'e', 'E'][..]),
        _ => false,
    }
}
