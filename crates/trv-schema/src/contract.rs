//! # Report Contract as JSON Schema
//!
//! Renders the [`ReportField`] table as a Draft 2020-12 JSON Schema so that
//! tools producing `todo_report.json` can check their output without this
//! crate. The rendered schema is checked in at
//! `schemas/todo-report.schema.json`.
//!
//! ## Divergence
//!
//! JSON Schema counts `2.0` as an integer; [`crate::SchemaValidator`] does
//! not. Everything else the two accept or reject agrees.

use jsonschema::Validator;
use serde_json::{json, Map, Value};
use thiserror::Error;
use trv_core::{Confidence, FieldKind, ReportField};

/// Draft 2020-12 metaschema URI.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Error building the contract validator.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The rendered schema could not be compiled.
    #[error("contract schema failed to compile: {reason}")]
    Build {
        /// Compiler message.
        reason: String,
    },
}

/// Render the report contract as a JSON Schema document.
pub fn document_json_schema() -> Value {
    let properties: Map<String, Value> = ReportField::all()
        .iter()
        .map(|field| (field.as_str().to_string(), property_schema(field.kind())))
        .collect();
    let required: Vec<&str> = ReportField::all().iter().map(|f| f.as_str()).collect();

    json!({
        "$schema": DRAFT_2020_12,
        "title": "todo_report.json",
        "description": "A list of report items, each carrying all nine required fields.",
        "type": "array",
        "items": {
            "type": "object",
            "required": required,
            "properties": properties
        }
    })
}

fn property_schema(kind: FieldKind) -> Value {
    match kind {
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::Integer => json!({ "type": "integer" }),
        FieldKind::Confidence => json!({
            "type": "integer",
            "minimum": Confidence::MIN,
            "maximum": Confidence::MAX
        }),
    }
}

/// Compile [`document_json_schema`] with the `jsonschema` crate.
///
/// # Errors
///
/// Returns `ContractError::Build` if the rendered schema is not a valid
/// Draft 2020-12 schema.
pub fn compile_contract() -> Result<Validator, ContractError> {
    let schema = document_json_schema();
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&schema).map_err(|e| ContractError::Build {
        reason: e.to_string(),
    })
}
