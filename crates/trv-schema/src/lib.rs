//! # trv-schema — Report Validation & Contract Rendering
//!
//! ## Runtime Validation (`validate`)
//!
//! [`SchemaValidator`] reads a `todo_report.json` document, parses it, and
//! walks the [`trv_core::ReportField`] table over every item. The first
//! violation ends the run; on success the typed
//! [`trv_core::ReportDocument`] is returned.
//!
//! ## Contract Rendering (`contract`)
//!
//! [`contract::document_json_schema`] renders the same field table as a
//! Draft 2020-12 JSON Schema, the form checked in under `schemas/` for
//! producers of report files.
//!
//! ## Crate Policy
//!
//! - Depends only on `trv-core` internally.
//! - Never aggregates errors: one run, one diagnostic.

pub mod contract;
pub mod validate;

pub use contract::{compile_contract, document_json_schema, ContractError};
pub use validate::{validate, SchemaValidator};
