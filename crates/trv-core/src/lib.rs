//! # trv-core — Foundational Types for the Todo-Report Validator
//!
//! Defines the report contract as data and the types every other crate
//! in the workspace builds on. Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Schema as data.** The nine required keys live in one enum,
//!    [`ReportField`], in declared order. Each field carries a
//!    [`FieldKind`], and the kinds define the order in which type checks
//!    run. Validators iterate the table; they never hand-list keys.
//!
//! 2. **Validated newtypes.** [`Confidence`] can only hold 1, 2 or 3;
//!    [`LineNumber`] holds any JSON integer, however large.
//!
//! 3. **Parse, don't validate.** The validator returns a typed
//!    [`ReportDocument`] only after every check has passed.
//!
//! 4. **One failure taxonomy.** [`ReportError`] renders exactly the
//!    diagnostic line the CLI prints, and [`FailureClass`] groups the
//!    variants into IO, syntax, schema and unexpected failures.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `trv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod confidence;
pub mod error;
pub mod field;
pub mod line_number;
pub mod report;

pub use confidence::Confidence;
pub use error::{FailureClass, ReportError, UnknownFieldError};
pub use field::{is_integer, FieldKind, ReportField, REPORT_FIELD_COUNT};
pub use line_number::LineNumber;
pub use report::{ReportDocument, ReportItem};
