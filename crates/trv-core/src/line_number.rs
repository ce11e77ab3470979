//! # Line Number
//!
//! `lineNumber` accepts any JSON integer, however large. The number is kept
//! in its JSON form (`serde_json` is built with `arbitrary_precision`), so
//! `100000000000000000000` survives validation unchanged.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::field::is_integer;

/// An integer line number of unbounded size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LineNumber(Number);

impl LineNumber {
    /// Read a line number from a JSON value, or `None` if it is not an integer.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if is_integer(value) => Some(Self(n.clone())),
            _ => None,
        }
    }

    /// The value as `i64`, if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// The underlying JSON number.
    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
