//! # Confidence Score
//!
//! Reviewer confidence attached to every report item: an integer from 1
//! to 3. Anything else, including `2.0`, `"2"` and `true`, is rejected.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A confidence score in `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    /// Lowest accepted score.
    pub const MIN: u8 = 1;
    /// Highest accepted score.
    pub const MAX: u8 = 3;

    /// Create a confidence score, or `None` if `score` is out of range.
    pub fn new(score: i64) -> Option<Self> {
        u8::try_from(score)
            .ok()
            .filter(|s| (Self::MIN..=Self::MAX).contains(s))
            .map(Self)
    }

    /// Read a confidence score from a JSON value.
    ///
    /// The value must be an integer-typed number; floats, strings and
    /// booleans yield `None` regardless of their value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().and_then(Self::new),
            _ => None,
        }
    }

    /// The raw score.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
