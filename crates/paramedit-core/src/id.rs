//! Stable ID newtype for parameters.
//!
//! A [`ParamId`] identifies a parameter definition and, once reconciled, the
//! editable record built from it. Stored values refer to definitions through
//! the same id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameter identifier, shared by definitions, stored values and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub i64);

impl ParamId {
    /// The id immediately following this one.
    pub fn next(self) -> ParamId {
        ParamId(self.0.saturating_add(1))
    }
}

// Display just prints the inner value.

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ParamId {
    fn from(raw: i64) -> Self {
        ParamId(raw)
    }
}
