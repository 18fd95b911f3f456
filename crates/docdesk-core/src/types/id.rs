//! Record identifier newtype.
//!
//! Ids are client-assigned integers derived from the creation timestamp in
//! milliseconds. Wrapping them keeps a page index or a row count from being
//! passed where an identity is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a document or folder record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Create an identifier from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// The identifier immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> i64 {
        id.0
    }
}
