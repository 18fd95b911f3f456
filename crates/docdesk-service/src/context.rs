//! Command context carrying who is acting and when.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use docdesk_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// Context for a create/upload command.
///
/// Passed into mutation operations so every new record knows its author,
/// and so its id and creation date come from one clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContext {
    /// Name recorded as `createdBy`.
    pub author: String,
    /// When the command was issued, in local wall time.
    pub issued_at: DateTime<FixedOffset>,
}

impl CommandContext {
    /// Creates a context stamped with the current local time.
    pub fn now(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            issued_at: Local::now().fixed_offset(),
        }
    }

    /// Creates a context for a fixed instant.
    pub fn at(author: impl Into<String>, issued_at: DateTime<FixedOffset>) -> Self {
        Self {
            author: author.into(),
            issued_at,
        }
    }

    /// The clock-derived id for the first record created by this command.
    pub fn base_id(&self) -> RecordId {
        RecordId::new(self.issued_at.timestamp_millis())
    }

    /// The creation day shown in the "Date" column.
    pub fn today(&self) -> NaiveDate {
        self.issued_at.date_naive()
    }
}
