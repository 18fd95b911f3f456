//! Metadata handed over by the file picker.

use serde::{Deserialize, Serialize};

use crate::record::{NewRecord, format_size_kb};

/// A file chosen for upload. Only its name and byte size are used; the
/// contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name including extension.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl SelectedFile {
    /// Create a selected-file entry.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// The file record this upload would create.
    pub fn to_new_record(&self, created_by: &str) -> NewRecord {
        NewRecord::file(&self.name, created_by, format_size_kb(self.size_bytes))
    }
}
