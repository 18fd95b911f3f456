//! Record entity model.

use std::fmt;

use chrono::NaiveDate;
use docdesk_core::types::RecordId;
use serde::{Deserialize, Serialize};

use super::format::{DateParseError, FOLDER_SIZE_SENTINEL, format_display_date, parse_display_date};

/// Whether a record is a file or a folder. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// An uploaded document.
    File,
    /// A folder.
    Folder,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// A document or folder entry in the managed collection.
///
/// The wire shape matches the backend's `documents` rows:
/// `{ id, name, type, createdBy, date, size }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Stable identity across renames, re-sorts, and re-pages.
    pub id: RecordId,
    /// Display name; the only field that may change after creation.
    pub name: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Display-only author name.
    pub created_by: String,
    /// Creation date in `DD Mon YYYY` form.
    #[serde(rename = "date")]
    pub created_date: String,
    /// `"<x.y> KB"` for files, `"-"` for folders.
    pub size: String,
}

impl Record {
    /// Check if this record is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == RecordKind::Folder
    }

    /// Parse the creation date into a comparable value.
    pub fn created_on(&self) -> Result<NaiveDate, DateParseError> {
        parse_display_date(&self.created_date)
    }

    /// Case-insensitive name comparison key.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether this record's name collides with `name` for the given kind.
    pub fn has_name(&self, kind: RecordKind, name: &str) -> bool {
        self.kind == kind && self.name.to_lowercase() == name.to_lowercase()
    }

    /// Return a copy carrying a new name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Data required to create a new record. The id and date are supplied by
/// the caller at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Record name.
    pub name: String,
    /// File or folder.
    pub kind: RecordKind,
    /// Author shown in the "Created by" column.
    pub created_by: String,
    /// Preformatted size; defaults by kind when absent.
    pub size: Option<String>,
}

impl NewRecord {
    /// A folder entry.
    pub fn folder(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RecordKind::Folder,
            created_by: created_by.into(),
            size: None,
        }
    }

    /// A file entry with a preformatted size.
    pub fn file(
        name: impl Into<String>,
        created_by: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: RecordKind::File,
            created_by: created_by.into(),
            size: Some(size.into()),
        }
    }

    /// Materialize the record with its assigned id and creation day.
    pub fn build(self, id: RecordId, created_on: NaiveDate) -> Record {
        let size = match (self.size, self.kind) {
            (Some(size), _) => size,
            (None, RecordKind::Folder) => FOLDER_SIZE_SENTINEL.to_string(),
            (None, RecordKind::File) => "0.0 KB".to_string(),
        };
        Record {
            id,
            name: self.name,
            kind: self.kind,
            created_by: self.created_by,
            created_date: format_display_date(created_on),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
    }

    #[test]
    fn test_folder_build_uses_sentinel() {
        let record = NewRecord::folder("Finance", "John Green").build(RecordId(1), day());
        assert_eq!(record.size, "-");
        assert_eq!(record.created_date, "15 Jan 2025");
        assert!(record.is_folder());
    }

    #[test]
    fn test_file_build_keeps_size() {
        let record =
            NewRecord::file("report.pdf", "John Green", "2.0 KB").build(RecordId(2), day());
        assert_eq!(record.kind, RecordKind::File);
        assert_eq!(record.size, "2.0 KB");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":3,"name":"Finance","type":"folder","createdBy":"User 17","date":"01 Apr 2024","size":"-"}"#;
        let record: Record = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.id, RecordId(3));
        assert_eq!(record.kind, RecordKind::Folder);
        assert_eq!(record.created_by, "User 17");
        assert_eq!(record.created_date, "01 Apr 2024");

        let back = serde_json::to_value(&record).expect("serialize");
        assert_eq!(back["type"], "folder");
        assert_eq!(back["createdBy"], "User 17");
        assert_eq!(back["date"], "01 Apr 2024");
    }

    #[test]
    fn test_has_name_is_case_insensitive_and_kind_scoped() {
        let record = NewRecord::folder("Reports", "John Green").build(RecordId(4), day());
        assert!(record.has_name(RecordKind::Folder, "reports"));
        assert!(!record.has_name(RecordKind::File, "Reports"));
    }

    #[test]
    fn test_created_on() {
        let record = NewRecord::folder("Legal", "x").build(RecordId(5), day());
        assert_eq!(record.created_on().expect("parse"), day());

        let broken = Record {
            created_date: "yesterday".into(),
            ..record
        };
        assert!(broken.created_on().is_err());
    }
}
