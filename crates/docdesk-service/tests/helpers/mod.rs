//! Shared test helpers for integration tests.

#![allow(dead_code)]

use chrono::DateTime;

use docdesk_core::types::RecordId;
use docdesk_entity::{Record, RecordKind};
use docdesk_service::{CommandContext, TableState};

/// A fixed command context so ids and dates are predictable.
pub fn ctx() -> CommandContext {
    let at = DateTime::parse_from_rfc3339("2025-01-15T10:00:00+00:00").expect("rfc3339");
    CommandContext::at("John Green", at)
}

/// A file record.
pub fn file(id: i64, name: &str, date: &str) -> Record {
    Record {
        id: RecordId(id),
        name: name.to_string(),
        kind: RecordKind::File,
        created_by: "User 1".to_string(),
        created_date: date.to_string(),
        size: "1.0 KB".to_string(),
    }
}

/// A folder record.
pub fn folder(id: i64, name: &str, date: &str) -> Record {
    Record {
        kind: RecordKind::Folder,
        size: "-".to_string(),
        ..file(id, name, date)
    }
}

/// `count` files named `doc-01.pdf`, `doc-02.pdf`, ... with distinct days.
pub fn numbered_files(count: i64) -> Vec<Record> {
    (1..=count)
        .map(|i| file(i, &format!("doc-{i:02}.pdf"), &format!("{:02} Jan 2024", i.min(28))))
        .collect()
}

/// A loaded table.
pub fn loaded(records: Vec<Record>, page_size: usize) -> TableState {
    let mut table = TableState::new(page_size);
    table.load(records);
    table
}

/// Ids of `records`, in order.
pub fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|r| r.id.get()).collect()
}
