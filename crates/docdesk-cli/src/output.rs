//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use docdesk_core::types::PageResponse;
use docdesk_entity::Record;
use docdesk_service::{SelectionState, TableState};

/// Shown instead of an empty table.
pub const EMPTY_MESSAGE: &str = "No documents found";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// One document table row.
#[derive(Debug, Serialize, Tabled)]
pub struct RecordRow {
    /// Selection checkbox
    #[tabled(rename = "")]
    pub selected: &'static str,
    /// Record ID
    #[tabled(rename = "ID")]
    pub id: String,
    /// Name, or the rename draft while editing
    #[tabled(rename = "Name")]
    pub name: String,
    /// File or folder
    #[tabled(rename = "Type")]
    pub kind: String,
    /// Creator
    #[tabled(rename = "Created by")]
    pub created_by: String,
    /// Creation date
    #[tabled(rename = "Date")]
    pub date: String,
    /// Display size
    #[tabled(rename = "File size")]
    pub size: String,
}

impl RecordRow {
    /// Build the row for `record` as the table currently shows it.
    pub fn from_table(record: &Record, table: &TableState) -> Self {
        let name = match table.editing() {
            Some(draft) if draft.id == record.id => format!("{} ✎", draft.buffer),
            _ => record.name.clone(),
        };
        Self {
            selected: if table.is_selected(record.id) {
                "[x]"
            } else {
                "[ ]"
            },
            id: record.id.to_string(),
            name,
            kind: record.kind.to_string(),
            created_by: record.created_by.clone(),
            date: record.created_date.clone(),
            size: record.size.clone(),
        }
    }
}

/// Header checkbox marker.
pub fn selection_marker(state: SelectionState) -> &'static str {
    match state {
        SelectionState::None => "[ ]",
        SelectionState::Partial => "[-]",
        SelectionState::All => "[x]",
    }
}

/// Footer line under the table, e.g. `Page 2 of 3 · 25 documents · 10 per page`.
pub fn page_footer<T: Serialize>(page: &PageResponse<T>) -> String {
    format!(
        "Page {} of {} · {} documents · {} per page",
        page.page + 1,
        page.total_pages,
        page.total_items,
        page.page_size
    )
}

/// Print the current page of `table`.
pub fn print_page(table: &TableState, format: OutputFormat) {
    let page = table.page_response();
    match format {
        OutputFormat::Table => {
            if table.is_loading() {
                println!("Loading...");
                return;
            }
            if page.items.is_empty() {
                println!("{}", EMPTY_MESSAGE);
            } else {
                let rows: Vec<RecordRow> = page
                    .items
                    .iter()
                    .map(|record| RecordRow::from_table(record, table))
                    .collect();
                println!("{}", Table::new(rows));
            }
            let selected = table.selected_count();
            if selected > 0 {
                println!(
                    "{} {} selected",
                    selection_marker(table.selection_state()),
                    selected
                );
            }
            println!("{}", page_footer(&page));
        }
        OutputFormat::Json => print_item(&page, format),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use docdesk_core::types::{PageRequest, RecordId};
    use docdesk_entity::RecordKind;

    use super::*;

    fn record(id: i64, name: &str) -> Record {
        Record {
            id: RecordId(id),
            name: name.to_string(),
            kind: RecordKind::File,
            created_by: "John Green".to_string(),
            created_date: "15 Jan 2025".to_string(),
            size: "2.0 KB".to_string(),
        }
    }

    #[test]
    fn test_row_marks_selection_and_draft() {
        let mut table = TableState::new(10);
        table.load(vec![record(1, "a.pdf"), record(2, "b.pdf")]);
        table.toggle_select(RecordId(1));
        table.begin_rename(RecordId(2)).expect("begin");
        table.edit_rename_buffer("c.pdf");

        let first = RecordRow::from_table(&record(1, "a.pdf"), &table);
        let second = RecordRow::from_table(&record(2, "b.pdf"), &table);

        assert_eq!(first.selected, "[x]");
        assert_eq!(first.name, "a.pdf");
        assert_eq!(second.selected, "[ ]");
        assert_eq!(second.name, "c.pdf ✎");
        assert_eq!(second.kind, "file");
    }

    #[test]
    fn test_page_footer() {
        let items: Vec<Record> = PageRequest::new(1, 10)
            .slice(&(1..=25).map(|i| record(i, "x")).collect::<Vec<_>>())
            .to_vec();
        let page = PageResponse::new(items, 1, 10, 25);
        assert_eq!(
            page_footer(&page),
            "Page 2 of 3 · 25 documents · 10 per page"
        );
    }

    #[test]
    fn test_selection_marker() {
        assert_eq!(selection_marker(SelectionState::Partial), "[-]");
        assert_eq!(selection_marker(SelectionState::All), "[x]");
    }
}
