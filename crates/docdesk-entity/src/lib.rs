//! # docdesk-entity
//!
//! Domain entity models for DocDesk. A [`record::Record`] is one row of the
//! document table, either a file or a folder. The display formats for dates
//! and sizes live here too, because a record's date doubles as its sort key.

pub mod record;
pub mod upload;

pub use record::{DateParseError, NewRecord, Record, RecordKind};
pub use upload::SelectedFile;
