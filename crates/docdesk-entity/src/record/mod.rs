//! Record domain entities.

pub mod format;
pub mod model;

pub use format::{
    DateParseError, FOLDER_SIZE_SENTINEL, format_display_date, format_size_kb, parse_display_date,
};
pub use model::{NewRecord, Record, RecordKind};
