//! Fixed display formats shared by rendering and sorting.
//!
//! Dates are `"DD Mon YYYY"` (e.g. `"15 Jan 2025"`), file sizes are
//! kilobytes to one decimal (`"3.3 KB"`), and `"-"` marks a size that does
//! not apply.

use chrono::NaiveDate;
use docdesk_core::error::AppError;
use thiserror::Error;

/// `chrono` pattern for the display date.
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Size shown for folders.
pub const FOLDER_SIZE_SENTINEL: &str = "-";

/// A `createdDate` string that does not match the display format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unparseable date '{value}' (expected DD Mon YYYY)")]
pub struct DateParseError {
    /// The offending date string.
    pub value: String,
}

impl From<DateParseError> for AppError {
    fn from(err: DateParseError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Render a date in the display format.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a display-format date back into a comparable value.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_DATE_FORMAT).map_err(|_| DateParseError {
        value: value.to_string(),
    })
}

/// Render a byte count as kilobytes with one decimal, rounding half up.
pub fn format_size_kb(bytes: u64) -> String {
    // Tenths of a KB, rounded half-up in integer arithmetic.
    let tenths = (u128::from(bytes) * 10 + 512) / 1024;
    format!("{}.{} KB", tenths / 10, tenths % 10)
}
