//! Document table configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Document table defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page when the table first opens.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Choices offered by the rows-per-page selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Name recorded as `createdBy` on new folders and uploads.
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            author: default_author(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

fn default_author() -> String {
    "John Green".to_string()
}
