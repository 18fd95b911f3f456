//! Local JSON file record source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use docdesk_core::error::{AppError, ErrorKind};
use docdesk_core::result::AppResult;
use docdesk_entity::Record;

use super::RecordSource;

/// Reads records from a JSON array on disk, e.g. one written by
/// `docdesk seed`.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    /// Create a source for `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    fn source_type(&self) -> &str {
        "file"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Record>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read '{}': {e}", self.path.display()),
                e,
            )
        })?;

        let records: Vec<Record> = serde_json::from_str(&contents).map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to decode '{}': {e}", self.path.display()),
                e,
            )
        })?;

        info!(path = %self.path.display(), count = records.len(), "Records loaded");
        Ok(records)
    }
}
