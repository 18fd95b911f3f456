//! Record sources: where the full collection is fetched from.
//!
//! The table calls [`RecordSource::fetch_all`] once per session. A failed
//! fetch is an [`ErrorKind::ExternalService`](docdesk_core::error::ErrorKind)
//! error and is never retried.

pub mod file;
pub mod http;
pub mod seed;

use std::time::Duration;

use async_trait::async_trait;
use tracing::error;

use docdesk_core::config::source::{SourceConfig, SourceKind};
use docdesk_core::result::AppResult;
use docdesk_entity::Record;

use crate::table::TableState;

pub use file::FileRecordSource;
pub use http::HttpRecordSource;
pub use seed::SeedRecordSource;

/// A backend that can return every record at once.
#[async_trait]
pub trait RecordSource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the source type name (e.g. "http", "file").
    fn source_type(&self) -> &str;

    /// Fetch the full record collection.
    async fn fetch_all(&self) -> AppResult<Vec<Record>>;
}

/// Fetch the collection and load it into `table`.
///
/// On failure the table is left untouched, so it stays in its loading
/// state, and the error is returned for the caller to report.
pub async fn load_table(table: &mut TableState, source: &dyn RecordSource) -> AppResult<usize> {
    match source.fetch_all().await {
        Ok(records) => {
            let count = records.len();
            table.load(records);
            Ok(count)
        }
        Err(err) => {
            error!(source = source.source_type(), error = %err, "Initial load failed");
            Err(err)
        }
    }
}

/// Build the source selected by configuration.
pub fn from_config(config: &SourceConfig) -> AppResult<Box<dyn RecordSource>> {
    let source: Box<dyn RecordSource> = match config.kind {
        SourceKind::Http => Box::new(HttpRecordSource::new(
            &config.url,
            Duration::from_secs(config.timeout_seconds),
        )?),
        SourceKind::File => Box::new(FileRecordSource::new(&config.path)),
        SourceKind::Seed => Box::new(SeedRecordSource),
    };
    Ok(source)
}
