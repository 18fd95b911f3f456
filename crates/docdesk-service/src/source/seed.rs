//! Record source serving the built-in seed rows.

use async_trait::async_trait;

use docdesk_core::result::AppResult;
use docdesk_entity::Record;

use super::RecordSource;
use crate::seed::seed_records;

/// Serves [`seed_records`] without touching the network or disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedRecordSource;

#[async_trait]
impl RecordSource for SeedRecordSource {
    fn source_type(&self) -> &str {
        "seed"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Record>> {
        Ok(seed_records())
    }
}
