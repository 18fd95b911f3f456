//! HTTP record source: `GET` an endpoint returning a JSON array.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use docdesk_core::error::{AppError, ErrorKind};
use docdesk_core::result::AppResult;
use docdesk_entity::Record;

use super::RecordSource;

/// Fetches records from a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecordSource {
    /// Create a source for `url` with a per-request timeout.
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Internal,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// The endpoint this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn source_type(&self) -> &str {
        "http"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Record>> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!(url = %self.url, error = %e, "Record fetch failed");
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to fetch documents: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %self.url, %status, "Record fetch returned an error status");
            return Err(AppError::external_service(format!(
                "Failed to fetch documents: HTTP {status}"
            )));
        }

        let records: Vec<Record> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to decode documents: {e}"),
                e,
            )
        })?;

        info!(url = %self.url, count = records.len(), "Records fetched");
        Ok(records)
    }
}
