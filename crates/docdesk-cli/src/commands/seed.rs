//! Seed data export.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_service::seed::seed_records;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Write to this file instead of stdout; usable as `source.path`
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs) -> AppResult<()> {
    let records = seed_records();
    let json = serde_json::to_string_pretty(&records)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::internal(format!("Failed to create dir: {}", e)))?;
            }
            tokio::fs::write(path, json)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write seed file: {}", e)))?;
            output::print_success(&format!(
                "Wrote {} records to '{}'",
                records.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use docdesk_entity::Record;

    use super::*;

    #[tokio::test]
    async fn test_seed_writes_loadable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data").join("records.json");

        execute(&SeedArgs {
            out: Some(path.clone()),
        })
        .await
        .expect("seed");

        let text = std::fs::read_to_string(&path).expect("read");
        let records: Vec<Record> = serde_json::from_str(&text).expect("parse");
        assert_eq!(records, seed_records());
    }
}
