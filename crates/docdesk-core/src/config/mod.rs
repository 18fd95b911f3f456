//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so an absent file is a valid setup.

pub mod logging;
pub mod source;
pub mod table;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::source::{SourceConfig, SourceKind};
use self::table::TableConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides (e.g. `DOCDESK_SOURCE__KIND=http`).
pub const ENV_PREFIX: &str = "DOCDESK";
/// Environment variable selecting the overlay file under `config/`.
pub const ENV_NAME_VAR: &str = "DOCDESK_ENV";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the record collection is fetched from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Document table defaults.
    #[serde(default)]
    pub table: TableConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the given file (if it exists) with an environment-specific
    /// overlay `config/{DOCDESK_ENV}` and environment variables prefixed
    /// with `DOCDESK_`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false));

        if let Ok(env) = std::env::var(ENV_NAME_VAR) {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.table.default_page_size == 0 {
            return Err(AppError::configuration(
                "table.default_page_size must be greater than zero",
            ));
        }
        if self.table.page_size_options.iter().any(|&n| n == 0) {
            return Err(AppError::configuration(
                "table.page_size_options must not contain zero",
            ));
        }
        if self.table.author.trim().is_empty() {
            return Err(AppError::configuration("table.author must not be blank"));
        }
        match self.source.kind {
            SourceKind::Http if self.source.url.trim().is_empty() => Err(
                AppError::configuration("source.url is required when source.kind = \"http\""),
            ),
            SourceKind::File if self.source.path.trim().is_empty() => Err(
                AppError::configuration("source.path is required when source.kind = \"file\""),
            ),
            _ => Ok(()),
        }
    }
}
