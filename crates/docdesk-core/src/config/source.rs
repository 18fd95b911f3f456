//! Record source configuration.

use serde::{Deserialize, Serialize};

/// Which backend the record collection is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `GET` a JSON array from `url`.
    Http,
    /// Read a JSON array from `path`.
    File,
    /// Use the built-in seed data set.
    #[default]
    Seed,
}

/// Record source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source backend.
    #[serde(default)]
    pub kind: SourceKind,
    /// Endpoint returning all records (http source).
    #[serde(default)]
    pub url: String,
    /// JSON file holding all records (file source).
    #[serde(default)]
    pub path: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            url: String::new(),
            path: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
