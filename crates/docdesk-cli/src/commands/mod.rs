//! CLI command definitions and dispatch.

pub mod browse;
pub mod config;
pub mod list;
pub mod seed;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use docdesk_core::config::AppConfig;
use docdesk_core::result::AppResult;
use docdesk_core::types::{SortDirection, SortKey};
use docdesk_service::TableState;
use docdesk_service::source::{self, load_table};

/// DocDesk: browse and edit a document table from the terminal
#[derive(Debug, Parser)]
#[command(name = "docdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one page of the document table
    List(list::ListArgs),
    /// Open an interactive table session
    Browse,
    /// Write the built-in seed records as JSON
    Seed(seed::SeedArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> AppResult<()> {
        match &self.command {
            Commands::List(args) => list::execute(args, app_config, self.format).await,
            Commands::Browse => browse::execute(app_config, self.format).await,
            Commands::Seed(args) => seed::execute(args).await,
            Commands::Config(args) => config::execute(args, &self.config, app_config, self.format),
        }
    }
}

/// Helper: fetch the collection from the configured source into a fresh table
pub async fn open_table(config: &AppConfig) -> AppResult<TableState> {
    let source = source::from_config(&config.source)?;
    let mut table = TableState::from_config(&config.table);
    let count = load_table(&mut table, source.as_ref()).await?;
    tracing::info!(source = source.source_type(), count, "Documents loaded");
    Ok(table)
}

/// Helper: sort `table` by `key`, optionally forcing a direction.
///
/// Without a direction this behaves like clicking the column header once.
pub fn apply_sort(table: &mut TableState, key: SortKey, direction: Option<SortDirection>) {
    table.toggle_sort(key);
    if let Some(direction) = direction {
        if table.sort().direction() != direction {
            table.toggle_sort(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use docdesk_service::seed::seed_records;

    use super::*;

    #[test]
    fn test_apply_sort_forces_direction() {
        let mut table = TableState::new(10);
        table.load(seed_records());

        apply_sort(&mut table, SortKey::Name, None);
        assert_eq!(table.sort().direction(), SortDirection::Asc);

        apply_sort(&mut table, SortKey::Name, Some(SortDirection::Asc));
        assert_eq!(table.sort().active, SortKey::Name);
        assert_eq!(table.sort().direction(), SortDirection::Asc);

        apply_sort(&mut table, SortKey::Date, Some(SortDirection::Asc));
        assert_eq!(table.sort().active, SortKey::Date);
        assert_eq!(table.sort().direction(), SortDirection::Asc);
    }

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = Cli::parse_from([
            "docdesk", "--format", "json", "list", "--search", "pdf", "--sort", "name",
            "--direction", "desc", "--page", "2",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search.as_deref(), Some("pdf"));
                assert_eq!(args.sort, Some(SortKey::Name));
                assert_eq!(args.direction, Some(SortDirection::Desc));
                assert_eq!(args.page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
