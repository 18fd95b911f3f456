//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use docdesk_core::config::AppConfig;
use docdesk_core::config::source::SourceKind;
use docdesk_core::result::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration and summarize it
    Validate,
}

/// Execute config commands
///
/// The configuration has already been loaded and validated by the time a
/// command runs; a broken file fails before dispatch.
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            config.validate()?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Source", &describe_source(config));
            output::print_kv(
                "Page size",
                &format!(
                    "{} (options {:?})",
                    config.table.default_page_size, config.table.page_size_options
                ),
            );
            output::print_kv("Author", &config.table.author);
            output::print_kv(
                "Logging",
                &format!("{} / {}", config.logging.level, config.logging.format),
            );
        }
    }
    Ok(())
}

/// One-line summary of where records come from.
fn describe_source(config: &AppConfig) -> String {
    match config.source.kind {
        SourceKind::Seed => "seed (built-in records)".to_string(),
        SourceKind::Http => format!(
            "http {} (timeout {}s)",
            config.source.url, config.source.timeout_seconds
        ),
        SourceKind::File => format!("file {}", config.source.path),
    }
}
