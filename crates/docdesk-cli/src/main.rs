//! DocDesk CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod output;

use commands::Cli;
use docdesk_core::config::AppConfig;
use docdesk_core::config::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&format!("Configuration '{}' invalid: {}", cli.config, e));
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
