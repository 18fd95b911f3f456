//! One-shot table listing.

use clap::Args;

use crate::output::{self, OutputFormat};
use docdesk_core::config::AppConfig;
use docdesk_core::result::AppResult;
use docdesk_core::types::{SortDirection, SortKey};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by (`name` or `date`); newest first when omitted
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort direction (`asc` or `desc`)
    #[arg(short, long, requires = "sort")]
    pub direction: Option<SortDirection>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to `table.default_page_size`)
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Execute the list command
pub async fn execute(args: &ListArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let mut table = super::open_table(config).await?;

    if let Some(size) = args.page_size {
        table.set_page_size(size)?;
    }
    if let Some(term) = &args.search {
        table.set_search_term(term.as_str());
    }
    if let Some(key) = args.sort {
        super::apply_sort(&mut table, key, args.direction);
    }
    table.set_page(args.page.saturating_sub(1));

    output::print_page(&table, format);
    Ok(())
}
