use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{Config, DEFAULT_DEBOUNCE_MS, DataSource};
use crate::list::SearchList;
use crate::logging::{init_file_logging, init_stderr_logging};
use crate::tui::{ThemeChoice, run_interactive};
use crate::utils::sanitize_row_text;

#[derive(Parser)]
#[command(name = "search-select")]
#[command(version)]
#[command(about = "Searchable multi-select list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Item file (JSON array or JSON Lines); the built-in sample is used when omitted
    #[arg(long, global = true, env = "SEARCH_SELECT_DATA")]
    pub data: Option<PathBuf>,

    /// Quiet period after the last keystroke before the search is applied
    #[arg(long, global = true, env = "SEARCH_SELECT_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Screen appearance
    #[arg(long, value_enum, env = "SEARCH_SELECT_THEME", default_value_t = ThemeChoice::Auto)]
    pub theme: ThemeChoice,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "SEARCH_SELECT_LOG")]
    pub log_file: Option<PathBuf>,

    /// Print the final selection as JSON on exit
    #[arg(long)]
    pub print_selection: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rows the list shows for a search term, then exit
    Filter {
        /// Search term (case-insensitive substring)
        term: String,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            data: DataSource::from_path(self.data.clone()),
            debounce: Duration::from_millis(self.debounce_ms),
            theme: self.theme,
            log_file: self.log_file.clone(),
            print_selection: self.print_selection,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match &cli.command {
        Some(Commands::Filter { term }) => {
            init_stderr_logging()?;
            print_filtered(&config, term, &mut io::stdout().lock())?;
        }
        None => {
            if let Some(path) = &config.log_file {
                init_file_logging(path)?;
            }
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// Rows displayed once the debounce for `term` has elapsed, as `name<TAB>label`
fn print_filtered(config: &Config, term: &str, out: &mut impl Write) -> Result<()> {
    let items = config.data.load()?;

    let now = Instant::now();
    let mut list = SearchList::mount_at(items, config.debounce, now);
    list.set_search_term(term, now);
    list.tick(now + list.debounce());

    for item in list.displayed() {
        writeln!(out, "{}\t{}", sanitize_row_text(item.display_name()), list.label_for(item))
            .context("Failed to write output")?;
    }

    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    let items = config.data.load()?;
    info!(source = %config.data.label(), count = items.len(), "starting search list");

    let list = SearchList::with_debounce(items, config.debounce);
    let selected = run_interactive(list, config.theme.resolve(), config.data.label())?;

    if config.print_selection {
        let json =
            serde_json::to_string_pretty(&selected).context("Failed to serialize selection")?;
        println!("{}", json);
    }

    Ok(())
}
