//! Runtime configuration assembled from command-line arguments and their
//! `SEARCH_SELECT_*` environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::models::Item;
use crate::parsers::parse_items_file;
use crate::sample::sample_items;
use crate::tui::ThemeChoice;
use crate::utils::format_path_with_tilde;

/// Default quiet period before a search is applied
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Where the list's items come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sample,
    File(PathBuf),
}

impl DataSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(DataSource::Sample, DataSource::File)
    }

    pub fn load(&self) -> Result<Vec<Item>> {
        match self {
            DataSource::Sample => Ok(sample_items()),
            DataSource::File(path) => parse_items_file(path),
        }
    }

    /// Short description for the status bar
    pub fn label(&self) -> String {
        match self {
            DataSource::Sample => "sample data".to_string(),
            DataSource::File(path) => format_path_with_tilde(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: DataSource,
    pub debounce: Duration,
    pub theme: ThemeChoice,
    pub log_file: Option<PathBuf>,
    pub print_selection: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataSource::Sample,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            theme: ThemeChoice::Auto,
            log_file: None,
            print_selection: false,
        }
    }
}
