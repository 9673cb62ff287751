//! Search Select - a searchable multi-select list for the terminal
//!
//! The crate is split into the list widget state, which has no terminal dependency, and a
//! ratatui host screen that mounts it full-screen:
//!
//! - [`list::SearchList`] holds the items, the typed search term, a debounced effective
//!   filter and the selection set
//! - [`search`] has the case-insensitive substring filter and the deadline-based debouncer
//! - [`tui`] renders the list and maps keyboard and mouse input onto it
//! - [`parsers`] loads items from JSON arrays or JSON Lines
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use search_select::{Item, SearchList};
//!
//! let start = Instant::now();
//! let items = vec![Item::new("1", "Apple"), Item::new("2", "Banana")];
//! let mut list = SearchList::mount_at(items, Duration::from_millis(1000), start);
//!
//! list.set_search_term("ap", start);
//! list.tick(start + Duration::from_millis(1000));
//! assert_eq!(list.displayed().len(), 1);
//!
//! list.toggle_at(0);
//! assert_eq!(list.label_for(&Item::new("1", "Apple")), "Selected");
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod list;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod sample;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use list::{SearchList, SelectionSet};
pub use models::Item;
pub use parsers::parse_items_file;
pub use search::filter_items;
