//! The selectable search list: filter state, debounce and selection.
//!
//! [`SearchList`] is the whole widget state with no terminal dependency. The `tui` module
//! drives it from keyboard and mouse events and renders what it exposes.

pub mod selection;
pub mod state;

pub use selection::{SelectionListener, SelectionSet};
pub use state::{DEFAULT_DEBOUNCE, NOT_SELECTED_LABEL, PAGE_SIZE, SELECTED_LABEL, SearchList};
