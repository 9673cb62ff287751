//! Search primitives for the list: the substring filter and the debounce timer.

pub mod debounce;
pub mod filter;

pub use debounce::Debouncer;
pub use filter::{filter_items, matches_term};
