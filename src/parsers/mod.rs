//! Parsers for item data files
//!
//! # Error Handling Strategy
//!
//! Two layouts are accepted:
//!
//! - **JSON array**: the whole document is one `[...]` of item objects. Any malformed item
//!   fails the load, since serde cannot skip a bad element inside an array.
//!
//! - **JSON Lines**: one item object per line. Malformed lines are logged with `tracing::warn!`
//!   and skipped. If >50% of lines fail, or >100 consecutive lines fail, the parser returns an
//!   error instead of accepting a badly corrupted file.
//!
//! Items whose `id` repeats an earlier one are dropped with a warning, so ids stay unique
//! within a loaded data set.

pub mod deserializers;
pub mod items;

pub use items::{parse_items, parse_items_file};
