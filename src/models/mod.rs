//! Data models for the selectable search list.
//!
//! - [`Item`] - One row of data: an identifier, an optional display name and
//!   any extra fields the host wants to carry along.
//!
//! Custom deserializers for the `id` and `name` fields live in the
//! `parsers::deserializers` module.

pub mod item;

pub use item::Item;
