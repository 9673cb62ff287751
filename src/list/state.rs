//! Searchable multi-select list state.
//!
//! The list keeps two search terms apart:
//!
//! - **`search_term`**: what the user has typed, updated on every keystroke
//! - **`effective_filter`**: the term the displayed rows were computed from, updated only when
//!   the debounce fires
//!
//! The displayed collection is never stored. It is derived on demand from the data and the
//! effective filter, so the only lag between typing and results is the debounce itself.
//!
//! # Lifecycle
//!
//! - Mount ([`SearchList::new`]) and data replacement ([`SearchList::set_data`]) show the full
//!   data immediately and schedule a filter pass for the current term.
//! - Keystrokes and [`SearchList::clear_search`] restart the quiet period.
//! - [`SearchList::tick`] applies the pending term once the quiet period has elapsed.
//! - [`SearchList::teardown`] (also run on drop) cancels any pending filter pass.

use std::time::{Duration, Instant};

use tracing::debug;

use super::selection::{SelectionListener, SelectionSet};
use crate::models::Item;
use crate::search::{Debouncer, filter_items};

/// Quiet period between the last keystroke and the filter being applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);
/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

pub const SELECTED_LABEL: &str = "Selected";
pub const NOT_SELECTED_LABEL: &str = "Not selected";

/// Limit search input to 256 characters
const MAX_SEARCH_CHARS: usize = 256;

#[derive(Debug)]
pub struct SearchList {
    data: Vec<Item>,
    search_term: String,
    /// `None` while the filter is bypassed after mount or a data replacement
    effective_filter: Option<String>,
    debouncer: Debouncer<String>,
    selection: SelectionSet,
    cursor: usize,
}

impl SearchList {
    /// Mount with the default debounce, using the current time
    pub fn new(data: Vec<Item>) -> Self {
        Self::mount_at(data, DEFAULT_DEBOUNCE, Instant::now())
    }

    pub fn with_debounce(data: Vec<Item>, debounce: Duration) -> Self {
        Self::mount_at(data, debounce, Instant::now())
    }

    pub fn mount_at(data: Vec<Item>, debounce: Duration, now: Instant) -> Self {
        let mut list = Self {
            data,
            search_term: String::new(),
            effective_filter: None,
            debouncer: Debouncer::new(debounce),
            selection: SelectionSet::new(),
            cursor: 0,
        };
        list.schedule_filter(now);
        list
    }

    /// Replace the data set.
    ///
    /// The displayed rows become exactly `data` right away; the current term is reapplied once
    /// the debounce fires. The selection is kept.
    pub fn set_data(&mut self, data: Vec<Item>, now: Instant) {
        debug!(count = data.len(), "list data replaced");
        self.data = data;
        self.effective_filter = None;
        self.cursor = 0;
        self.schedule_filter(now);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        if self.search_term.chars().count() < MAX_SEARCH_CHARS {
            self.search_term.push(c);
            self.schedule_filter(now);
        }
    }

    /// Remove the last character. Returns `false` when the term was already empty.
    pub fn pop_char(&mut self, now: Instant) -> bool {
        if self.search_term.pop().is_some() {
            self.schedule_filter(now);
            true
        } else {
            false
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>, now: Instant) {
        self.search_term = term.into().chars().take(MAX_SEARCH_CHARS).collect();
        self.schedule_filter(now);
    }

    /// Empty the search field. The rows stay filtered until the debounce fires.
    pub fn clear_search(&mut self, now: Instant) {
        self.search_term.clear();
        self.schedule_filter(now);
    }

    /// Apply the pending term if its quiet period has elapsed. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(term) = self.debouncer.poll(now) else {
            return false;
        };

        self.effective_filter = Some(term);
        self.cursor = 0;
        debug!(
            term = self.effective_filter.as_deref().unwrap_or_default(),
            shown = self.displayed_len(),
            "search filter applied"
        );
        true
    }

    /// Rows currently shown, in data order
    pub fn displayed(&self) -> Vec<&Item> {
        match &self.effective_filter {
            Some(term) => filter_items(&self.data, term),
            None => self.data.iter().collect(),
        }
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed().len()
    }

    /// Toggle an item in or out of the selection. Returns `true` when it ends up selected.
    pub fn toggle(&mut self, item: &Item) -> bool {
        let selected = self.selection.toggle(item);
        debug!(id = %item.id, selected, "toggled item");
        selected
    }

    /// Toggle the displayed row at `row`, if there is one
    pub fn toggle_at(&mut self, row: usize) -> Option<bool> {
        let item = self.displayed().get(row).map(|item| (*item).clone())?;
        self.cursor = row;
        Some(self.toggle(&item))
    }

    pub fn toggle_current(&mut self) -> Option<bool> {
        self.toggle_at(self.cursor)
    }

    pub fn is_selected(&self, item: &Item) -> bool {
        self.selection.contains(item)
    }

    /// Label rendered next to each row
    pub fn label_for(&self, item: &Item) -> &'static str {
        if self.is_selected(item) { SELECTED_LABEL } else { NOT_SELECTED_LABEL }
    }

    /// Move the highlighted row, clamped to the displayed rows
    pub fn move_cursor(&mut self, delta: isize) {
        let total = self.displayed_len();
        if total == 0 {
            self.cursor = 0;
            return;
        }

        let new_idx = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new_idx.min(total - 1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Term the displayed rows were filtered by, `None` while bypassed
    pub fn effective_filter(&self) -> Option<&str> {
        self.effective_filter.as_deref()
    }

    pub fn is_filter_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time until the pending filter pass, for bounding the event poll timeout
    pub fn time_until_filter(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_remaining(now)
    }

    pub fn debounce(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn data(&self) -> &[Item] {
        &self.data
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Get notified with the full selection after every toggle
    pub fn on_selection_change(&mut self, listener: SelectionListener) {
        self.selection.subscribe(listener);
    }

    /// Cancel any pending filter pass so nothing applies after the owner is done
    pub fn teardown(&mut self) {
        if self.debouncer.cancel() {
            debug!("cancelled pending search filter");
        }
    }

    fn schedule_filter(&mut self, now: Instant) {
        self.debouncer.schedule(self.search_term.clone(), now);
    }
}

impl Drop for SearchList {
    fn drop(&mut self) {
        self.teardown();
    }
}
