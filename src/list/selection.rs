use std::fmt;

use crate::models::Item;

/// Callback invoked with the full selection after every change
pub type SelectionListener = Box<dyn FnMut(&[Item])>;

/// Items the user has toggled on, in the order they were selected.
///
/// Membership is decided by `id` alone: a record rebuilt with the same id counts as the
/// same row for both toggling and the selected label.
#[derive(Default)]
pub struct SelectionSet {
    items: Vec<Item>,
    listener: Option<SelectionListener>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the item if its id is present, otherwise append it.
    /// Returns `true` when the item ends up selected.
    pub fn toggle(&mut self, item: &Item) -> bool {
        let selected = match self.items.iter().position(|selected| selected.same_id(item)) {
            Some(pos) => {
                self.items.remove(pos);
                false
            }
            None => {
                self.items.push(item.clone());
                true
            }
        };

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.items);
        }

        selected
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.contains_id(&item.id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|selected| selected.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Install the change listener, replacing any previous one
    pub fn subscribe(&mut self, listener: SelectionListener) {
        self.listener = Some(listener);
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }
}

impl fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("items", &self.items)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
