//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use search_select::Item;
use tempfile::TempDir;

/// Builder for item data files in a temporary directory
pub struct ItemFileBuilder {
    temp_dir: TempDir,
    entries: Vec<ItemBuilder>,
}

impl ItemFileBuilder {
    /// Create a new builder with no items
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: Vec::new() }
    }

    /// Add an item
    pub fn with_item(mut self, item: ItemBuilder) -> Self {
        self.entries.push(item);
        self
    }

    /// Add named items with ids "1".."N"
    pub fn with_names(mut self, names: &[&str]) -> Self {
        let offset = self.entries.len();
        for (idx, name) in names.iter().enumerate() {
            self.entries.push(ItemBuilder::new(&(offset + idx + 1).to_string()).name(name));
        }
        self
    }

    /// Write the items as a JSON array to `items.json`
    pub fn write_array(self) -> ItemFile {
        let body = self.entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",");
        self.write_raw("items.json", &format!("[{}]", body))
    }

    /// Write the items as JSON Lines to `items.jsonl`
    pub fn write_lines(self) -> ItemFile {
        let body = self.entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.write_raw("items.jsonl", &body)
    }

    /// Write arbitrary content, ignoring any added items
    pub fn write_raw(self, filename: &str, content: &str) -> ItemFile {
        let path = self.temp_dir.path().join(filename);
        fs::write(&path, content).expect("Failed to write item file");
        ItemFile { _temp_dir: self.temp_dir, path }
    }
}

impl Default for ItemFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A written item file; the directory lives as long as this value
pub struct ItemFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl ItemFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builder for a single item record
pub struct ItemBuilder {
    id: String,
    name: Option<String>,
    extra: Vec<(String, String)>,
}

impl ItemBuilder {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), name: None, extra: Vec::new() }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Add an extra string field carried alongside id and name
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.extra.push((key.to_string(), value.to_string()));
        self
    }

    /// Convert to a JSON object string
    pub fn to_json(&self) -> String {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), self.id.clone().into());
        if let Some(name) = &self.name {
            object.insert("name".to_string(), name.clone().into());
        }
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone().into());
        }
        serde_json::Value::Object(object).to_string()
    }
}

/// Items with ids "1".."N" for the given names
pub fn named_items(names: &[&str]) -> Vec<Item> {
    names.iter().enumerate().map(|(idx, name)| Item::new((idx + 1).to_string(), *name)).collect()
}

/// Ids of the rows currently displayed
pub fn shown_ids(list: &search_select::SearchList) -> Vec<String> {
    list.displayed().iter().map(|item| item.id.clone()).collect()
}
