use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single selectable row.
///
/// Only `id` and `name` have meaning to the list. Everything else in the
/// source record is kept in `extra` and written back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_item_id")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: Some(name.into()), extra: Map::new() }
    }

    /// An item with no display name
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None, extra: Map::new() }
    }

    /// Name used for display and matching; absent names read as empty
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Selection identity: two items are the same row when their ids match
    pub fn same_id(&self, other: &Item) -> bool {
        self.id == other.id
    }
}
