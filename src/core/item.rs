//! # Item Data Model
//!
//! One collapsible entry in an accordion, identified by a key that is
//! unique within a single store. Keys are caller-supplied (a string or a
//! number, whichever the host application already has on hand) or minted
//! with [`ItemId::fresh`] for subtrees that don't carry their own id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one accordion entry.
///
/// Serializes untagged, so `"intro"` and `7` both read back naturally from
/// host session files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(u64),
}

impl ItemId {
    /// Mint an identifier for an item whose host didn't supply one.
    pub fn fresh() -> Self {
        ItemId::Text(uuid::Uuid::new_v4().to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&ItemId> for ItemId {
    fn from(value: &ItemId) -> Self {
        value.clone()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Text(text) => f.write_str(text),
            ItemId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One collapsible entry.
///
/// `disabled` is advisory: interaction layers consult it before toggling
/// (see `ItemHandle::toggle_expanded`), but the store itself applies any
/// `set_expanded` call regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: ItemId,
    /// Whether this item's content is visible.
    pub expanded: bool,
    /// Whether interaction layers should allow toggling.
    pub disabled: bool,
    /// Whether this item currently holds roving keyboard focus.
    pub focus: bool,
}

impl Item {
    /// A collapsed, enabled, unfocused item. Override flags with
    /// struct-update syntax: `Item { expanded: true, ..Item::new("foo") }`.
    pub fn new(uuid: impl Into<ItemId>) -> Self {
        Self {
            uuid: uuid.into(),
            expanded: false,
            disabled: false,
            focus: false,
        }
    }
}
