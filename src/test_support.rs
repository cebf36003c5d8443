//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::item::Item;

/// A collapsed, enabled, unfocused item.
pub fn item(uuid: &str) -> Item {
    Item::new(uuid)
}

/// An expanded item.
pub fn expanded_item(uuid: &str) -> Item {
    Item {
        expanded: true,
        ..Item::new(uuid)
    }
}

/// An item holding roving focus.
pub fn focused_item(uuid: &str) -> Item {
    Item {
        focus: true,
        ..Item::new(uuid)
    }
}
