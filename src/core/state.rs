//! # Accordion State
//!
//! The whole public state of one accordion. This module contains data and
//! queries only - every mutation goes through `update()` in action.rs.
//!
//! ```text
//! AccordionState
//! ├── items: Vec<Item>              // insertion order, never reordered
//! ├── allow_multiple_expanded: bool // false = classic exclusive accordion
//! └── allow_zero_expanded: bool     // false = keep one item expanded
//! ```
//!
//! The two flags are fixed when the owning store is built; nothing in this
//! crate writes them afterwards.

use crate::core::item::{Item, ItemId};

/// Ordered items plus the two behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub items: Vec<Item>,
    pub allow_multiple_expanded: bool,
    pub allow_zero_expanded: bool,
}

impl AccordionState {
    /// Build from a configured item sequence. The sequence is taken
    /// verbatim - the expansion rules apply to mutations from here on, not
    /// to whatever the host configured as the starting point.
    pub fn new(
        allow_multiple_expanded: bool,
        allow_zero_expanded: bool,
        items: Vec<Item>,
    ) -> Self {
        Self {
            items,
            allow_multiple_expanded,
            allow_zero_expanded,
        }
    }

    pub fn item(&self, uuid: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.uuid == *uuid)
    }

    pub fn index_of(&self, uuid: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.uuid == *uuid)
    }

    pub fn expanded_count(&self) -> usize {
        self.items.iter().filter(|item| item.expanded).count()
    }

    /// Uuids of every expanded item, in item order.
    pub fn expanded_uuids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.expanded)
            .map(|item| item.uuid.clone())
            .collect()
    }

    /// The item holding roving focus, if any.
    pub fn focused(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expanded_item, item};

    #[test]
    fn test_queries_on_mixed_items() {
        let state = AccordionState::new(
            false,
            false,
            vec![item("foo"), expanded_item("bar"), expanded_item("baz")],
        );

        assert_eq!(state.expanded_count(), 2);
        assert_eq!(
            state.expanded_uuids(),
            vec![ItemId::from("bar"), ItemId::from("baz")]
        );
        assert_eq!(state.index_of(&"baz".into()), Some(2));
        assert!(state.item(&"qux".into()).is_none());
        assert!(state.focused().is_none());
    }

    #[test]
    fn test_initial_items_are_not_normalized() {
        // Two expanded items survive construction even in exclusive mode.
        let state = AccordionState::new(
            false,
            false,
            vec![expanded_item("foo"), expanded_item("bar")],
        );
        assert_eq!(state.expanded_count(), 2);
    }
}
