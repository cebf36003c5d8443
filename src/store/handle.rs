//! Mutators bound to a single item.
//!
//! Whatever renders an item's heading gets one of these instead of the
//! whole store: the item to read from plus exactly the operations its
//! controls need. This is also where `disabled` is enforced - the store's
//! own `set_expanded` applies unconditionally, but the interactive toggle
//! path refuses to act on a disabled item.

use crate::core::item::{Item, ItemId};
use crate::store::AccordionStore;

/// A borrowed view of one item and its store-bound controls.
pub struct ItemHandle<'a> {
    store: &'a mut AccordionStore,
    uuid: ItemId,
}

impl<'a> ItemHandle<'a> {
    pub(crate) fn new(store: &'a mut AccordionStore, uuid: ItemId) -> Self {
        Self { store, uuid }
    }

    pub fn uuid(&self) -> &ItemId {
        &self.uuid
    }

    /// The bound item, or `None` if it has been removed since the handle's
    /// uuid was resolved.
    pub fn item(&self) -> Option<&Item> {
        self.store.item(&self.uuid)
    }

    /// Flip the bound item's expansion, unless it is disabled. This is the
    /// click/keypress path; the expansion rules still apply underneath, so
    /// collapsing the sole expanded item may end up refused.
    pub fn toggle_expanded(&mut self) {
        let Some(item) = self.item() else {
            return;
        };
        if item.disabled {
            return;
        }
        let expanded = !item.expanded;
        self.store.set_expanded(self.uuid.clone(), expanded);
    }

    /// Set expansion directly, ignoring `disabled`.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.store.set_expanded(self.uuid.clone(), expanded);
    }

    /// Clear focus on the bound item (the heading lost focus).
    pub fn remove_focus(&mut self) {
        self.store.remove_focus(self.uuid.clone());
    }

    pub fn focus_head(&mut self) {
        self.store.set_focus_to_head();
    }

    pub fn focus_tail(&mut self) {
        self.store.set_focus_to_tail();
    }

    pub fn focus_previous(&mut self) {
        self.store.set_focus_to_previous(self.uuid.clone());
    }

    pub fn focus_next(&mut self) {
        self.store.set_focus_to_next(self.uuid.clone());
    }
}
