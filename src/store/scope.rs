//! Item scopes: the stable identity a UI subtree carries.
//!
//! A scope is created once per rendered item - either around a
//! caller-supplied key or a minted one - and handed down to the fragments
//! that make up that item's heading and panel. Fragments resolve their
//! entry from the store through the scope instead of searching ambient
//! context.

use crate::core::item::{Item, ItemId};
use crate::store::AccordionStore;
use crate::store::handle::ItemHandle;

/// Stable identifier tying a UI subtree to one store entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemScope {
    uuid: ItemId,
}

impl ItemScope {
    /// Scope for a caller-supplied key.
    pub fn with_uuid(uuid: impl Into<ItemId>) -> Self {
        Self { uuid: uuid.into() }
    }

    /// Scope with a minted key, for subtrees that don't carry their own.
    pub fn generated() -> Self {
        Self {
            uuid: ItemId::fresh(),
        }
    }

    pub fn uuid(&self) -> &ItemId {
        &self.uuid
    }

    /// The store entry this subtree renders from, if it still exists.
    pub fn resolve<'a>(&self, store: &'a AccordionStore) -> Option<&'a Item> {
        store.item(&self.uuid)
    }

    /// Bound mutators for this subtree's controls.
    pub fn handle<'a>(&self, store: &'a mut AccordionStore) -> ItemHandle<'a> {
        store.handle(self.uuid.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AccordionConfig;
    use crate::test_support::item;

    #[test]
    fn test_resolve_finds_the_matching_entry() {
        let store = AccordionStore::new(AccordionConfig {
            items: vec![item("foo"), item("bar")],
            ..AccordionConfig::default()
        });

        let scope = ItemScope::with_uuid("bar");
        assert_eq!(scope.resolve(&store).map(|i| &i.uuid), Some(&"bar".into()));

        let stale = ItemScope::with_uuid("gone");
        assert!(stale.resolve(&store).is_none());
    }

    #[test]
    fn test_generated_scopes_do_not_collide() {
        assert_ne!(ItemScope::generated().uuid(), ItemScope::generated().uuid());
    }

    #[test]
    fn test_handle_mutates_through_the_scope() {
        let mut store = AccordionStore::new(AccordionConfig {
            items: vec![item("foo")],
            ..AccordionConfig::default()
        });

        let scope = ItemScope::with_uuid("foo");
        scope.handle(&mut store).toggle_expanded();

        assert!(scope.resolve(&store).unwrap().expanded);
    }
}
