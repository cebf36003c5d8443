//! # Accordion Store
//!
//! The stateful shell around the core reducer. Owns the item sequence,
//! serializes every mutation through `core::action::update`, and runs the
//! commit protocol:
//!
//! ```text
//! mutator call → update(&mut state, action) → notify subscribers
//!                                           → change callback (expansion commits only)
//! ```
//!
//! The store is single-owner and synchronous: mutators take `&mut self`,
//! complete before returning, and notification happens-before the mutator
//! returns. Subscribers receive a borrowed [`Snapshot`], so they can read
//! the committed state but cannot call back into the store mid-commit.
//!
//! Hosts that fan the store out to several UI fragments wrap it once with
//! [`AccordionStore::into_shared`] and pass the handle down explicitly,
//! together with each fragment's [`ItemScope`](scope::ItemScope).

pub mod handle;
pub mod scope;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::action::{Action, ExpansionChange, Outcome, update};
use crate::core::item::{Item, ItemId};
use crate::core::state::AccordionState;
use crate::store::handle::ItemHandle;

/// Construction-time settings. Both flags default to `false`: the classic
/// exclusive accordion that always keeps one item expanded.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AccordionConfig {
    /// Allow more than one item to be expanded at once.
    pub allow_multiple_expanded: bool,
    /// Allow every item to be collapsed at once.
    pub allow_zero_expanded: bool,
    /// Initial item sequence, taken verbatim.
    pub items: Vec<Item>,
}

/// The public state handed to subscribers after every commit.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub items: &'a [Item],
    pub allow_multiple_expanded: bool,
    pub allow_zero_expanded: bool,
}

/// Token returned by [`AccordionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SubscriberFn = Box<dyn FnMut(Snapshot<'_>)>;
type ChangeFn = Box<dyn FnMut(&ExpansionChange)>;

/// Owns the ordered item sequence and enforces the expansion and focus
/// rules on every mutation.
pub struct AccordionStore {
    state: AccordionState,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    on_change: Option<ChangeFn>,
    next_subscriber: u64,
}

impl AccordionStore {
    pub fn new(config: AccordionConfig) -> Self {
        Self {
            state: AccordionState::new(
                config.allow_multiple_expanded,
                config.allow_zero_expanded,
                config.items,
            ),
            subscribers: Vec::new(),
            on_change: None,
            next_subscriber: 0,
        }
    }

    /// Wrap the store in a shared single-threaded handle for fanning out
    /// to multiple UI fragments.
    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn item(&self, uuid: &ItemId) -> Option<&Item> {
        self.state.item(uuid)
    }

    pub fn allow_multiple_expanded(&self) -> bool {
        self.state.allow_multiple_expanded
    }

    pub fn allow_zero_expanded(&self) -> bool {
        self.state.allow_zero_expanded
    }

    /// Mutators bound to one item, for whatever renders that item's
    /// controls.
    pub fn handle(&mut self, uuid: impl Into<ItemId>) -> ItemHandle<'_> {
        ItemHandle::new(self, uuid.into())
    }

    /// Register an observer for post-commit snapshots. Every mutator call
    /// notifies, including ones that matched nothing or were refused.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Snapshot<'_>) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Register the expansion-change callback. Invoked exactly once per
    /// committed `set_expanded`, after subscribers have seen the new state.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&ExpansionChange) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Append an item at the tail. A duplicate uuid is reported through the
    /// log facade but the append still happens. In exclusive mode an
    /// expanded newcomer collapses everything already present.
    pub fn add_item(&mut self, item: Item) {
        self.apply(Action::AddItem(item));
    }

    /// Remove the matching item. No-op on an unknown uuid; refused when the
    /// item is the sole expanded one and the store must keep one expanded.
    pub fn remove_item(&mut self, uuid: impl Into<ItemId>) {
        self.apply(Action::RemoveItem(uuid.into()));
    }

    /// Set the matching item's `expanded` flag, subject to the expansion
    /// rules. `disabled` is not consulted here - interaction layers guard
    /// on it before calling (see [`ItemHandle::toggle_expanded`]).
    pub fn set_expanded(&mut self, uuid: impl Into<ItemId>, expanded: bool) {
        self.apply(Action::SetExpanded {
            uuid: uuid.into(),
            expanded,
        });
    }

    /// Clear `focus` on the matching item only.
    pub fn remove_focus(&mut self, uuid: impl Into<ItemId>) {
        self.apply(Action::RemoveFocus(uuid.into()));
    }

    pub fn set_focus_to_head(&mut self) {
        self.apply(Action::FocusHead);
    }

    pub fn set_focus_to_tail(&mut self) {
        self.apply(Action::FocusTail);
    }

    pub fn set_focus_to_previous(&mut self, uuid: impl Into<ItemId>) {
        self.apply(Action::FocusPrevious(uuid.into()));
    }

    pub fn set_focus_to_next(&mut self, uuid: impl Into<ItemId>) {
        self.apply(Action::FocusNext(uuid.into()));
    }

    fn apply(&mut self, action: Action) {
        let outcome = update(&mut self.state, action);
        self.notify();
        if let Outcome::ExpansionChanged(change) = outcome
            && let Some(on_change) = &mut self.on_change
        {
            on_change(&change);
        }
    }

    fn notify(&mut self) {
        let snapshot = Snapshot {
            items: &self.state.items,
            allow_multiple_expanded: self.state.allow_multiple_expanded,
            allow_zero_expanded: self.state.allow_zero_expanded,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(snapshot);
        }
    }
}
