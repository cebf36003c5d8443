//! # Actions
//!
//! Everything that can happen to an accordion becomes an `Action`.
//! A heading gets clicked? That's `Action::SetExpanded`. An item mounts?
//! That's `Action::AddItem`.
//!
//! The `update()` function applies one action to the current state in
//! place. It is the only mutation entry point, and because it works on
//! `&mut AccordionState` every call observes the result of the previous
//! one - back-to-back calls compose sequentially instead of racing against
//! a captured snapshot.
//!
//! ```text
//! &mut State + Action  →  update()  →  Outcome
//! ```
//!
//! Anomalous inputs (unknown uuid, a collapse that would leave nothing
//! expanded when the store must keep one) resolve to `Outcome::Unchanged`,
//! never to an error. Nothing in here panics.

use log::warn;

use crate::core::focus::{FocusIntent, move_focus};
use crate::core::item::{Item, ItemId};
use crate::core::state::AccordionState;

/// A single store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append an item to the tail of the sequence.
    AddItem(Item),
    /// Excise the matching item, if any.
    RemoveItem(ItemId),
    /// Set the matching item's `expanded` flag.
    SetExpanded { uuid: ItemId, expanded: bool },
    /// Clear `focus` on the matching item only.
    RemoveFocus(ItemId),
    FocusHead,
    FocusTail,
    FocusPrevious(ItemId),
    FocusNext(ItemId),
}

/// What `update()` did with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The state transitioned.
    Changed,
    /// Nothing matched, or the transition was refused; state untouched.
    Unchanged,
    /// A `SetExpanded` committed; carries the change-callback payload.
    ExpansionChanged(ExpansionChange),
}

/// Post-commit expansion summary handed to the registered change callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionChange {
    /// Exclusive mode: the uuid whose flag was just set.
    Toggled(ItemId),
    /// Multiple mode: every currently-expanded uuid, in item order.
    Expanded(Vec<ItemId>),
}

/// Apply `action` to `state`. Total over all inputs; refusals and misses
/// return [`Outcome::Unchanged`] with the state exactly as it was.
pub fn update(state: &mut AccordionState, action: Action) -> Outcome {
    match action {
        Action::AddItem(item) => {
            if state.items.iter().any(|existing| existing.uuid == item.uuid) {
                // Duplicates are appended anyway; rendering by uuid is on
                // the host, so this is diagnostic, not a rejection.
                warn!(
                    "duplicate accordion item uuid \"{}\"; uuids must be unique within one accordion",
                    item.uuid
                );
            }
            if !state.allow_multiple_expanded && item.expanded {
                // The newcomer wins; everything already mounted collapses.
                for existing in &mut state.items {
                    existing.expanded = false;
                }
            }
            state.items.push(item);
            Outcome::Changed
        }
        Action::RemoveItem(uuid) => {
            let Some(index) = state.index_of(&uuid) else {
                return Outcome::Unchanged;
            };
            if !state.allow_zero_expanded
                && state.items[index].expanded
                && state.expanded_count() == 1
            {
                // Removing the sole expanded item would leave everything
                // collapsed; the removal loses to the keep-one-expanded rule.
                return Outcome::Unchanged;
            }
            state.items.remove(index);
            Outcome::Changed
        }
        Action::SetExpanded { uuid, expanded } => {
            let Some(index) = state.index_of(&uuid) else {
                return Outcome::Unchanged;
            };
            if !expanded
                && !state.allow_zero_expanded
                && state.items[index].expanded
                && state.expanded_count() == 1
            {
                return Outcome::Unchanged;
            }
            if expanded && !state.allow_multiple_expanded {
                for other in &mut state.items {
                    other.expanded = false;
                }
            }
            state.items[index].expanded = expanded;

            let change = if state.allow_multiple_expanded {
                ExpansionChange::Expanded(state.expanded_uuids())
            } else {
                ExpansionChange::Toggled(uuid)
            };
            Outcome::ExpansionChanged(change)
        }
        Action::RemoveFocus(uuid) => {
            match state.items.iter_mut().find(|item| item.uuid == uuid) {
                Some(item) => {
                    item.focus = false;
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            }
        }
        Action::FocusHead => focus_outcome(move_focus(&mut state.items, FocusIntent::Head)),
        Action::FocusTail => focus_outcome(move_focus(&mut state.items, FocusIntent::Tail)),
        Action::FocusPrevious(uuid) => {
            focus_outcome(move_focus(&mut state.items, FocusIntent::Previous(uuid)))
        }
        Action::FocusNext(uuid) => {
            focus_outcome(move_focus(&mut state.items, FocusIntent::Next(uuid)))
        }
    }
}

fn focus_outcome(moved: bool) -> Outcome {
    if moved { Outcome::Changed } else { Outcome::Unchanged }
}
