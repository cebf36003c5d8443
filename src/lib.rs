//! # Concertina
//!
//! An accordion (collapsible-section) state container for terminal UIs.
//!
//! The crate owns the part of an accordion with actual rules in it: which
//! items may be expanded at once, whether one must always stay expanded,
//! and where roving keyboard focus lands. Rendering, styling, and layout
//! stay with the host.
//!
//! - [`core`]: the pure data model, reducer, and focus navigator
//! - [`store`]: the stateful container with subscriptions and the
//!   expansion-change callback
//! - [`input`]: crossterm key events translated into store calls

pub mod core;
pub mod input;
pub mod store;

#[cfg(test)]
mod test_support;

pub use crate::core::action::{Action, ExpansionChange, Outcome, update};
pub use crate::core::focus::{FocusIntent, move_focus};
pub use crate::core::item::{Item, ItemId};
pub use crate::core::state::AccordionState;
pub use crate::input::{HeadingIntent, dispatch_heading, heading_intent};
pub use crate::store::handle::ItemHandle;
pub use crate::store::scope::ItemScope;
pub use crate::store::{AccordionConfig, AccordionStore, Snapshot, SubscriberId};
