//! # Keyboard Adapter
//!
//! Translates key events on a focused accordion heading into store calls.
//! This is the only module that knows about crossterm; hosts with their
//! own event vocabulary can skip it and call the store directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::core::item::ItemId;
use crate::store::AccordionStore;

/// What a heading interaction asks the store to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingIntent {
    /// Flip the item's expansion (Enter or Space).
    Toggle,
    /// Move focus to the first item (Home).
    FocusHead,
    /// Move focus to the last item (End).
    FocusTail,
    /// Move focus one item back (Up).
    FocusPrevious,
    /// Move focus one item forward (Down).
    FocusNext,
    /// The heading lost focus. Not produced by [`heading_intent`]; hosts
    /// dispatch it from their own focus tracking.
    Blur,
}

/// Translate a key event into a heading intent. Unrelated keys and key
/// releases translate to nothing.
pub fn heading_intent(key: &KeyEvent) -> Option<HeadingIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(HeadingIntent::Toggle),
        KeyCode::Home => Some(HeadingIntent::FocusHead),
        KeyCode::End => Some(HeadingIntent::FocusTail),
        KeyCode::Up => Some(HeadingIntent::FocusPrevious),
        KeyCode::Down => Some(HeadingIntent::FocusNext),
        _ => None,
    }
}

/// Route an intent raised on `uuid`'s heading to the store. `Toggle` goes
/// through the bound handle so disabled items stay inert.
pub fn dispatch_heading(store: &mut AccordionStore, uuid: &ItemId, intent: HeadingIntent) {
    match intent {
        HeadingIntent::Toggle => store.handle(uuid).toggle_expanded(),
        HeadingIntent::FocusHead => store.set_focus_to_head(),
        HeadingIntent::FocusTail => store.set_focus_to_tail(),
        HeadingIntent::FocusPrevious => store.set_focus_to_previous(uuid),
        HeadingIntent::FocusNext => store.set_focus_to_next(uuid),
        HeadingIntent::Blur => store.remove_focus(uuid),
    }
}
