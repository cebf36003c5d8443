//! # Focus Navigator
//!
//! Pure roving-focus movement over the ordered item sequence. Exactly one
//! item holds keyboard focus at a time; navigation moves that single
//! pointer and never wraps past either end.

use crate::core::item::{Item, ItemId};

/// Where a navigation call wants focus to land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusIntent {
    /// First item.
    Head,
    /// Last item.
    Tail,
    /// The item before the referenced one.
    Previous(ItemId),
    /// The item after the referenced one.
    Next(ItemId),
}

/// Move focus according to `intent`. Returns `false` when no target exists
/// (empty sequence, unknown reference, or already at the relevant end), in
/// which case the items are left untouched.
///
/// When a target is determined, focus is set on it and cleared on every
/// other item unconditionally - so a sequence that somehow ended up with
/// multiple focused items comes out with exactly one.
pub fn move_focus(items: &mut [Item], intent: FocusIntent) -> bool {
    let Some(target) = target_index(items, &intent) else {
        return false;
    };
    for (index, item) in items.iter_mut().enumerate() {
        item.focus = index == target;
    }
    true
}

fn target_index(items: &[Item], intent: &FocusIntent) -> Option<usize> {
    match intent {
        FocusIntent::Head => {
            if items.is_empty() {
                None
            } else {
                Some(0)
            }
        }
        FocusIntent::Tail => items.len().checked_sub(1),
        FocusIntent::Previous(reference) => {
            let index = items.iter().position(|item| item.uuid == *reference)?;
            // Focus never moves past the head.
            index.checked_sub(1)
        }
        FocusIntent::Next(reference) => {
            let index = items.iter().position(|item| item.uuid == *reference)?;
            if index + 1 < items.len() {
                Some(index + 1)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{focused_item, item};

    fn focused_uuids(items: &[Item]) -> Vec<&ItemId> {
        items
            .iter()
            .filter(|item| item.focus)
            .map(|item| &item.uuid)
            .collect()
    }

    #[test]
    fn test_head_focuses_first_item() {
        let mut items = vec![item("foo"), focused_item("bar")];
        assert!(move_focus(&mut items, FocusIntent::Head));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("foo")]);
    }

    #[test]
    fn test_head_on_empty_sequence_is_noop() {
        let mut items: Vec<Item> = Vec::new();
        assert!(!move_focus(&mut items, FocusIntent::Head));
    }

    #[test]
    fn test_tail_focuses_last_item() {
        let mut items = vec![focused_item("foo"), item("bar")];
        assert!(move_focus(&mut items, FocusIntent::Tail));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("bar")]);
    }

    #[test]
    fn test_previous_moves_one_back() {
        let mut items = vec![item("foo"), focused_item("bar"), item("baz")];
        assert!(move_focus(&mut items, FocusIntent::Previous("bar".into())));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("foo")]);
    }

    #[test]
    fn test_previous_never_moves_past_the_head() {
        let mut items = vec![focused_item("foo"), item("bar")];
        assert!(!move_focus(&mut items, FocusIntent::Previous("foo".into())));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("foo")]);
    }

    #[test]
    fn test_previous_with_unknown_reference_is_noop() {
        let mut items = vec![item("foo"), focused_item("bar")];
        assert!(!move_focus(
            &mut items,
            FocusIntent::Previous("barfoo".into())
        ));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("bar")]);
    }

    #[test]
    fn test_next_moves_one_forward() {
        let mut items = vec![focused_item("foo"), item("bar"), item("baz")];
        assert!(move_focus(&mut items, FocusIntent::Next("foo".into())));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("bar")]);
    }

    #[test]
    fn test_next_never_moves_past_the_tail() {
        let mut items = vec![item("foo"), focused_item("bar")];
        assert!(!move_focus(&mut items, FocusIntent::Next("bar".into())));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("bar")]);
    }

    #[test]
    fn test_determined_target_clears_stray_focus() {
        // Two focused items is an invalid input; a successful move repairs it.
        let mut items = vec![focused_item("foo"), focused_item("bar"), item("baz")];
        assert!(move_focus(&mut items, FocusIntent::Tail));
        assert_eq!(focused_uuids(&items), vec![&ItemId::from("baz")]);
    }

    #[test]
    fn test_head_is_idempotent() {
        let mut items = vec![item("foo"), focused_item("bar")];
        assert!(move_focus(&mut items, FocusIntent::Head));
        let after_first = items.clone();
        assert!(move_focus(&mut items, FocusIntent::Head));
        assert_eq!(items, after_first);
    }
}
