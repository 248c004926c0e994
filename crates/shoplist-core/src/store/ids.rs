//! Identifier sequence
//!
//! Hands out decimal identifiers above every numeric identifier the store
//! has seen, for lists and items alike. Once `u64::MAX` is reached the
//! sequence wraps to 1 and skips whatever the caller reports as taken.

use crate::domain::ShoppingList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Sequence positioned above every numeric id found in `lists`
    pub fn after(lists: &[ShoppingList]) -> Self {
        let highest = lists
            .iter()
            .flat_map(|list| {
                std::iter::once(list.id.numeric())
                    .chain(list.items.iter().map(|item| item.id.numeric()))
            })
            .flatten()
            .max()
            .unwrap_or(0);
        Self {
            next: successor(highest),
        }
    }

    /// Next identifier for which `in_use` is false, and the advanced
    /// sequence
    pub fn take_unused(self, in_use: impl Fn(u64) -> bool) -> (u64, Self) {
        let mut candidate = self.next;
        while in_use(candidate) {
            candidate = successor(candidate);
        }
        (
            candidate,
            Self {
                next: successor(candidate),
            },
        )
    }
}

fn successor(id: u64) -> u64 {
    id.checked_add(1).unwrap_or(1)
}
