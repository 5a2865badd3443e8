//! Unsynchronized round-robin buffer

use std::cell::Cell;

use super::{List, RoundRobin};

/// Round-robin buffer cycling through `items` in order.
///
/// The cursor lives in a [`Cell`], so a `Cyclic` cannot be shared between
/// threads. Wrap it in [`Locked`](super::Locked) for concurrent use.
#[derive(Debug)]
pub struct Cyclic<L> {
    items: L,
    index: Cell<usize>,
}

impl<L: List> Cyclic<L> {
    pub fn new(items: L) -> Self {
        Self {
            items,
            index: Cell::new(0),
        }
    }

    pub fn items(&self) -> &L {
        &self.items
    }
}

impl<L: List> RoundRobin for Cyclic<L> {
    type Item = L::Item;

    fn next(&self) -> Option<L::Item> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        // Modulo keeps the cursor valid if the list shrank
        let idx = self.index.get() % len;
        self.index.set((idx + 1) % len);
        Some(self.items.at(idx))
    }

    fn skip(&self, n: usize) {
        let len = self.items.len();
        if len != 0 {
            self.index.set((self.index.get() % len + n % len) % len);
        }
    }
}
