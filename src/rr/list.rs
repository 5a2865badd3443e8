//! Indexable list capability

use std::sync::Arc;

/// Anything which can be indexed and has a determinable length.
///
/// Implementations must return an item for every `n < len()`.
pub trait List {
    type Item;

    /// Retrieve the element at index `n`
    fn at(&self, n: usize) -> Self::Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> List for Vec<T> {
    type Item = T;

    fn at(&self, n: usize) -> T {
        self[n].clone()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<'a, T> List for &'a [T] {
    type Item = &'a T;

    fn at(&self, n: usize) -> &'a T {
        let items: &'a [T] = *self;
        &items[n]
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Clone> List for Arc<[T]> {
    type Item = T;

    fn at(&self, n: usize) -> T {
        self[n].clone()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
