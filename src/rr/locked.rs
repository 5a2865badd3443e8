//! Mutex-synchronized round-robin

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Cyclic, List, RoundRobin, RoundRobinError};

/// Wraps a [`RoundRobin`] with a mutex so it can be shared between threads
#[derive(Debug)]
pub struct Locked<R> {
    inner: Mutex<R>,
}

impl<R: RoundRobin> Locked<R> {
    /// Wrap `inner`. Fails if `inner` is already synchronized.
    pub fn new(inner: R) -> Result<Self, RoundRobinError> {
        if inner.is_synchronized() {
            return Err(RoundRobinError::AlreadySynchronized);
        }
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // The cursor is always consistent, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, R> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: List> Locked<Cyclic<L>> {
    /// Synchronized round-robin buffer over `items`
    pub fn from_list(items: L) -> Self {
        Self {
            inner: Mutex::new(Cyclic::new(items)),
        }
    }
}

impl<R: RoundRobin> RoundRobin for Locked<R> {
    type Item = R::Item;

    fn next(&self) -> Option<R::Item> {
        self.lock().next()
    }

    fn skip(&self, n: usize) {
        self.lock().skip(n)
    }

    fn is_synchronized(&self) -> bool {
        true
    }
}
