//! Round-robin selection over indexable lists

mod cyclic;
mod list;
mod locked;

pub use cyclic::Cyclic;
pub use list::List;
pub use locked::Locked;

/// A cyclic buffer of items
pub trait RoundRobin {
    type Item;

    /// Retrieve the next item, or `None` if there are no items
    fn next(&self) -> Option<Self::Item>;

    /// Skip `n` items
    fn skip(&self, n: usize);

    /// Returns true if the implementation already serializes access
    fn is_synchronized(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoundRobinError {
    #[error("Round-robin is already synchronized")]
    AlreadySynchronized,
}
