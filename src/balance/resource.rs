//! A single balance-able resource

use serde::{Deserialize, Serialize};

/// A target together with its priority tier and relative weight.
///
/// Lower priorities are preferred by the priority operations. Weight is only
/// meaningful relative to the other resources sharing the same priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Resource<T> {
    #[serde(default)]
    pub priority: u64,
    #[serde(default)]
    pub weight: u64,
    pub target: T,
}

impl<T> Resource<T> {
    pub fn new(priority: u64, weight: u64, target: T) -> Self {
        Self {
            priority,
            weight,
            target,
        }
    }
}
