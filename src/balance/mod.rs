//! Priority and weight aware resource selection
//!
//! There are four ways to select a resource, depending on whether the
//! resource priority and weight should be respected:
//!
//! |                       | Weighted resources       | Any weight               |
//! |-----------------------|--------------------------|--------------------------|
//! | Prioritized resources | `priority_weighted(n)`   | `priority_random(n)`     |
//! | Any priority          | `random_weighted()`      | `random()`               |

mod balancer;
mod group;
mod policy;
mod resource;

pub use balancer::Balancer;
pub use group::Group;
pub use policy::Policy;
pub use resource::Resource;

#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("Balancer requires at least one resource")]
    EmptyResources,

    #[error("Failed to seed random generator: {0}")]
    Seeding(String),

    #[error("Total weight of priority {0} overflows u64")]
    WeightOverflow(u64),

    #[error("No resources with priority >= {0}")]
    NoMatchingPriority(u64),

    #[error("Unable to find resource for weighted draw")]
    SelectionNotFound,

    #[error("Unknown selection policy: '{0}'. Supported: priority_weighted, priority_random, random_weighted, random")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_error_display() {
        let err = BalanceError::NoMatchingPriority(42);
        assert!(err.to_string().contains(">= 42"));

        let err = BalanceError::UnknownPolicy("least_conn".to_string());
        assert!(err.to_string().contains("least_conn"));
        assert!(err.to_string().contains("priority_weighted"));

        let err = BalanceError::Seeding("entropy pool unavailable".to_string());
        assert!(err.to_string().contains("entropy pool unavailable"));
    }
}
