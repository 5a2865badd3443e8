//! Named selection policies

use std::fmt;
use std::str::FromStr;

use super::BalanceError;

/// One of the four selection operations of a [`Balancer`](super::Balancer).
///
/// The priority policies carry the floor passed to the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    PriorityWeighted(u64),
    PriorityRandom(u64),
    RandomWeighted,
    Random,
}

impl Policy {
    /// Policy name (for logging and configuration)
    pub fn name(&self) -> &'static str {
        match self {
            Policy::PriorityWeighted(_) => "priority_weighted",
            Policy::PriorityRandom(_) => "priority_random",
            Policy::RandomWeighted => "random_weighted",
            Policy::Random => "random",
        }
    }

    /// Returns the floor for the priority policies
    pub fn floor(&self) -> Option<u64> {
        match self {
            Policy::PriorityWeighted(floor) | Policy::PriorityRandom(floor) => Some(*floor),
            Policy::RandomWeighted | Policy::Random => None,
        }
    }

    /// Returns the same policy with `floor` applied. Non-priority policies are
    /// returned unchanged.
    pub fn with_floor(self, floor: u64) -> Self {
        match self {
            Policy::PriorityWeighted(_) => Policy::PriorityWeighted(floor),
            Policy::PriorityRandom(_) => Policy::PriorityRandom(floor),
            other => other,
        }
    }

    /// Returns true if the policy respects resource weight
    pub fn is_weighted(&self) -> bool {
        matches!(self, Policy::PriorityWeighted(_) | Policy::RandomWeighted)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::PriorityWeighted(0)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.floor() {
            Some(floor) => write!(f, "{}(>= {})", self.name(), floor),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Policy {
    type Err = BalanceError;

    /// Parse a policy name. Priority policies start with a floor of 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority_weighted" => Ok(Policy::PriorityWeighted(0)),
            "priority_random" => Ok(Policy::PriorityRandom(0)),
            "random_weighted" => Ok(Policy::RandomWeighted),
            "random" => Ok(Policy::Random),
            other => Err(BalanceError::UnknownPolicy(other.to_string())),
        }
    }
}
