//! priority-lb: priority and weight aware load balancing
//!
//! Features:
//! - Resources grouped into priority tiers with per-tier weights
//! - Four selection policies combining priority and weight
//! - Pluggable random generator, OS-seeded by default
//! - Round-robin buffers with optional mutex synchronization
//! - YAML configuration of resource sets
//!
//! ```
//! use priority_lb::{Balancer, Resource};
//!
//! let mut lb = Balancer::new(vec![
//!     Resource::new(10, 60, "10.0.0.1:8080"),
//!     Resource::new(10, 40, "10.0.0.2:8080"),
//!     Resource::new(20, 0, "10.0.1.1:8080"),
//! ])?;
//!
//! let (target, priority) = lb.priority_weighted(11)?;
//! assert_eq!(*target, "10.0.1.1:8080");
//! assert_eq!(priority, 20);
//! # Ok::<(), priority_lb::BalanceError>(())
//! ```

pub mod balance;
pub mod config;
pub mod rr;

pub use balance::{BalanceError, Balancer, Policy, Resource};
pub use config::BalancerConfig;
pub use rr::{Cyclic, List, Locked, RoundRobin};
