//! Priority/weight load balancer

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::group::{build_groups, locate, Group};
use super::{BalanceError, Policy, Resource};

/// Load balancer over a fixed set of resources grouped by priority.
///
/// Groups are built once at construction and never change. Every selection
/// advances the owned generator `R`, which is why the selection methods take
/// `&mut self`. To select from several threads either put the balancer behind
/// a `Mutex`, or give each thread its own instance with [`Balancer::fork`];
/// forks share the group tables and only own a generator.
///
/// The default generator is [`SmallRng`] seeded from the operating system.
/// Any [`Rng`] can be injected with [`Balancer::with_rng`]. A
/// cryptographically strong generator such as `StdRng` is roughly 20 to 60
/// times slower per draw.
#[derive(Debug)]
pub struct Balancer<T, R = SmallRng> {
    groups: Arc<[Group<T>]>,
    rng: R,
}

impl<T> Balancer<T, SmallRng> {
    /// Build a balancer from `resources`, grouped by priority.
    ///
    /// If all resources of a priority group have a weight of zero they are
    /// given uniform weight. In a group mixing zero and nonzero weights the
    /// zero-weight resources are never chosen by the weighted operations.
    pub fn new(resources: Vec<Resource<T>>) -> Result<Self, BalanceError> {
        let groups = build_groups(resources)?;
        let rng = seeded_rng()?;
        Ok(Self::from_groups(groups, rng))
    }
}

impl<T, R: Rng> Balancer<T, R> {
    /// Build a balancer that draws from `rng` instead of an OS-seeded generator
    pub fn with_rng(resources: Vec<Resource<T>>, rng: R) -> Result<Self, BalanceError> {
        let groups = build_groups(resources)?;
        Ok(Self::from_groups(groups, rng))
    }

    fn from_groups(groups: Vec<Group<T>>, rng: R) -> Self {
        let resources: usize = groups.iter().map(|g| g.resources().len()).sum();
        tracing::debug!(
            groups = groups.len(),
            resources,
            "Built load balancer"
        );
        Self {
            groups: groups.into(),
            rng,
        }
    }

    /// A new balancer sharing these groups with its own OS-seeded generator
    pub fn fork(&self) -> Result<Balancer<T, SmallRng>, BalanceError> {
        Ok(Balancer {
            groups: Arc::clone(&self.groups),
            rng: seeded_rng()?,
        })
    }

    /// Swap in a new generator, returning the previous one
    pub fn replace_rng(&mut self, rng: R) -> R {
        std::mem::replace(&mut self.rng, rng)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Priority groups in ascending priority order
    pub fn groups(&self) -> &[Group<T>] {
        &self.groups
    }

    pub fn priorities(&self) -> impl Iterator<Item = u64> + '_ {
        self.groups.iter().map(Group::priority)
    }

    /// Total number of resources across all groups
    pub fn resource_count(&self) -> usize {
        self.groups.iter().map(|g| g.resources().len()).sum()
    }

    /// Finds the first group with priority >= `floor` and uses its weight
    /// distribution to select a resource.
    ///
    /// Returns the resource's target and priority.
    pub fn priority_weighted(&mut self, floor: u64) -> Result<(&T, u64), BalanceError> {
        let group = locate(&self.groups, floor)?;
        let resource = draw_weighted(group, &mut self.rng)?;
        Ok((&resource.target, resource.priority))
    }

    /// Finds the first group with priority >= `floor` and selects one of its
    /// resources uniformly, ignoring weight.
    ///
    /// Returns the resource's target and priority.
    pub fn priority_random(&mut self, floor: u64) -> Result<(&T, u64), BalanceError> {
        let group = locate(&self.groups, floor)?;
        let resource = group.sample_uniform(&mut self.rng);
        Ok((&resource.target, resource.priority))
    }

    /// Picks a group uniformly and uses its weight distribution to select a
    /// resource.
    ///
    /// Every group is equally likely regardless of how many resources it holds
    /// or its total weight.
    pub fn random_weighted(&mut self) -> Result<&T, BalanceError> {
        let group = pick_group(&self.groups, &mut self.rng);
        draw_weighted(group, &mut self.rng).map(|r| &r.target)
    }

    /// Picks a group uniformly, then a resource within it uniformly, without
    /// respect for priority nor weight.
    ///
    /// As with [`random_weighted`](Self::random_weighted) groups are equally
    /// likely, so a resource in a small group is chosen more often than one in
    /// a large group.
    pub fn random(&mut self) -> &T {
        let group = pick_group(&self.groups, &mut self.rng);
        &group.sample_uniform(&mut self.rng).target
    }

    /// Select a resource according to `policy`
    pub fn select(&mut self, policy: Policy) -> Result<&Resource<T>, BalanceError> {
        let groups = &self.groups;
        let rng = &mut self.rng;
        match policy {
            Policy::PriorityWeighted(floor) => draw_weighted(locate(groups, floor)?, rng),
            Policy::PriorityRandom(floor) => Ok(locate(groups, floor)?.sample_uniform(rng)),
            Policy::RandomWeighted => draw_weighted(pick_group(groups, rng), rng),
            Policy::Random => Ok(pick_group(groups, rng).sample_uniform(rng)),
        }
    }
}

fn seeded_rng() -> Result<SmallRng, BalanceError> {
    SmallRng::try_from_os_rng().map_err(|e| BalanceError::Seeding(e.to_string()))
}

fn pick_group<'a, T, R: Rng>(groups: &'a [Group<T>], rng: &mut R) -> &'a Group<T> {
    &groups[rng.random_range(0..groups.len())]
}

fn draw_weighted<'a, T, R: Rng>(group: &'a Group<T>, rng: &mut R) -> Result<&'a Resource<T>, BalanceError> {
    group.sample_weighted(rng).ok_or_else(|| {
        tracing::error!(
            priority = group.priority(),
            total_weight = group.total_weight(),
            "Weighted draw fell outside the cumulative weight table"
        );
        BalanceError::SelectionNotFound
    })
}
