//! Priority groups and their cumulative-weight tables

use rand::Rng;

use super::{BalanceError, Resource};

/// Resources sharing one priority value.
///
/// `cumulative_weights[i]` holds the sum of the weights of items `0..=i`, so an
/// item owns the half-open interval `[cumulative_weights[i - 1], cumulative_weights[i])`
/// of the draw space and its length equals the item's weight.
#[derive(Debug, Clone)]
pub struct Group<T> {
    priority: u64,
    items: Vec<Resource<T>>,
    cumulative_weights: Vec<u64>,
    total_weight: u64,
}

impl<T> Group<T> {
    fn open(first: Resource<T>) -> Self {
        Self {
            priority: first.priority,
            items: vec![first],
            cumulative_weights: Vec::new(),
            total_weight: 0,
        }
    }

    /// Priority shared by every resource in the group
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// Resources in their original relative order
    pub fn resources(&self) -> &[Resource<T>] {
        &self.items
    }

    pub fn cumulative_weights(&self) -> &[u64] {
        &self.cumulative_weights
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Fill in the prefix sums. A group whose weights are all zero is rewritten
    /// to weight one per item so that it still distributes evenly.
    fn compute_weights(&mut self) -> Result<(), BalanceError> {
        self.cumulative_weights = Vec::with_capacity(self.items.len());

        let mut total: u64 = 0;
        for item in &self.items {
            total = total
                .checked_add(item.weight)
                .ok_or(BalanceError::WeightOverflow(self.priority))?;
            self.cumulative_weights.push(total);
        }

        if total == 0 {
            tracing::debug!(
                priority = self.priority,
                resources = self.items.len(),
                "All weights are zero, using uniform weights"
            );
            for (i, item) in self.items.iter_mut().enumerate() {
                item.weight = 1;
                self.cumulative_weights[i] = i as u64 + 1;
            }
            total = self.items.len() as u64;
        }

        self.total_weight = total;
        Ok(())
    }

    /// Pick a resource with probability `weight / total_weight`.
    ///
    /// Single-item groups are answered without touching the generator. `None`
    /// means the cumulative table is broken and should never be observed.
    pub(crate) fn sample_weighted<R: Rng>(&self, rng: &mut R) -> Option<&Resource<T>> {
        if self.items.len() == 1 {
            return self.items.first();
        }

        let n = rng.random_range(0..self.total_weight);
        let idx = self.cumulative_weights.partition_point(|&sum| sum <= n);
        self.items.get(idx)
    }

    /// Pick a resource uniformly, ignoring weight
    pub(crate) fn sample_uniform<R: Rng>(&self, rng: &mut R) -> &Resource<T> {
        &self.items[rng.random_range(0..self.items.len())]
    }
}

/// Stable-sort `resources` by priority and split them into groups.
///
/// Equal-priority resources keep their input order inside their group.
pub(crate) fn build_groups<T>(mut resources: Vec<Resource<T>>) -> Result<Vec<Group<T>>, BalanceError> {
    if resources.is_empty() {
        return Err(BalanceError::EmptyResources);
    }

    resources.sort_by_key(|r| r.priority);

    let mut groups: Vec<Group<T>> = Vec::new();
    for resource in resources {
        match groups.last_mut() {
            Some(group) if group.priority == resource.priority => group.items.push(resource),
            _ => groups.push(Group::open(resource)),
        }
    }

    for group in &mut groups {
        group.compute_weights()?;
    }

    Ok(groups)
}

/// First group whose priority is at least `floor`
pub(crate) fn locate<T>(groups: &[Group<T>], floor: u64) -> Result<&Group<T>, BalanceError> {
    let idx = groups.partition_point(|g| g.priority < floor);
    groups.get(idx).ok_or(BalanceError::NoMatchingPriority(floor))
}
