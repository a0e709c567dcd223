//! Allocation model.
//!
//! An allocation maps every task to a distinct resource: a permutation of
//! resource indices, where `allocation[i]` is the resource assigned to task
//! `i`. The permutation invariant (every resource appears exactly once) is
//! what keeps the search space restricted to feasible assignments.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A candidate solution: task `i` is assigned resource `self[i]`.
///
/// Always a permutation of `0..len` when produced by this crate's
/// generators and operators. [`Allocation::is_permutation`] exists as a
/// defensive check, not a normal-path validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation(Vec<usize>);

impl Allocation {
    /// Wraps an assignment vector. Callers are responsible for the
    /// permutation invariant; use [`is_permutation`](Self::is_permutation)
    /// to verify untrusted input.
    pub fn new(assignments: Vec<usize>) -> Self {
        Self(assignments)
    }

    /// Draws a uniformly random permutation of `0..num_resources`.
    pub fn random<R: Rng>(num_resources: usize, rng: &mut R) -> Self {
        let mut assignments: Vec<usize> = (0..num_resources).collect();
        assignments.shuffle(rng);
        Self(assignments)
    }

    /// Number of tasks covered by this allocation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tasks are assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resource assigned to `task`.
    pub fn resource_for(&self, task: usize) -> usize {
        self.0[task]
    }

    /// Task currently holding `resource`, if any.
    pub fn position_of(&self, resource: usize) -> Option<usize> {
        self.0.iter().position(|&r| r == resource)
    }

    /// Raw assignment slice, task-indexed.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes self, returning the assignment vector.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Checks that every resource in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &r in &self.0 {
            if r >= n || seen[r] {
                return false;
            }
            seen[r] = true;
        }
        true
    }

    /// Number of tasks assigned differently between `self` and `other`.
    ///
    /// Panics if lengths differ (allocations from different problems).
    pub fn hamming_distance(&self, other: &Allocation) -> usize {
        assert_eq!(self.0.len(), other.0.len(), "allocation length mismatch");
        self.0
            .iter()
            .zip(&other.0)
            .filter(|(a, b)| a != b)
            .count()
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_random_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in [1, 2, 3, 8, 20] {
            let alloc = Allocation::random(n, &mut rng);
            assert_eq!(alloc.len(), n);
            assert!(alloc.is_permutation());
        }
    }

    #[test]
    fn test_random_covers_multiple_orderings() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Allocation::random(3, &mut rng).into_inner());
        }
        // All 3! = 6 permutations should show up in 200 draws.
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_is_permutation_rejects_duplicates_and_range() {
        assert!(!Allocation::new(vec![0, 0, 2]).is_permutation());
        assert!(!Allocation::new(vec![0, 1, 3]).is_permutation());
        assert!(Allocation::new(vec![2, 0, 1]).is_permutation());
        assert!(Allocation::new(vec![]).is_permutation());
    }

    #[test]
    fn test_position_of() {
        let alloc = Allocation::new(vec![2, 0, 1]);
        assert_eq!(alloc.position_of(0), Some(1));
        assert_eq!(alloc.position_of(2), Some(0));
        assert_eq!(alloc.position_of(5), None);
    }

    #[test]
    fn test_hamming_distance() {
        let a = Allocation::new(vec![0, 1, 2]);
        let b = Allocation::new(vec![0, 2, 1]);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a), 0);
    }

    #[test]
    fn test_display() {
        let alloc = Allocation::new(vec![2, 0, 1]);
        assert_eq!(alloc.to_string(), "[2, 0, 1]");
    }
}
