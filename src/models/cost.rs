//! Cost matrix model.
//!
//! Holds the task × resource cost table and evaluates the total cost of a
//! full allocation. The matrix must be square: allocations are bijective,
//! so the task and resource counts have to agree.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PcaError};

use super::Allocation;

/// Immutable square table of non-negative assignment costs.
///
/// `costs[task][resource]` is the cost of running `task` on `resource`.
/// Validated at construction; read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    costs: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Builds a matrix from raw rows, rejecting empty, non-square, or
    /// negative/non-finite input.
    pub fn new(costs: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        if costs.is_empty() {
            return Err(ConfigError::EmptyCostMatrix);
        }
        let expected = costs.len();
        for (row, entries) in costs.iter().enumerate() {
            if entries.len() != expected {
                return Err(ConfigError::NonSquareCostMatrix {
                    row,
                    got: entries.len(),
                    expected,
                });
            }
            for (resource, &value) in entries.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidCost {
                        task: row,
                        resource,
                        value,
                    });
                }
            }
        }
        Ok(Self { costs })
    }

    /// Number of tasks (= number of resources).
    pub fn num_tasks(&self) -> usize {
        self.costs.len()
    }

    /// Cost of assigning `task` to `resource`.
    pub fn cost(&self, task: usize, resource: usize) -> f64 {
        self.costs[task][resource]
    }

    /// Total cost of an allocation: `Σ costs[i][allocation[i]]`.
    ///
    /// The permutation check is defensive; the generators and operators in
    /// this crate only ever produce valid allocations, so a violation here
    /// is a logic fault and aborts the run.
    pub fn evaluate(&self, allocation: &Allocation) -> Result<f64, PcaError> {
        if allocation.len() != self.num_tasks() {
            return Err(PcaError::InvariantViolation(format!(
                "allocation covers {} tasks, matrix has {}",
                allocation.len(),
                self.num_tasks()
            )));
        }
        if !allocation.is_permutation() {
            return Err(PcaError::InvariantViolation(format!(
                "allocation {allocation} is not a permutation"
            )));
        }
        Ok(allocation
            .as_slice()
            .iter()
            .enumerate()
            .map(|(task, &resource)| self.costs[task][resource])
            .sum())
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = ConfigError;

    fn try_from(costs: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(costs)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.costs
    }
}
