//! Error types for the cellular optimizer.
//!
//! Two failure categories exist:
//! - [`ConfigError`]: invalid setup (matrix shape, grid dimensions,
//!   probabilities). Surfaced before any generation runs.
//! - [`PcaError::InvariantViolation`]: an allocation failed the permutation
//!   check at evaluation time. A programming-logic fault, not a recoverable
//!   condition — the run aborts rather than continue with corrupted state.

use thiserror::Error;

/// A single configuration problem detected during setup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The cost matrix has no rows.
    #[error("cost matrix is empty")]
    EmptyCostMatrix,
    /// Row/column counts disagree (allocations must be bijective).
    #[error("cost matrix must be square: row {row} has {got} columns, expected {expected}")]
    NonSquareCostMatrix {
        /// Offending row index.
        row: usize,
        /// Columns found in that row.
        got: usize,
        /// Columns required (= number of tasks).
        expected: usize,
    },
    /// A cost entry is negative, NaN, or infinite.
    #[error("cost for task {task}, resource {resource} must be non-negative and finite, got {value}")]
    InvalidCost {
        /// Task (row) index.
        task: usize,
        /// Resource (column) index.
        resource: usize,
        /// The rejected value.
        value: f64,
    },
    /// Grid rows or columns is zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidGridDimensions {
        /// Configured row count.
        rows: usize,
        /// Configured column count.
        cols: usize,
    },
    /// Mutation probability outside `[0, 1]` or non-finite.
    #[error("mutation probability must be within [0, 1], got {value}")]
    InvalidMutationProbability {
        /// The rejected value.
        value: f64,
    },
    /// Iteration budget of zero.
    #[error("max_iterations must be at least 1")]
    InvalidIterationCount,
}

/// Top-level error for an optimization run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PcaError {
    /// One or more configuration problems; fatal before the first generation.
    #[error("invalid configuration: {}", join_messages(.0))]
    Configuration(Vec<ConfigError>),
    /// An allocation failed the permutation invariant (should be unreachable).
    #[error("allocation invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<ConfigError> for PcaError {
    fn from(err: ConfigError) -> Self {
        PcaError::Configuration(vec![err])
    }
}

fn join_messages(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
