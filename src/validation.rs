//! Run-configuration validation.
//!
//! Checks a [`PcaConfig`] before any generation executes. Detects:
//! - Zero grid dimensions
//! - Mutation probability outside `[0, 1]` (or non-finite)
//! - Zero iteration budget
//!
//! Cost-matrix shape problems are caught earlier, by
//! [`CostMatrix::new`](crate::models::CostMatrix::new). All detected
//! problems are reported together rather than stopping at the first.

use crate::error::ConfigError;
use crate::pca::PcaConfig;

/// Validation result: `Ok(())` or every detected problem.
pub type ValidationResult = Result<(), Vec<ConfigError>>;

/// Validates a run configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate(config: &PcaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.grid_rows == 0 || config.grid_cols == 0 {
        errors.push(ConfigError::InvalidGridDimensions {
            rows: config.grid_rows,
            cols: config.grid_cols,
        });
    }

    let p = config.mutation_probability;
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        errors.push(ConfigError::InvalidMutationProbability { value: p });
    }

    if config.max_iterations == 0 {
        errors.push(ConfigError::InvalidIterationCount);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
