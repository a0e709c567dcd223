//! Parallel cellular algorithm for task-resource assignment.
//!
//! Maps each of N tasks to a distinct resource so that total assignment
//! cost is minimized. Candidate solutions (permutations of resource
//! indices) sit on a 2-D grid; each generation, every cell takes one
//! directed swap toward its best Moore neighbor, mutates with a small
//! probability, and keeps the result only on strict improvement. A running
//! incumbent records the best allocation seen across all generations.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CostMatrix`, `Allocation`
//! - **`pca`**: The cellular engine — `Grid`, `Cell`, perturbation
//!   operators, `PcaEngine`, `PcaConfig`
//! - **`validation`**: Fail-fast configuration checks
//! - **`error`**: `ConfigError`, `PcaError`
//!
//! # Example
//!
//! ```
//! use pca_alloc::models::CostMatrix;
//! use pca_alloc::pca::{PcaConfig, PcaEngine};
//!
//! let matrix = CostMatrix::new(vec![
//!     vec![8.0, 6.0, 10.0],
//!     vec![7.0, 5.0, 9.0],
//!     vec![9.0, 8.0, 4.0],
//! ])?;
//! let config = PcaConfig { seed: Some(42), ..PcaConfig::default() };
//! let outcome = PcaEngine::new(&matrix, config)?.run_seeded()?;
//! assert!(outcome.best.cost >= 17.0);
//! # Ok::<(), pca_alloc::error::PcaError>(())
//! ```
//!
//! # References
//!
//! - Alba & Dorronsoro (2008), "Cellular Genetic Algorithms"
//! - Talbi (2009), "Metaheuristics: From Design to Implementation"

pub mod error;
pub mod models;
pub mod pca;
pub mod validation;
