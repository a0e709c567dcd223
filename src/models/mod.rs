//! Assignment-problem domain models.
//!
//! Core data types for the optimizer: the cost table and the candidate
//! solutions the search moves through.
//!
//! - [`CostMatrix`]: immutable square task × resource cost table
//! - [`Allocation`]: a permutation mapping each task to a distinct resource

mod allocation;
mod cost;

pub use allocation::Allocation;
pub use cost::CostMatrix;
