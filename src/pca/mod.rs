//! Parallel cellular algorithm.
//!
//! The population lives on a small 2-D lattice; each cell improves its
//! candidate by imitating the best allocation in its Moore neighborhood
//! (one directed swap per generation) plus occasional random mutation,
//! with strict-improvement acceptance. Updates are synchronous: every
//! generation is built from a frozen read of the previous one.
//!
//! # Submodules
//!
//! - [`operators`]: `random_swap` and `swap_first_difference`
//!
//! # Reference
//! - Alba & Dorronsoro (2008), "Cellular Genetic Algorithms"
//! - Talbi (2009), "Metaheuristics: From Design to Implementation", Ch. 3

mod engine;
mod grid;
pub mod operators;

pub use engine::{GenerationSnapshot, Incumbent, PcaConfig, PcaEngine, RunOutcome};
pub use grid::{Cell, Grid};
