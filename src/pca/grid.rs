//! Cellular grid and Moore neighborhood.
//!
//! The population is a fixed M×N lattice of cells, each owning one
//! allocation and its evaluated cost. Edges are hard boundaries — there is
//! no wraparound, so corner cells see 3 neighbors, edge cells 5, interior
//! cells 8. That asymmetry is part of the algorithm, not an artifact.

use serde::{Deserialize, Serialize};

use crate::error::PcaError;
use crate::models::{Allocation, CostMatrix};

/// One grid position: a candidate allocation and its exact cost.
///
/// Cells are replaced, never mutated in place; the stored cost is always
/// the recomputation of the stored allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Candidate solution held at this position.
    pub allocation: Allocation,
    /// `CostMatrix::evaluate` of that allocation.
    pub cost: f64,
}

/// Fixed-size lattice of cells, row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Seeds a grid with uniformly random allocations evaluated against
    /// `matrix`.
    pub fn random<R: rand::Rng>(
        rows: usize,
        cols: usize,
        matrix: &CostMatrix,
        rng: &mut R,
    ) -> Result<Self, PcaError> {
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            let allocation = Allocation::random(matrix.num_tasks(), rng);
            let cost = matrix.evaluate(&allocation)?;
            cells.push(Cell { allocation, cost });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Rebuilds a grid of the same shape from a fully computed cell vector.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Row count (M).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count (N).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(x, y)`, `x` indexing rows and `y` columns.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[x * self.cols + y]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Moore neighborhood of `(x, y)`: the up-to-8 adjacent cells, clipped
    /// at the grid boundary. Empty on a 1×1 grid.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<&Cell> {
        let mut out = Vec::with_capacity(8);
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && nx < self.rows as i64 && ny >= 0 && ny < self.cols as i64 {
                    out.push(self.cell(nx as usize, ny as usize));
                }
            }
        }
        out
    }

    /// Minimum-cost cell of the grid.
    ///
    /// Grids are non-empty by construction (dimensions validated > 0).
    pub fn best(&self) -> &Cell {
        self.cells
            .iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
            .expect("grid has at least one cell")
    }
}
