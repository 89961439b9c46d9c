//! Background grid for fast proximity queries
//!
//! The unit square is split into square cells of side `min_distance / sqrt(2)`,
//! so each cell can hold at most one point of a valid sample set and every
//! point closer than `min_distance` to a candidate lies in the 5x5 block of
//! cells around the candidate's cell.

use std::f64::consts::SQRT_2;

use crate::error::{PoissonError, Result};
use crate::point::Point;

/// Upper bound on the number of cells a grid may allocate
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Uniform grid over the unit square storing at most one point per cell
///
/// Writing a point into an occupied cell replaces the previous occupant.
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::{Grid, Point};
///
/// let mut grid = Grid::new(0.1).unwrap();
/// grid.set(Point::new(0.5, 0.5));
///
/// assert!(grid.has_neighbor_within(&Point::new(0.55, 0.5), 0.01));
/// assert!(!grid.has_neighbor_within(&Point::new(0.75, 0.5), 0.01));
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<Option<Point>>,
}

impl Grid {
    /// Create an empty grid sized for `min_distance`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `min_distance` is not a positive finite
    /// number or the grid would exceed [`MAX_GRID_CELLS`] cells
    pub fn new(min_distance: f64) -> Result<Self> {
        if !(min_distance.is_finite() && min_distance > 0.0) {
            return Err(PoissonError::InvalidConfig(format!(
                "min distance must be positive (got {})",
                min_distance
            )));
        }

        let cell_size = min_distance / SQRT_2;
        let side = (1.0 / cell_size).ceil().max(1.0);
        if side * side > MAX_GRID_CELLS as f64 {
            return Err(PoissonError::InvalidConfig(format!(
                "min distance {} needs a {}x{} grid (limit is {} cells)",
                min_distance, side, side, MAX_GRID_CELLS
            )));
        }

        let cols = side as usize;
        let rows = side as usize;

        Ok(Self {
            cols,
            rows,
            cell_size,
            cells: vec![None; cols * rows],
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Whether `point` lies in the unit square the grid covers (bounds inclusive)
    ///
    /// Only points inside the covered domain may be stored: clamped
    /// out-of-domain points would share edge cells and hide each other.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        (0.0..=1.0).contains(&point.x) && (0.0..=1.0).contains(&point.y)
    }

    /// Column and row of the cell containing `point`
    ///
    /// Coordinates outside the unit square (including exactly `1.0` when it
    /// falls on a cell boundary) are clamped to the nearest edge cell.
    pub fn cell_of(&self, point: &Point) -> (usize, usize) {
        (
            Self::clamp_index(point.x / self.cell_size, self.cols),
            Self::clamp_index(point.y / self.cell_size, self.rows),
        )
    }

    #[inline]
    fn clamp_index(scaled: f64, len: usize) -> usize {
        let index = scaled.floor();
        if index.is_nan() || index < 0.0 {
            0
        } else {
            (index as usize).min(len - 1)
        }
    }

    /// Point stored at `(col, row)`, if any
    pub fn get(&self, col: usize, row: usize) -> Option<Point> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Store `point` in its cell, replacing any previous occupant
    pub fn set(&mut self, point: Point) {
        let (col, row) = self.cell_of(&point);
        self.cells[row * self.cols + col] = Some(point);
    }

    /// Whether any stored point in the 5x5 block around `point`'s cell lies at
    /// a squared distance strictly below `max_squared_distance`
    pub fn has_neighbor_within(&self, point: &Point, max_squared_distance: f64) -> bool {
        let (col, row) = self.cell_of(point);

        let col_min = col.saturating_sub(2);
        let row_min = row.saturating_sub(2);
        let col_max = (col + 2).min(self.cols - 1);
        let row_max = (row + 2).min(self.rows - 1);

        for r in row_min..=row_max {
            let offset = r * self.cols;
            for c in col_min..=col_max {
                if let Some(stored) = &self.cells[offset + c] {
                    if stored.distance_squared(point) < max_squared_distance {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
