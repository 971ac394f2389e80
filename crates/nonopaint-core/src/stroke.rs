//! Per-gesture paint bookkeeping.

use crate::CellGrid;

/// Tracks which cells a single press-move-release gesture has already toggled.
///
/// Pointer move events arrive many times per cell while dragging. Routing every
/// paint through a stroke makes the gesture toggle each cell at most once.
/// Starting a new stroke starts with a clean mask, so the same cell can be
/// toggled again by the next gesture.
///
/// # Examples
///
/// ```
/// use nonopaint_core::{CellGrid, PaintStroke};
///
/// let mut grid = CellGrid::new(4, 4);
/// let mut stroke = PaintStroke::new(&grid);
/// assert!(stroke.paint(&mut grid, 1, 1));
/// assert!(!stroke.paint(&mut grid, 1, 1));
/// assert!(grid.is_filled(1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintStroke {
    touched: CellGrid,
    painted: usize,
}

impl PaintStroke {
    /// Starts a stroke sized to `grid`.
    #[must_use]
    pub fn new(grid: &CellGrid) -> Self {
        Self {
            touched: CellGrid::new(grid.width(), grid.height()),
            painted: 0,
        }
    }

    /// Toggles `(x, y)` in `grid` unless this stroke already did so.
    ///
    /// Out-of-range coordinates are ignored. Returns `true` if a cell was
    /// toggled.
    pub fn paint(&mut self, grid: &mut CellGrid, x: usize, y: usize) -> bool {
        if !grid.contains(x, y) || self.touched.get(x, y) != Some(false) {
            return false;
        }
        self.touched.set(x, y, true);
        self.painted += 1;
        grid.toggle(x, y)
    }

    /// Returns `true` if this stroke has toggled `(x, y)`.
    #[must_use]
    pub fn has_touched(&self, x: usize, y: usize) -> bool {
        self.touched.is_filled(x, y)
    }

    /// Returns the number of cells toggled so far.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_cell_toggles_once_per_stroke() {
        let mut grid = CellGrid::new(3, 3);
        let mut stroke = PaintStroke::new(&grid);
        assert!(stroke.paint(&mut grid, 2, 0));
        assert!(!stroke.paint(&mut grid, 2, 0));
        assert!(!stroke.paint(&mut grid, 2, 0));
        assert!(grid.is_filled(2, 0));
        assert!(stroke.has_touched(2, 0));
        assert_eq!(stroke.painted_count(), 1);
    }

    #[test]
    fn test_two_strokes_toggle_twice() {
        let mut grid = CellGrid::new(3, 3);
        let original = grid.clone();

        let mut first = PaintStroke::new(&grid);
        first.paint(&mut grid, 1, 1);
        let mut second = PaintStroke::new(&grid);
        second.paint(&mut grid, 1, 1);

        assert_eq!(grid, original);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut grid = CellGrid::new(2, 2);
        let mut stroke = PaintStroke::new(&grid);
        assert!(!stroke.paint(&mut grid, 2, 1));
        assert!(!stroke.paint(&mut grid, 0, 7));
        assert_eq!(stroke.painted_count(), 0);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_stroke_outlives_grid_resize() {
        let mut grid = CellGrid::new(2, 2);
        let mut stroke = PaintStroke::new(&grid);
        grid.resize(4, 4);

        // Cells outside the mask taken at stroke start are not painted.
        assert!(!stroke.paint(&mut grid, 3, 3));
        assert!(stroke.paint(&mut grid, 1, 1));
    }
}
