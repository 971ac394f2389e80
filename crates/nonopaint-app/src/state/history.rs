use std::num::NonZero;

use nonopaint_core::CellGrid;

use crate::undo_redo_stack::UndoRedoStack;

/// Undo/redo history of grid contents.
///
/// Every entry is a full grid snapshot, so resizes and imports are undone the
/// same way as strokes.
#[derive(Debug)]
pub(crate) struct History {
    stack: UndoRedoStack<CellGrid>,
}

impl History {
    pub(crate) fn new(capacity: NonZero<usize>, grid: &CellGrid) -> Self {
        let mut history = Self {
            stack: UndoRedoStack::new(capacity),
        };
        history.reset(grid);
        history
    }

    pub(crate) fn reset(&mut self, grid: &CellGrid) {
        self.stack.clear();
        self.stack.push(grid.clone());
    }

    /// Records `grid` unless it equals the current entry.
    pub(crate) fn push(&mut self, grid: &CellGrid) {
        if self.stack.current() != Some(grid) {
            self.stack.push(grid.clone());
        }
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    pub(crate) fn undo(&mut self, target: &mut CellGrid) -> bool {
        match self.stack.undo() {
            Some(snapshot) => {
                target.clone_from(snapshot);
                true
            }
            None => false,
        }
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    pub(crate) fn redo(&mut self, target: &mut CellGrid) -> bool {
        match self.stack.redo() {
            Some(snapshot) => {
                target.clone_from(snapshot);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use nonopaint_core::CellGrid;

    use super::History;

    #[test]
    fn undo_and_redo_restore_snapshots() {
        let mut grid = CellGrid::new(3, 3);
        let mut history = History::new(NonZero::new(10).unwrap(), &grid);

        grid.toggle(0, 0);
        history.push(&grid);
        grid.resize(5, 2);
        history.push(&grid);

        assert!(history.undo(&mut grid));
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert!(grid.is_filled(0, 0));

        assert!(history.undo(&mut grid));
        assert_eq!(grid, CellGrid::new(3, 3));
        assert!(!history.undo(&mut grid));

        assert!(history.redo(&mut grid));
        assert!(history.redo(&mut grid));
        assert_eq!((grid.width(), grid.height()), (5, 2));
        assert!(!history.redo(&mut grid));
    }

    #[test]
    fn unchanged_grid_is_not_recorded() {
        let grid = CellGrid::new(2, 2);
        let mut history = History::new(NonZero::new(10).unwrap(), &grid);
        history.push(&grid);
        assert!(!history.can_undo());
    }
}
