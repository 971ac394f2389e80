use nonopaint_core::CellGrid;

use crate::{
    state::{PuzzleSize, Settings},
    viewport::Viewport,
};

// AppState holds persisted state (grid + settings + view). It is serialized for resume.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) grid: CellGrid,
    pub(crate) settings: Settings,
    pub(crate) viewport: Viewport,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let settings = Settings::default();
        let PuzzleSize { width, height } = settings.puzzle;
        Self::new(CellGrid::new(width, height), settings, Viewport::default())
    }
}

impl AppState {
    /// Creates a state whose puzzle size setting follows `grid`.
    #[must_use]
    pub(crate) fn new(grid: CellGrid, mut settings: Settings, viewport: Viewport) -> Self {
        settings.puzzle = PuzzleSize::of(&grid);
        Self {
            grid,
            settings,
            viewport,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Resizes the grid to the configured puzzle size.
    pub(crate) fn apply_puzzle_size(&mut self) {
        let size = self.settings.puzzle.clamped();
        self.settings.puzzle = size;
        if PuzzleSize::of(&self.grid) != size {
            log::debug!("resizing grid to {}x{}", size.width, size.height);
            self.grid.resize(size.width, size.height);
        }
    }

    /// Replaces the grid wholesale and propagates its size to the settings.
    pub(crate) fn replace_grid(&mut self, grid: CellGrid) {
        self.grid = grid;
        self.sync_puzzle_size();
    }

    /// Makes the puzzle size setting match the grid after an undo/redo.
    pub(crate) fn sync_puzzle_size(&mut self) {
        self.settings.puzzle = PuzzleSize::of(&self.grid);
    }

    /// Centers the grid in a canvas of `canvas_size` at the current zoom.
    pub(crate) fn center_grid(&mut self, canvas_size: eframe::egui::Vec2) {
        let grid_size = self.viewport.grid_screen_size(
            self.grid.width(),
            self.grid.height(),
            self.settings.display.cell_size,
        );
        self.viewport.center(grid_size, canvas_size);
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}
