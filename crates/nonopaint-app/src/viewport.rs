//! Pan/zoom state and the mapping between canvas pixels and grid cells.
//!
//! The forward map is `screen = cell_index * cell_size * zoom + offset`, where
//! `screen` is relative to the canvas origin and `offset` is the on-screen
//! position of the grid's top-left corner.

use eframe::egui::{Pos2, Vec2};
use nonopaint_core::CellGrid;

pub(crate) const MIN_ZOOM: f32 = 0.025;
pub(crate) const MAX_ZOOM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub(crate) fn sign(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// A cell coordinate that may lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellCoord {
    pub(crate) x: i64,
    pub(crate) y: i64,
}

impl CellCoord {
    /// Returns the coordinate as grid indices if it lies inside `grid`.
    #[must_use]
    pub(crate) fn to_grid(self, grid: &CellGrid) -> Option<(usize, usize)> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        grid.contains(x, y).then_some((x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    offset: Vec2,
    zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Vec2::splat(16.0), 1.0)
    }
}

impl Viewport {
    #[must_use]
    pub(crate) fn new(offset: Vec2, zoom: f32) -> Self {
        Self {
            offset,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    #[must_use]
    pub(crate) fn offset(&self) -> Vec2 {
        self.offset
    }

    #[must_use]
    pub(crate) fn zoom(&self) -> f32 {
        self.zoom
    }

    /// On-screen side length of one cell.
    #[must_use]
    pub(crate) fn cell_screen_size(&self, cell_size: f32) -> f32 {
        cell_size * self.zoom
    }

    /// On-screen size of a whole `width × height` grid.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn grid_screen_size(&self, width: usize, height: usize, cell_size: f32) -> Vec2 {
        Vec2::new(width as f32, height as f32) * self.cell_screen_size(cell_size)
    }

    /// Top-left corner of cell `(x, y)` in canvas coordinates.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn cell_to_screen(&self, x: usize, y: usize, cell_size: f32) -> Pos2 {
        let side = self.cell_screen_size(cell_size);
        Pos2::new(x as f32 * side, y as f32 * side) + self.offset
    }

    /// Cell under a canvas position, floor-rounded. The result is not bounds
    /// checked.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn screen_to_cell(&self, pos: Pos2, cell_size: f32) -> CellCoord {
        let side = self.cell_screen_size(cell_size);
        let grid_pos = (pos.to_vec2() - self.offset) / side;
        CellCoord {
            x: grid_pos.x.floor() as i64,
            y: grid_pos.y.floor() as i64,
        }
    }

    /// Moves the grid so that a grid of `grid_size` (already zoomed) sits in
    /// the middle of a canvas of `viewport_size`.
    pub(crate) fn center(&mut self, grid_size: Vec2, viewport_size: Vec2) {
        self.offset = (viewport_size - grid_size) / 2.0;
    }

    pub(crate) fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Scales the zoom by `sqrt(exp(±zoom_speed))`, keeping the grid point
    /// under `anchor` fixed on screen.
    pub(crate) fn zoom_at(&mut self, anchor: Pos2, direction: ZoomDirection, zoom_speed: f32) {
        let factor = (direction.sign() * zoom_speed).exp().sqrt();
        let anchor = anchor.to_vec2();
        let grid_point = (anchor - self.offset) / self.zoom;
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset = anchor - grid_point * self.zoom;
    }

    pub(crate) fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Pos2, Vec2};
    use nonopaint_core::CellGrid;
    use proptest::prelude::*;

    use super::{CellCoord, MAX_ZOOM, MIN_ZOOM, Viewport, ZoomDirection};

    const CELL: f32 = 64.0;
    const EPS: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn screen_to_cell_inverts_cell_to_screen() {
        let viewport = Viewport::new(Vec2::new(16.0, -40.0), 0.5);
        let corner = viewport.cell_to_screen(3, 2, CELL);
        assert_eq!(corner, Pos2::new(16.0 + 3.0 * 32.0, -40.0 + 2.0 * 32.0));
        assert_eq!(
            viewport.screen_to_cell(corner + Vec2::splat(1.0), CELL),
            CellCoord { x: 3, y: 2 }
        );
        assert_eq!(
            viewport.screen_to_cell(corner - Vec2::splat(1.0), CELL),
            CellCoord { x: 2, y: 1 }
        );
    }

    #[test]
    fn screen_to_cell_may_be_out_of_range() {
        let viewport = Viewport::default();
        let grid = CellGrid::new(2, 2);

        let before = viewport.screen_to_cell(Pos2::new(0.0, 0.0), CELL);
        assert_eq!(before, CellCoord { x: -1, y: -1 });
        assert_eq!(before.to_grid(&grid), None);

        let after = viewport.screen_to_cell(Pos2::new(16.0 + 2.0 * CELL, 20.0), CELL);
        assert_eq!(after, CellCoord { x: 2, y: 0 });
        assert_eq!(after.to_grid(&grid), None);

        let inside = viewport.screen_to_cell(Pos2::new(100.0, 20.0), CELL);
        assert_eq!(inside.to_grid(&grid), Some((1, 0)));
    }

    #[test]
    fn center_places_grid_in_middle() {
        let mut viewport = Viewport::default();
        let grid_size = viewport.grid_screen_size(8, 4, CELL);
        viewport.center(grid_size, Vec2::new(800.0, 600.0));
        assert_eq!(viewport.offset(), Vec2::new(144.0, 172.0));
    }

    #[test]
    fn pan_is_zoom_independent() {
        let mut viewport = Viewport::new(Vec2::new(10.0, 10.0), 4.0);
        viewport.pan(Vec2::new(5.0, -20.0));
        assert_eq!(viewport.offset(), Vec2::new(15.0, -10.0));
        assert_close(viewport.zoom(), 4.0);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut viewport = Viewport::default();
        let anchor = Pos2::new(300.0, 220.0);
        let before = (anchor.to_vec2() - viewport.offset()) / viewport.zoom();

        viewport.zoom_at(anchor, ZoomDirection::In, 0.4);
        assert!(viewport.zoom() > 1.0);
        let after = (anchor.to_vec2() - viewport.offset()) / viewport.zoom();
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
    }

    proptest! {
        #[test]
        fn zoom_in_then_out_restores_state(
            ax in -2000.0f32..2000.0,
            ay in -2000.0f32..2000.0,
            ox in -2000.0f32..2000.0,
            oy in -2000.0f32..2000.0,
            zoom in 0.05f32..5.0,
        ) {
            let start = Viewport::new(Vec2::new(ox, oy), zoom);
            let mut viewport = start;
            let anchor = Pos2::new(ax, ay);

            viewport.zoom_at(anchor, ZoomDirection::In, 0.2);
            viewport.zoom_at(anchor, ZoomDirection::Out, 0.2);

            let tolerance = |expected: f32| 1e-3 * expected.abs().max(1.0);
            prop_assert!((viewport.zoom() - start.zoom()).abs() < tolerance(start.zoom()));
            prop_assert!((viewport.offset().x - ox).abs() < tolerance(ax.abs().max(ox.abs())));
            prop_assert!((viewport.offset().y - oy).abs() < tolerance(ay.abs().max(oy.abs())));
        }
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::default();
        for _ in 0..200 {
            viewport.zoom_at(Pos2::ZERO, ZoomDirection::Out, 1.0);
        }
        assert_close(viewport.zoom(), MIN_ZOOM);
        for _ in 0..200 {
            viewport.zoom_at(Pos2::ZERO, ZoomDirection::In, 1.0);
        }
        assert_close(viewport.zoom(), MAX_ZOOM);

        assert_close(Viewport::new(Vec2::ZERO, 100.0).zoom(), MAX_ZOOM);
    }
}
