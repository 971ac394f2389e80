//! The painting canvas: cells, grid lines and clues, plus pointer input.

use std::ops::Range;

use eframe::egui::{
    Event, FontId, Painter, Pos2, PointerButton, Rect, Response, Sense, Stroke, Ui, Vec2,
};
use nonopaint_core::{CellGrid, GridClues};

use crate::{
    action::{ActionRequestQueue, PointerAction, ViewAction},
    state::DisplaySettings,
    ui::{
        clue_layout::{self, ClueLabel, ClueMetrics},
        palette::CanvasPalette,
    },
    viewport::{Viewport, ZoomDirection},
};

#[derive(Debug)]
pub(crate) struct CanvasViewModel<'a> {
    grid: &'a CellGrid,
    clues: GridClues,
    viewport: Viewport,
    display: &'a DisplaySettings,
    hide_answer: bool,
    center_requested: bool,
    interactive: bool,
}

impl<'a> CanvasViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        grid: &'a CellGrid,
        viewport: Viewport,
        display: &'a DisplaySettings,
        hide_answer: bool,
        center_requested: bool,
        interactive: bool,
    ) -> Self {
        Self {
            grid,
            clues: GridClues::new(grid),
            viewport,
            display,
            hide_answer,
            center_requested,
            interactive,
        }
    }

    /// Cell index ranges that intersect a canvas of `canvas_size`.
    fn visible_cells(&self, canvas_size: Vec2) -> (Range<usize>, Range<usize>) {
        let cell_size = self.display.cell_size;
        let min = self.viewport.screen_to_cell(Pos2::ZERO, cell_size);
        let max = self.viewport.screen_to_cell(canvas_size.to_pos2(), cell_size);
        let clamp = |lo: i64, hi: i64, len: usize| {
            let len_i = i64::try_from(len).unwrap_or(i64::MAX);
            let start = usize::try_from(lo.clamp(0, len_i)).unwrap_or(0);
            let end = usize::try_from(hi.saturating_add(1).clamp(0, len_i)).unwrap_or(len);
            start..end
        };
        (
            clamp(min.x, max.x, self.grid.width()),
            clamp(min.y, max.y, self.grid.height()),
        )
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &CanvasViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let rect = response.rect;

    if vm.center_requested {
        action_queue.request(
            ViewAction::Center {
                canvas_size: rect.size(),
            }
            .into(),
        );
    }
    if vm.interactive {
        handle_pointer(ui, &response, action_queue);
    }

    let palette = CanvasPalette::new(vm.display);
    painter.rect_filled(rect, 0.0, palette.background);
    draw_cells(&painter, vm, rect, &palette);
    draw_lines(&painter, vm, rect.min.to_vec2(), &palette);
    draw_clues(&painter, vm, rect.min.to_vec2(), &palette);
}

fn handle_pointer(ui: &Ui, response: &Response, action_queue: &mut ActionRequestQueue) {
    let rect = response.rect;
    let hovered = response.contains_pointer();
    let to_canvas = |pos: Pos2| (pos - rect.min).to_pos2();

    ui.input(|i| {
        for event in &i.events {
            let action = match event {
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if hovered && rect.contains(*pos) => match button {
                    PointerButton::Primary => PointerAction::PressPrimary(to_canvas(*pos)),
                    PointerButton::Secondary => PointerAction::PressSecondary(to_canvas(*pos)),
                    _ => continue,
                },
                Event::PointerButton { pressed: false, .. } | Event::PointerGone => {
                    PointerAction::Release
                }
                Event::PointerMoved(pos) if rect.contains(*pos) => {
                    PointerAction::Move(to_canvas(*pos))
                }
                // Leaving the canvas ends the gesture.
                Event::PointerMoved(_) => PointerAction::Release,
                Event::MouseWheel { delta, .. } if hovered && delta.y != 0.0 => {
                    let Some(anchor) = i.pointer.hover_pos() else {
                        continue;
                    };
                    let direction = if delta.y > 0.0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    };
                    PointerAction::Zoom {
                        anchor: to_canvas(anchor),
                        direction,
                    }
                }
                _ => continue,
            };
            action_queue.request(action.into());
        }
    });
}

fn draw_cells(painter: &Painter, vm: &CanvasViewModel<'_>, rect: Rect, palette: &CanvasPalette) {
    let origin = rect.min.to_vec2();
    let cell_size = vm.display.cell_size;
    let side = vm.viewport.cell_screen_size(cell_size);
    let (xs, ys) = vm.visible_cells(rect.size());
    for x in xs {
        for y in ys.clone() {
            let min = vm.viewport.cell_to_screen(x, y, cell_size) + origin;
            let color = palette.cell(vm.grid.is_filled(x, y), vm.hide_answer);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(side)), 0.0, color);
        }
    }
}

fn draw_lines(painter: &Painter, vm: &CanvasViewModel<'_>, origin: Vec2, palette: &CanvasPalette) {
    let cell_size = vm.display.cell_size;
    let (width, height) = (vm.grid.width(), vm.grid.height());
    let stroke = Stroke::new(vm.display.line_thickness, palette.line);

    for x in 0..=width {
        let top = vm.viewport.cell_to_screen(x, 0, cell_size) + origin;
        let bottom = vm.viewport.cell_to_screen(x, height, cell_size) + origin;
        painter.line_segment([top, bottom], stroke);
    }
    for y in 0..=height {
        let left = vm.viewport.cell_to_screen(0, y, cell_size) + origin;
        let right = vm.viewport.cell_to_screen(width, y, cell_size) + origin;
        painter.line_segment([left, right], stroke);
    }
}

fn draw_clues(painter: &Painter, vm: &CanvasViewModel<'_>, origin: Vec2, palette: &CanvasPalette) {
    let metrics = ClueMetrics::new(&vm.viewport, vm.display);
    let font = FontId::monospace(metrics.font_size);
    let rows = clue_layout::row_clue_labels(&vm.clues, &vm.viewport, vm.display);
    let columns = clue_layout::column_clue_labels(&vm.clues, &vm.viewport, vm.display);
    for ClueLabel { text, pos, align } in rows.into_iter().chain(columns) {
        painter.text(pos + origin, align, text, font.clone(), palette.clue_text);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Vec2;
    use nonopaint_core::CellGrid;

    use super::CanvasViewModel;
    use crate::{state::DisplaySettings, viewport::Viewport};

    #[test]
    fn visible_cells_are_clipped_to_canvas_and_grid() {
        let grid = CellGrid::new(20, 20);
        let display = DisplaySettings::default();
        let viewport = Viewport::new(Vec2::new(-100.0, 16.0), 1.0);
        let vm = CanvasViewModel::new(&grid, viewport, &display, false, false, true);

        let (xs, ys) = vm.visible_cells(Vec2::new(300.0, 2000.0));

        assert_eq!(xs, 1..7);
        assert_eq!(ys, 0..20);
    }

    #[test]
    fn degenerate_cell_size_does_not_overflow() {
        let grid = CellGrid::new(8, 8);
        let display = DisplaySettings {
            cell_size: 0.0,
            ..DisplaySettings::default()
        };
        let vm = CanvasViewModel::new(&grid, Viewport::default(), &display, false, false, true);

        let (xs, ys) = vm.visible_cells(Vec2::new(800.0, 600.0));

        assert!(xs.end <= 8);
        assert!(ys.end <= 8);
    }

    #[test]
    fn grid_outside_canvas_has_no_visible_cells() {
        let grid = CellGrid::new(4, 4);
        let display = DisplaySettings::default();
        let viewport = Viewport::new(Vec2::new(1000.0, 0.0), 1.0);
        let vm = CanvasViewModel::new(&grid, viewport, &display, false, false, true);

        let (xs, _) = vm.visible_cells(Vec2::new(500.0, 500.0));

        assert!(xs.is_empty());
    }
}
