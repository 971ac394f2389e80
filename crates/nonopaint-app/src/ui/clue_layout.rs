//! Placement of clue numbers around the grid, in canvas coordinates.
//!
//! Row clues sit left of the grid as one right-aligned label per row. Column
//! clues sit above the grid with one label per run, stacked upwards so the
//! last run of each column is nearest the grid.

use eframe::egui::{Align2, Pos2, Vec2};
use nonopaint_core::GridClues;

use crate::{state::DisplaySettings, viewport::Viewport};

/// Vertical distance between stacked column clue numbers, in font heights.
const COLUMN_LINE_SPACING: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClueLabel {
    pub(crate) text: String,
    pub(crate) pos: Pos2,
    pub(crate) align: Align2,
}

/// Font size and padding after applying the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ClueMetrics {
    pub(crate) font_size: f32,
    pub(crate) padding: f32,
    pub(crate) cell_side: f32,
}

impl ClueMetrics {
    #[must_use]
    pub(crate) fn new(viewport: &Viewport, display: &DisplaySettings) -> Self {
        let zoom = viewport.zoom();
        Self {
            font_size: display.font_size * zoom,
            padding: display.text_padding * zoom,
            cell_side: viewport.cell_screen_size(display.cell_size),
        }
    }
}

#[must_use]
pub(crate) fn row_clue_labels(
    clues: &GridClues,
    viewport: &Viewport,
    display: &DisplaySettings,
) -> Vec<ClueLabel> {
    let metrics = ClueMetrics::new(viewport, display);
    clues
        .rows
        .iter()
        .enumerate()
        .map(|(y, clue)| {
            let row_top = viewport.cell_to_screen(0, y, display.cell_size);
            ClueLabel {
                text: clue.to_string(),
                pos: row_top + Vec2::new(-metrics.padding, metrics.font_size / 2.0),
                align: Align2::RIGHT_TOP,
            }
        })
        .collect()
}

#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn column_clue_labels(
    clues: &GridClues,
    viewport: &Viewport,
    display: &DisplaySettings,
) -> Vec<ClueLabel> {
    let metrics = ClueMetrics::new(viewport, display);
    let line_height = metrics.font_size * COLUMN_LINE_SPACING;
    clues
        .columns
        .iter()
        .enumerate()
        .flat_map(|(x, clue)| {
            let column_top = viewport.cell_to_screen(x, 0, display.cell_size);
            let anchor = column_top + Vec2::new(metrics.cell_side / 2.0, -metrics.padding);
            clue.runs()
                .iter()
                .rev()
                .enumerate()
                .map(move |(i, run)| ClueLabel {
                    text: run.to_string(),
                    pos: anchor - Vec2::new(0.0, i as f32 * line_height),
                    align: Align2::LEFT_BOTTOM,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Align2, Pos2, Vec2};
    use nonopaint_core::{CellGrid, GridClues};

    use super::{column_clue_labels, row_clue_labels};
    use crate::{state::DisplaySettings, viewport::Viewport};

    fn sample_clues() -> GridClues {
        let grid: CellGrid = "##.\n.#.".parse().unwrap();
        GridClues::new(&grid)
    }

    #[test]
    fn row_labels_are_right_aligned_left_of_grid() {
        let display = DisplaySettings::default();
        let viewport = Viewport::new(Vec2::new(100.0, 50.0), 1.0);

        let labels = row_clue_labels(&sample_clues(), &viewport, &display);

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "2");
        assert_eq!(labels[0].pos, Pos2::new(84.0, 66.0));
        assert_eq!(labels[1].text, "1");
        assert_eq!(labels[1].pos, Pos2::new(84.0, 130.0));
        assert!(labels.iter().all(|l| l.align == Align2::RIGHT_TOP));
    }

    #[test]
    fn row_label_joins_runs_with_spaces() {
        let grid: CellGrid = "#.##.#".parse().unwrap();
        let labels = row_clue_labels(
            &GridClues::new(&grid),
            &Viewport::default(),
            &DisplaySettings::default(),
        );
        assert_eq!(labels[0].text, "1 2 1");
    }

    #[test]
    fn column_labels_stack_last_run_nearest_grid() {
        let grid: CellGrid = "#\n.\n#\n#".parse().unwrap();
        let display = DisplaySettings::default();
        let viewport = Viewport::new(Vec2::new(0.0, 200.0), 1.0);

        let labels = column_clue_labels(&GridClues::new(&grid), &viewport, &display);

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "2");
        assert_eq!(labels[0].pos, Pos2::new(32.0, 184.0));
        assert_eq!(labels[1].text, "1");
        assert_eq!(labels[1].pos, Pos2::new(32.0, 120.0));
    }

    #[test]
    fn blank_column_shows_zero() {
        let labels = column_clue_labels(
            &sample_clues(),
            &Viewport::default(),
            &DisplaySettings::default(),
        );
        let texts: Vec<_> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["1", "2", "0"]);
    }

    #[test]
    fn metrics_scale_with_zoom() {
        let display = DisplaySettings::default();
        let viewport = Viewport::new(Vec2::ZERO, 0.5);

        let labels = row_clue_labels(&sample_clues(), &viewport, &display);

        // padding 16 * 0.5, font 32 * 0.5 / 2, second row at 64 * 0.5.
        assert_eq!(labels[1].pos, Pos2::new(-8.0, 40.0));
    }
}
