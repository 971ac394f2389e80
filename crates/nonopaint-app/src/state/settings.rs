use std::ops::RangeInclusive;

use nonopaint_core::{CellGrid, codec::MAX_DIMENSION};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) puzzle: PuzzleSize,
    pub(crate) display: DisplaySettings,
    /// Paint every cell as empty while keeping the true clues.
    pub(crate) hide_answer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PuzzleSize {
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Default for PuzzleSize {
    fn default() -> Self {
        Self {
            width: CellGrid::DEFAULT_SIZE,
            height: CellGrid::DEFAULT_SIZE,
        }
    }
}

impl PuzzleSize {
    pub(crate) const RANGE: RangeInclusive<usize> = 1..=MAX_DIMENSION;

    #[must_use]
    pub(crate) fn of(grid: &CellGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Pulls both dimensions into the shareable range.
    #[must_use]
    pub(crate) fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(*Self::RANGE.start(), *Self::RANGE.end()),
            height: self.height.clamp(*Self::RANGE.start(), *Self::RANGE.end()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DisplaySettings {
    pub(crate) cell_size: f32,
    pub(crate) zoom_speed: f32,
    pub(crate) font_size: f32,
    pub(crate) text_padding: f32,
    pub(crate) line_thickness: f32,
    pub(crate) background_color: Rgb,
    pub(crate) line_color: Rgb,
    pub(crate) filled_color: Rgb,
    pub(crate) empty_color: Rgb,
}

impl DisplaySettings {
    pub(crate) const CELL_SIZE_RANGE: RangeInclusive<f32> = 4.0..=256.0;
    pub(crate) const ZOOM_SPEED_RANGE: RangeInclusive<f32> = 0.01..=2.0;
    pub(crate) const FONT_SIZE_RANGE: RangeInclusive<f32> = 4.0..=128.0;
    pub(crate) const TEXT_PADDING_RANGE: RangeInclusive<f32> = 0.0..=128.0;
    pub(crate) const LINE_THICKNESS_RANGE: RangeInclusive<f32> = 0.0..=16.0;

    /// Pulls every size into its editable range. Non-finite values fall back
    /// to the defaults.
    #[must_use]
    pub(crate) fn clamped(self) -> Self {
        let defaults = Self::default();
        let fit = |value: f32, range: RangeInclusive<f32>, default: f32| {
            if value.is_finite() {
                value.clamp(*range.start(), *range.end())
            } else {
                default
            }
        };
        Self {
            cell_size: fit(self.cell_size, Self::CELL_SIZE_RANGE, defaults.cell_size),
            zoom_speed: fit(self.zoom_speed, Self::ZOOM_SPEED_RANGE, defaults.zoom_speed),
            font_size: fit(self.font_size, Self::FONT_SIZE_RANGE, defaults.font_size),
            text_padding: fit(
                self.text_padding,
                Self::TEXT_PADDING_RANGE,
                defaults.text_padding,
            ),
            line_thickness: fit(
                self.line_thickness,
                Self::LINE_THICKNESS_RANGE,
                defaults.line_thickness,
            ),
            ..self
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cell_size: 64.0,
            zoom_speed: 0.2,
            font_size: 32.0,
            text_padding: 16.0,
            line_thickness: 2.0,
            background_color: Rgb([0x00, 0x00, 0x00]),
            line_color: Rgb([0x88, 0x88, 0x88]),
            filled_color: Rgb([0x00, 0x00, 0x00]),
            empty_color: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

/// An sRGB color stored as plain bytes so it serializes without UI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Rgb(pub(crate) [u8; 3]);

#[cfg(test)]
mod tests {
    use super::{DisplaySettings, PuzzleSize};

    #[test]
    fn clamped_pulls_size_into_shareable_range() {
        let size = PuzzleSize {
            width: 0,
            height: 1000,
        };
        assert_eq!(
            size.clamped(),
            PuzzleSize {
                width: 1,
                height: 255
            }
        );
    }

    #[test]
    fn clamped_display_settings_stay_drawable() {
        let display = DisplaySettings {
            cell_size: 0.0,
            zoom_speed: f32::NAN,
            font_size: -3.0,
            text_padding: f32::INFINITY,
            line_thickness: 100.0,
            ..DisplaySettings::default()
        }
        .clamped();

        assert!((display.cell_size - 4.0).abs() < f32::EPSILON);
        assert!((display.zoom_speed - 0.2).abs() < f32::EPSILON);
        assert!((display.font_size - 4.0).abs() < f32::EPSILON);
        assert!((display.text_padding - 16.0).abs() < f32::EPSILON);
        assert!((display.line_thickness - 16.0).abs() < f32::EPSILON);
        assert_eq!(
            DisplaySettings::default().clamped(),
            DisplaySettings::default()
        );
    }
}
