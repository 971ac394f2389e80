use eframe::egui::Color32;

use crate::state::{DisplaySettings, Rgb};

impl From<Rgb> for Color32 {
    fn from(Rgb([r, g, b]): Rgb) -> Self {
        Color32::from_rgb(r, g, b)
    }
}

/// Colors for painting the canvas, resolved from the display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanvasPalette {
    pub(crate) background: Color32,
    pub(crate) line: Color32,
    pub(crate) clue_text: Color32,
    pub(crate) filled: Color32,
    pub(crate) empty: Color32,
}

impl CanvasPalette {
    #[must_use]
    pub(crate) fn new(display: &DisplaySettings) -> Self {
        let line = display.line_color.into();
        Self {
            background: display.background_color.into(),
            line,
            clue_text: line,
            filled: display.filled_color.into(),
            empty: display.empty_color.into(),
        }
    }

    /// Color for a cell; with the answer hidden every cell looks empty.
    #[must_use]
    pub(crate) fn cell(&self, filled: bool, hide_answer: bool) -> Color32 {
        if filled && !hide_answer {
            self.filled
        } else {
            self.empty
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;

    use super::CanvasPalette;
    use crate::state::DisplaySettings;

    #[test]
    fn hidden_answer_paints_cells_empty() {
        let palette = CanvasPalette::new(&DisplaySettings::default());
        assert_eq!(palette.cell(true, false), Color32::BLACK);
        assert_eq!(palette.cell(true, true), Color32::WHITE);
        assert_eq!(palette.cell(false, false), Color32::WHITE);
        assert_eq!(palette.clue_text, Color32::from_gray(0x88));
    }
}
