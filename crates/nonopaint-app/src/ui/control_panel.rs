use std::ops::RangeInclusive;

use eframe::egui::{Button, CollapsingHeader, DragValue, Grid, ScrollArea, TextEdit, Ui};

use crate::{
    action::{
        ActionRequestQueue, GridAction, HistoryAction, SettingsAction, ShareAction, ViewAction,
    },
    state::{DisplaySettings, PuzzleSize, Rgb, Settings},
};

#[derive(Debug, Clone)]
pub(crate) struct ControlPanelViewModel<'a> {
    settings: &'a Settings,
    export_text: &'a str,
    import_text: &'a str,
}

impl<'a> ControlPanelViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings, export_text: &'a str, import_text: &'a str) -> Self {
        Self {
            settings,
            export_text,
            import_text,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ControlPanelViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    let mut changed = false;
    let mut size_edit_finished = false;
    let mut settings = vm.settings.clone();

    ScrollArea::vertical().show(ui, |ui| {
        CollapsingHeader::new("Puzzle")
            .default_open(true)
            .show(ui, |ui| {
                let (size_changed, size_finished) = show_puzzle_size(ui, &mut settings.puzzle);
                changed |= size_changed;
                size_edit_finished = size_finished;
                ui.horizontal(|ui| {
                    if ui.button("Reset position").clicked() {
                        action_queue.request(ViewAction::ResetPosition.into());
                    }
                    if ui.button("Clear all").clicked() {
                        action_queue.request(GridAction::ClearAll.into());
                    }
                });
                changed |= ui
                    .checkbox(&mut settings.hide_answer, "Hide answer")
                    .changed();
            });

        CollapsingHeader::new("Share")
            .default_open(true)
            .show(ui, |ui| show_share(ui, vm, action_queue));

        CollapsingHeader::new("Appearance")
            .default_open(false)
            .show(ui, |ui| {
                changed |= show_display(ui, &mut settings.display);
            });
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
    if size_edit_finished {
        action_queue.request(HistoryAction::Commit.into());
    }
}

/// Returns whether the size changed this frame and whether the edit is
/// finished. A drag only finishes when the pointer is released.
fn show_puzzle_size(ui: &mut Ui, puzzle: &mut PuzzleSize) -> (bool, bool) {
    let mut changed = false;
    let mut finished = false;
    Grid::new("puzzle_size").num_columns(2).show(ui, |ui| {
        for (label, value) in [("Width", &mut puzzle.width), ("Height", &mut puzzle.height)] {
            ui.label(label);
            let response = ui.add(DragValue::new(value).range(PuzzleSize::RANGE));
            changed |= response.changed();
            finished |= response.drag_stopped()
                || response.lost_focus()
                || (response.changed() && !response.dragged());
            ui.end_row();
        }
    });
    (changed, finished)
}

fn show_share(ui: &mut Ui, vm: &ControlPanelViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        if ui.button("Export").clicked() {
            action_queue.request(ShareAction::Export.into());
        }
        let copy = ui.add_enabled(!vm.export_text.is_empty(), Button::new("Copy"));
        if copy.clicked() {
            ui.ctx().copy_text(vm.export_text.to_owned());
        }
    });
    let mut export_text = vm.export_text;
    ui.add(
        TextEdit::multiline(&mut export_text)
            .hint_text("Exported share text")
            .desired_rows(2),
    );

    let mut import_text = vm.import_text.to_owned();
    let edited = ui
        .add(
            TextEdit::multiline(&mut import_text)
                .hint_text("Paste share text to import")
                .desired_rows(2),
        )
        .changed();
    if edited {
        action_queue.request(ShareAction::EditImportText(import_text).into());
    }
    if ui.button("Import").clicked() {
        action_queue.request(ShareAction::Import.into());
    }
}

fn show_display(ui: &mut Ui, display: &mut DisplaySettings) -> bool {
    let DisplaySettings {
        cell_size,
        zoom_speed,
        font_size,
        text_padding,
        line_thickness,
        background_color,
        line_color,
        filled_color,
        empty_color,
    } = display;

    let mut changed = false;
    Grid::new("display_settings").num_columns(2).show(ui, |ui| {
        let mut number = |ui: &mut Ui,
                          label: &str,
                          value: &mut f32,
                          range: RangeInclusive<f32>,
                          speed: f64| {
            ui.label(label);
            changed |= ui
                .add(DragValue::new(value).range(range).speed(speed))
                .changed();
            ui.end_row();
        };
        number(ui, "Cell size", cell_size, DisplaySettings::CELL_SIZE_RANGE, 1.0);
        number(ui, "Font size", font_size, DisplaySettings::FONT_SIZE_RANGE, 0.5);
        number(
            ui,
            "Text padding",
            text_padding,
            DisplaySettings::TEXT_PADDING_RANGE,
            0.5,
        );
        number(
            ui,
            "Line thickness",
            line_thickness,
            DisplaySettings::LINE_THICKNESS_RANGE,
            0.1,
        );
        number(ui, "Zoom speed", zoom_speed, DisplaySettings::ZOOM_SPEED_RANGE, 0.01);

        let mut color = |ui: &mut Ui, label: &str, Rgb(rgb): &mut Rgb| {
            ui.label(label);
            changed |= ui.color_edit_button_srgb(rgb).changed();
            ui.end_row();
        };
        color(ui, "Background", background_color);
        color(ui, "Lines and clues", line_color);
        color(ui, "Filled cell", filled_color);
        color(ui, "Empty cell", empty_color);
    });
    changed
}
