use eframe::egui::{Align, Button, Layout, Ui};

use crate::action::{ActionRequestQueue, HistoryAction, SettingsAction, UiAction, ViewAction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ToolbarViewModel {
    can_undo: bool,
    can_redo: bool,
    hide_answer: bool,
    control_panel_open: bool,
    zoom: f32,
}

impl ToolbarViewModel {
    #[must_use]
    pub(crate) fn new(
        can_undo: bool,
        can_redo: bool,
        hide_answer: bool,
        control_panel_open: bool,
        zoom: f32,
    ) -> Self {
        Self {
            can_undo,
            can_redo,
            hide_answer,
            control_panel_open,
            zoom,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ToolbarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(vm.control_panel_open, "Controls")
            .clicked()
        {
            action_queue.request(UiAction::ToggleControlPanel.into());
        }
        ui.separator();

        if ui
            .add_enabled(vm.can_undo, Button::new("Undo"))
            .on_hover_text("Ctrl+Z")
            .clicked()
        {
            action_queue.request(HistoryAction::Undo.into());
        }
        if ui
            .add_enabled(vm.can_redo, Button::new("Redo"))
            .on_hover_text("Ctrl+Y")
            .clicked()
        {
            action_queue.request(HistoryAction::Redo.into());
        }
        ui.separator();

        if ui.button("Reset position").on_hover_text("Home").clicked() {
            action_queue.request(ViewAction::ResetPosition.into());
        }
        if ui
            .selectable_label(vm.hide_answer, "Hide answer")
            .on_hover_text("H")
            .clicked()
        {
            action_queue.request(SettingsAction::ToggleHideAnswer.into());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(format!("{:.0}%", vm.zoom * 100.0));
        });
    });
}
