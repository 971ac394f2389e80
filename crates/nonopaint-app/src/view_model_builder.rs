use crate::{
    state::{AppState, UiState},
    ui::{
        canvas::CanvasViewModel, control_panel::ControlPanelViewModel, toolbar::ToolbarViewModel,
    },
};

#[must_use]
pub(crate) fn build_toolbar_vm(app_state: &AppState, ui_state: &UiState) -> ToolbarViewModel {
    ToolbarViewModel::new(
        ui_state.can_undo(),
        ui_state.can_redo(),
        app_state.settings.hide_answer,
        ui_state.control_panel_open,
        app_state.viewport.zoom(),
    )
}

#[must_use]
pub(crate) fn build_control_panel_vm<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
) -> ControlPanelViewModel<'a> {
    ControlPanelViewModel::new(
        &app_state.settings,
        &ui_state.export_text,
        &ui_state.import_text,
    )
}

#[must_use]
pub(crate) fn build_canvas_vm<'a>(
    app_state: &'a AppState,
    ui_state: &UiState,
) -> CanvasViewModel<'a> {
    CanvasViewModel::new(
        &app_state.grid,
        app_state.viewport,
        &app_state.settings.display,
        app_state.settings.hide_answer,
        ui_state.center_requested,
        ui_state.active_modal.is_none(),
    )
}
