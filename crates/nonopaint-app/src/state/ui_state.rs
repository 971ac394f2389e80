use std::num::NonZero;

use crate::{
    action::ModalRequest,
    state::{AppState, Gesture, History},
};

// UiState holds ephemeral UI-only state (gesture, history, modals, share text). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) gesture: Gesture,
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) control_panel_open: bool,
    pub(crate) export_text: String,
    pub(crate) import_text: String,
    /// The canvas recenters the grid on its next frame.
    pub(crate) center_requested: bool,
    history: History,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(max_history_length: NonZero<usize>, app_state: &AppState) -> Self {
        Self {
            gesture: Gesture::Idle,
            active_modal: None,
            control_panel_open: true,
            export_text: String::new(),
            import_text: String::new(),
            center_requested: false,
            history: History::new(max_history_length, &app_state.grid),
        }
    }

    pub(crate) fn push_history(&mut self, app_state: &AppState) {
        self.history.push(&app_state.grid);
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub(crate) fn undo(&mut self, app_state: &mut AppState) -> bool {
        let undone = self.history.undo(&mut app_state.grid);
        if undone {
            app_state.sync_puzzle_size();
        }
        undone
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub(crate) fn redo(&mut self, app_state: &mut AppState) -> bool {
        let redone = self.history.redo(&mut app_state.grid);
        if redone {
            app_state.sync_puzzle_size();
        }
        redone
    }
}
