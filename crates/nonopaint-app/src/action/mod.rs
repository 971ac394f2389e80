use std::mem;

use eframe::egui::{Pos2, Vec2};

use crate::{state::Settings, viewport::ZoomDirection};

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Pointer(PointerAction),
    Grid(GridAction),
    View(ViewAction),
    History(HistoryAction),
    Share(ShareAction),
    Settings(SettingsAction),
    Ui(UiAction),
}

/// Pointer events on the canvas, in canvas-relative coordinates.
#[derive(Debug)]
pub(crate) enum PointerAction {
    PressPrimary(Pos2),
    PressSecondary(Pos2),
    Move(Pos2),
    Release,
    Zoom {
        anchor: Pos2,
        direction: ZoomDirection,
    },
}

#[derive(Debug)]
pub(crate) enum GridAction {
    ClearAll,
}

#[derive(Debug)]
pub(crate) enum ViewAction {
    /// Recenter on the next canvas frame and reset the zoom.
    ResetPosition,
    Center { canvas_size: Vec2 },
}

#[derive(Debug)]
pub(crate) enum HistoryAction {
    Undo,
    Redo,
    /// Records the current grid, closing an edit made over several frames.
    Commit,
}

#[derive(Debug)]
pub(crate) enum ShareAction {
    Export,
    EditImportText(String),
    Import,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
    ToggleHideAnswer,
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    ToggleControlPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalRequest {
    Notice(NoticeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    InvalidInput,
    TooLargeToShare,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Pos2;

    use super::{Action, ActionRequestQueue, GridAction, PointerAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(PointerAction::PressPrimary(Pos2::new(1.0, 2.0)).into());
        queue.request(GridAction::ClearAll.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::Pointer(PointerAction::PressPrimary(_))
        ));
        assert!(matches!(drained[1], Action::Grid(GridAction::ClearAll)));

        assert!(queue.take_all().is_empty());
    }
}
