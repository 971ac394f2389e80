use std::mem;

use eframe::egui::Pos2;
use nonopaint_core::{PaintStroke, codec};

use crate::{
    action::{
        Action, ActionRequestQueue, GridAction, HistoryAction, ModalRequest, NoticeKind,
        PointerAction, SettingsAction, ShareAction, UiAction, ViewAction,
    },
    state::{AppState, AppStateAccess, Gesture, Settings, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::Pointer(action) => ctx.handle_pointer(action),
        Action::Grid(GridAction::ClearAll) => {
            ctx.app_state.as_mut().grid.clear();
            ctx.record_history();
        }
        Action::View(ViewAction::ResetPosition) => {
            ctx.app_state.as_mut().viewport.reset_zoom();
            ctx.ui_state.center_requested = true;
        }
        Action::View(ViewAction::Center { canvas_size }) => {
            ctx.app_state.as_mut().center_grid(canvas_size);
            ctx.ui_state.center_requested = false;
        }
        Action::History(HistoryAction::Undo) => {
            ctx.ui_state.gesture = Gesture::Idle;
            ctx.ui_state.undo(ctx.app_state.as_mut());
        }
        Action::History(HistoryAction::Redo) => {
            ctx.ui_state.gesture = Gesture::Idle;
            ctx.ui_state.redo(ctx.app_state.as_mut());
        }
        Action::History(HistoryAction::Commit) => ctx.record_history(),
        Action::Share(action) => ctx.handle_share(action),
        Action::Settings(SettingsAction::UpdateSettings(settings)) => {
            ctx.update_settings(settings);
        }
        Action::Settings(SettingsAction::ToggleHideAnswer) => {
            let settings = &mut ctx.app_state.as_mut().settings;
            settings.hide_answer = !settings.hide_answer;
        }
        Action::Ui(UiAction::OpenModal(modal_request)) => {
            ctx.ui_state.gesture = Gesture::Idle;
            ctx.ui_state.active_modal = Some(modal_request);
        }
        Action::Ui(UiAction::CloseModal) => {
            ctx.ui_state.active_modal = None;
        }
        Action::Ui(UiAction::ToggleControlPanel) => {
            ctx.ui_state.control_panel_open = !ctx.ui_state.control_panel_open;
        }
    }
}

impl ActionContext<'_> {
    fn record_history(&mut self) {
        self.ui_state.push_history(self.app_state.as_ref());
    }

    fn handle_pointer(&mut self, action: PointerAction) {
        match action {
            PointerAction::PressPrimary(pos) => {
                if self.ui_state.gesture.is_idle() {
                    let stroke = PaintStroke::new(&self.app_state.as_ref().grid);
                    self.ui_state.gesture = Gesture::Drawing(stroke);
                    self.paint_at(pos);
                }
            }
            PointerAction::PressSecondary(pos) => {
                if self.ui_state.gesture.is_idle() {
                    self.ui_state.gesture = Gesture::Dragging { last: pos };
                }
            }
            PointerAction::Move(pos) => {
                if self.ui_state.gesture.is_drawing() {
                    self.paint_at(pos);
                } else if let Gesture::Dragging { last } = &mut self.ui_state.gesture {
                    let delta = pos - *last;
                    *last = pos;
                    self.app_state.as_mut().viewport.pan(delta);
                }
            }
            PointerAction::Release => {
                if let Gesture::Drawing(stroke) = mem::take(&mut self.ui_state.gesture)
                    && stroke.painted_count() > 0
                {
                    self.record_history();
                }
            }
            PointerAction::Zoom { anchor, direction } => {
                let app_state = self.app_state.as_mut();
                let zoom_speed = app_state.settings.display.zoom_speed;
                app_state.viewport.zoom_at(anchor, direction, zoom_speed);
            }
        }
    }

    fn paint_at(&mut self, pos: Pos2) {
        let Gesture::Drawing(stroke) = &mut self.ui_state.gesture else {
            return;
        };
        let app_state = self.app_state.as_ref();
        let cell = app_state
            .viewport
            .screen_to_cell(pos, app_state.settings.display.cell_size);
        if let Some((x, y)) = cell.to_grid(&app_state.grid) {
            stroke.paint(&mut self.app_state.as_mut().grid, x, y);
        }
    }

    fn handle_share(&mut self, action: ShareAction) {
        match action {
            ShareAction::Export => match codec::encode_grid(&self.app_state.as_ref().grid) {
                Ok(text) => self.ui_state.export_text = text,
                Err(err) => {
                    log::warn!("cannot export puzzle: {err}");
                    self.ui_state.export_text.clear();
                    self.open_notice(NoticeKind::TooLargeToShare);
                }
            },
            ShareAction::EditImportText(text) => self.ui_state.import_text = text,
            ShareAction::Import => match codec::decode_grid(&self.ui_state.import_text) {
                Ok(grid) => {
                    log::debug!("imported {}x{} puzzle", grid.width(), grid.height());
                    self.ui_state.gesture = Gesture::Idle;
                    self.app_state.as_mut().replace_grid(grid);
                    self.record_history();
                }
                Err(err) => {
                    log::warn!("failed to import puzzle: {err}");
                    self.open_notice(NoticeKind::InvalidInput);
                }
            },
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        let app_state = self.app_state.as_mut();
        let resized = app_state.settings.puzzle != settings.puzzle;
        app_state.settings = settings;
        if resized {
            app_state.apply_puzzle_size();
        }
    }

    fn open_notice(&mut self, kind: NoticeKind) {
        self.ui_state.gesture = Gesture::Idle;
        self.ui_state.active_modal = Some(ModalRequest::Notice(kind));
    }
}
