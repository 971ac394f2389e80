//! Nonopaint application shell.
//!
//! Each frame turns keyboard and pointer input into actions, applies them to
//! the state, then paints the toolbar, the control panel and the canvas.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{self, CentralPanel, Context, SidePanel, TopBottomPanel},
};

use crate::{
    DEFAULT_MAX_HISTORY_LENGTH,
    action::{self, ActionRequestQueue},
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct NonopaintApp {
    app_state: AppState,
    ui_state: UiState,
}

impl NonopaintApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let restored = cc.storage.and_then(storage::load_state);
        let fresh_start = restored.is_none();
        let app_state = restored.unwrap_or_default();
        let mut ui_state = UiState::new(DEFAULT_MAX_HISTORY_LENGTH, &app_state);
        ui_state.center_requested = fresh_start;
        Self {
            app_state,
            ui_state,
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for NonopaintApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() && !ctx.wants_keyboard_input() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let toolbar_vm = view_model_builder::build_toolbar_vm(&self.app_state, &self.ui_state);
        let control_panel_vm =
            view_model_builder::build_control_panel_vm(&self.app_state, &self.ui_state);
        let canvas_vm = view_model_builder::build_canvas_vm(&self.app_state, &self.ui_state);

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show(ui, &toolbar_vm, &mut action_queue);
        });

        SidePanel::right("control_panel")
            .resizable(true)
            .default_width(260.0)
            .show_animated(ctx, self.ui_state.control_panel_open, |ui| {
                ui::control_panel::show(ui, &control_panel_vm, &mut action_queue);
            });

        CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui::canvas::show(ui, &canvas_vm, &mut action_queue);
            });

        if let Some(modal_request) = self.ui_state.active_modal {
            ui::show_modal(ctx, &mut action_queue, modal_request);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
