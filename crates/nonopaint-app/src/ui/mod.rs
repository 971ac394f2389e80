use eframe::egui::Context;

use crate::action::{ActionRequestQueue, ModalRequest};

pub(crate) mod canvas;
pub(crate) mod clue_layout;
pub(crate) mod control_panel;
pub(crate) mod dialogs;
pub(crate) mod input;
pub(crate) mod palette;
pub(crate) mod toolbar;

pub(crate) fn show_modal(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: ModalRequest,
) {
    match modal_request {
        ModalRequest::Notice(kind) => dialogs::show_notice(ctx, action_queue, kind),
    }
}
