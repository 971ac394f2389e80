use eframe::egui::{Context, Id, Modal, Sides};

use crate::action::{ActionRequestQueue, NoticeKind, UiAction};

impl NoticeKind {
    fn title(self) -> &'static str {
        match self {
            NoticeKind::InvalidInput => "Invalid Input",
            NoticeKind::TooLargeToShare => "Puzzle Too Large",
        }
    }

    fn message(self) -> &'static str {
        match self {
            NoticeKind::InvalidInput => {
                "The import text is not a valid puzzle. The current puzzle was left unchanged."
            }
            NoticeKind::TooLargeToShare => {
                "Share text supports at most 255 cells per side. Shrink the puzzle to export it."
            }
        }
    }
}

pub(crate) fn show_notice(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: NoticeKind) {
    let modal = Modal::new(Id::new("notice")).show(ctx, |ui| {
        ui.heading(kind.title());
        ui.add_space(4.0);
        ui.label(kind.message());
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let ok = ui.button("OK");
                if ui.memory(|memory| memory.focused().is_none()) {
                    ok.request_focus();
                }
                if ok.clicked() {
                    ui.close();
                }
            },
        );
    });
    if modal.should_close() {
        action_queue.request(UiAction::CloseModal.into());
    }
}
