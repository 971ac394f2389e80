use eframe::egui::Pos2;
use nonopaint_core::PaintStroke;

/// The pointer gesture in progress on the canvas.
///
/// At most one gesture runs at a time. A press while another gesture is active
/// is ignored.
#[derive(Debug, Clone, Default, derive_more::IsVariant)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    /// Primary button held: painting cells.
    Drawing(PaintStroke),
    /// Secondary button held: panning the view.
    Dragging { last: Pos2 },
}
