//! egui widget wrapping a [`GameView`].

use eframe::egui;

use xo_view::{GameView, MeasureSpec, Point, PointerEvent, Size};

use crate::painter::EguiCanvas;

/// Show the board view inside `ui`.
///
/// Measures the view against the available space, feeds it the allocated
/// viewport and the pointer press/release edges, paints it, and turns a
/// pending invalidation into a repaint request.
pub fn game_view(ui: &mut egui::Ui, view: &mut GameView) -> egui::Response {
    let available = ui.available_size();
    let desired = view.measure(
        MeasureSpec::AtMost(available.x),
        MeasureSpec::AtMost(available.y),
    );
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(desired.width, desired.height),
        egui::Sense::click_and_drag(),
    );
    view.set_viewport(Size::new(rect.width(), rect.height()));

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let mut canvas = EguiCanvas::new(&painter, rect.min);
        view.draw(&mut canvas);
    }

    // A release may land outside the widget after a drag, so fall back to
    // the latest pointer position when the interact position is gone.
    let pointer = response
        .interact_pointer_pos()
        .or_else(|| ui.ctx().pointer_latest_pos());
    if let Some(pos) = pointer {
        let local = Point::new(pos.x - rect.left(), pos.y - rect.top());
        let down = response.is_pointer_button_down_on();
        if down && !view.is_pressed() {
            view.handle_pointer(PointerEvent::Press(local));
        } else if !down && view.is_pressed() {
            view.handle_pointer(PointerEvent::Release(local));
        } else if response.clicked() && !view.is_pressed() {
            // Press and release arrived within a single frame.
            view.handle_pointer(PointerEvent::Press(local));
            view.handle_pointer(PointerEvent::Release(local));
        }
    }

    if view.take_invalidated() {
        ui.ctx().request_repaint();
    }

    response
}
