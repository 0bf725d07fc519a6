//! Canvas adapter over the egui painter.

use eframe::egui::{self, Color32, Pos2, Stroke};

use xo_view::{Canvas, Paint, Point, Rgb};

/// Translates the view's draw calls to an [`egui::Painter`].
///
/// The view draws in view-local coordinates; `origin` is where the view's
/// top-left corner sits in screen space.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(self.origin.x + point.x, self.origin.y + point.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke(paint));
    }

    fn circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, stroke(paint));
    }
}

fn stroke(paint: &Paint) -> Stroke {
    Stroke::new(paint.stroke_width, color32(paint.color))
}

/// Convert the view's color type to egui's.
pub fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
