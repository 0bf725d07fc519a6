// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drawing abstraction the view renders through.

use crate::geometry::Point;
use crate::style::Rgb;

/// Stroke parameters for a single draw call.
///
/// Every element of the board is stroked; there are no filled shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub stroke_width: f32,
}

impl Paint {
    pub fn new(color: Rgb, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

/// Receiver for the view's draw primitives.
///
/// Implementations map these calls onto a concrete 2D backend; the view
/// itself stays backend-free. Coordinates are view-local.
pub trait Canvas {
    /// Stroke a line segment from `from` to `to`.
    fn line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Stroke a circle outline.
    fn circle(&mut self, center: Point, radius: f32, paint: &Paint);
}
