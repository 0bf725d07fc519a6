// SPDX-License-Identifier: MIT OR Apache-2.0

//! The board view: size negotiation, layout, drawing and pointer handling.

use std::cell::RefCell;
use std::rc::Rc;

use xo_core::{Cell, FieldListener, GameField};

use crate::canvas::{Canvas, Paint};
use crate::geometry::{Insets, Point, Rect, Size};
use crate::style::ViewStyle;

/// Fraction of the cell size left blank around a mark.
const CELL_PADDING_RATIO: f32 = 0.2;

/// Shared handle to the field a view observes.
pub type SharedField = Rc<RefCell<GameField>>;

/// Callback fired when a completed tap resolves to a cell position.
///
/// Receives the hit row and column (unclamped, so positions outside the
/// field pass through) and the field the view is bound to. The view never
/// mutates the field itself.
pub type ActionListener = Box<dyn FnMut(i32, i32, &SharedField)>;

/// Size constraint imposed by the host layout pass on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The view must take exactly this size.
    Exactly(f32),
    /// The view may take any size up to this limit.
    AtMost(f32),
    /// The view may take any size it wants.
    Unspecified,
}

impl MeasureSpec {
    fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(limit) => desired.min(limit),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Pointer input delivered by the host, in view-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button or touch went down.
    Press(Point),
    /// Primary button or touch was released.
    Release(Point),
}

/// Grid geometry derived from the field dimensions and the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Bounding rectangle of the grid, centered in the content area.
    pub rect: Rect,
    /// Edge length of one square cell.
    pub cell_size: f32,
    /// Inset between a cell border and the mark inside it.
    pub cell_padding: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Idle,
    Pressed,
}

/// Redraw flag shared between the view and its field listener.
#[derive(Debug, Clone, Default)]
struct InvalidateFlag(Rc<std::cell::Cell<bool>>);

impl InvalidateFlag {
    fn set(&self) {
        self.0.set(true);
    }

    fn take(&self) -> bool {
        self.0.replace(false)
    }

    fn get(&self) -> bool {
        self.0.get()
    }
}

/// A view rendering a [`GameField`] as a grid of crosses and circles.
///
/// The view observes the bound field for redraws and resolves completed
/// press/release gestures into cell positions for its action listener. All
/// game decisions stay with the host: the view reports where a tap landed
/// and draws whatever the field holds.
pub struct GameView {
    style: ViewStyle,
    min_size: Size,
    viewport: Size,
    insets: Insets,
    field: Option<SharedField>,
    layout: Option<GridLayout>,
    gesture: Gesture,
    action: Option<ActionListener>,
    invalidated: InvalidateFlag,
    redraw_listener: FieldListener,
}

impl GameView {
    /// Create a view with the given style and no bound field.
    pub fn new(style: ViewStyle) -> Self {
        let invalidated = InvalidateFlag::default();
        let flag = invalidated.clone();
        let redraw_listener: FieldListener = Rc::new(move |_field: &GameField| {
            flag.set();
        });
        Self {
            style,
            min_size: Size::default(),
            viewport: Size::default(),
            insets: Insets::default(),
            field: None,
            layout: None,
            gesture: Gesture::Idle,
            action: None,
            invalidated,
            redraw_listener,
        }
    }

    /// Bind the view to a field, or unbind with `None`.
    ///
    /// The view deregisters its redraw listener from the previous field,
    /// registers on the new one and recomputes the layout. An unbound view
    /// draws nothing and delivers no taps.
    pub fn bind_field(&mut self, field: Option<SharedField>) {
        if let Some(old) = &self.field {
            old.borrow_mut().remove_listener(&self.redraw_listener);
        }
        self.field = field;
        if let Some(new) = &self.field {
            let mut field = new.borrow_mut();
            field.add_listener(&self.redraw_listener);
            tracing::debug!(rows = field.rows(), columns = field.columns(), "field bound");
        }
        self.recompute_layout();
        self.invalidated.set();
    }

    /// The field this view is bound to.
    pub fn field(&self) -> Option<&SharedField> {
        self.field.as_ref()
    }

    /// The style the view draws with.
    pub fn style(&self) -> &ViewStyle {
        &self.style
    }

    /// Install the callback fired on completed taps.
    pub fn set_action_listener(&mut self, listener: impl FnMut(i32, i32, &SharedField) + 'static) {
        self.action = Some(Box::new(listener));
    }

    /// Remove the action callback.
    pub fn clear_action_listener(&mut self) {
        self.action = None;
    }

    /// Negotiate the view's size for one layout pass.
    ///
    /// The desired size fits `desired_cell_size` per cell plus insets, never
    /// below the minimum size, and is then resolved against the specs.
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let (rows, columns) = match &self.field {
            Some(field) => {
                let field = field.borrow();
                (field.rows() as f32, field.columns() as f32)
            }
            None => (0.0, 0.0),
        };
        let desired_width = (columns * self.style.desired_cell_size + self.insets.horizontal())
            .max(self.min_size.width);
        let desired_height = (rows * self.style.desired_cell_size + self.insets.vertical())
            .max(self.min_size.height);
        Size::new(
            width_spec.resolve(desired_width),
            height_spec.resolve(desired_height),
        )
    }

    /// Update the viewport size, e.g. after the host resized the view.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.recompute_layout();
            self.invalidated.set();
        }
    }

    /// Update the insets reserved around the grid.
    pub fn set_insets(&mut self, insets: Insets) {
        if self.insets != insets {
            self.insets = insets;
            self.recompute_layout();
            self.invalidated.set();
        }
    }

    /// Update the minimum size honored by [`measure`](Self::measure).
    pub fn set_min_size(&mut self, min_size: Size) {
        self.min_size = min_size;
    }

    /// Current grid geometry, if a field is bound and the viewport is usable.
    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    /// Whether a press gesture is in progress.
    pub fn is_pressed(&self) -> bool {
        self.gesture == Gesture::Pressed
    }

    /// Re-register the redraw listener, after the view returns to a window.
    pub fn attach(&mut self) {
        if let Some(field) = &self.field {
            field.borrow_mut().add_listener(&self.redraw_listener);
        }
    }

    /// Deregister this view's own redraw listener.
    ///
    /// Other listeners of the field are left alone, so several views can
    /// share one field across lifecycle changes.
    pub fn detach(&mut self) {
        if let Some(field) = &self.field {
            field.borrow_mut().remove_listener(&self.redraw_listener);
        }
    }

    /// Clear and return the pending-redraw flag.
    pub fn take_invalidated(&mut self) -> bool {
        self.invalidated.take()
    }

    /// Whether a redraw is pending.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated.get()
    }

    /// Feed one pointer event; returns `true` when the view consumed it.
    ///
    /// A press arms the gesture and the matching release resolves the tap;
    /// events outside that sequence are ignored. The action listener fires
    /// on release only.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match (self.gesture, event) {
            (Gesture::Idle, PointerEvent::Press(_)) => {
                self.gesture = Gesture::Pressed;
                true
            }
            (Gesture::Pressed, PointerEvent::Release(point)) => {
                self.gesture = Gesture::Idle;
                self.deliver_tap(point);
                true
            }
            _ => false,
        }
    }

    /// Draw the grid and the marks through `canvas`.
    ///
    /// Draws nothing while no field is bound or the layout is degenerate.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let (layout, field) = match (self.layout, &self.field) {
            (Some(layout), Some(field)) => (layout, field),
            _ => return,
        };
        if layout.cell_size <= 0.0 || layout.rect.is_empty() {
            return;
        }
        let field = field.borrow();
        self.draw_grid(canvas, &layout, &field);
        self.draw_current_cell(canvas, &layout);
        self.draw_marks(canvas, &layout, &field);
    }

    fn recompute_layout(&mut self) {
        self.layout = self.compute_layout();
    }

    fn compute_layout(&self) -> Option<GridLayout> {
        let field = self.field.as_ref()?;
        let (rows, columns) = {
            let field = field.borrow();
            (field.rows() as f32, field.columns() as f32)
        };
        let content_width = self.viewport.width - self.insets.horizontal();
        let content_height = self.viewport.height - self.insets.vertical();
        if content_width <= 0.0 || content_height <= 0.0 {
            return None;
        }

        let cell_size = (content_width / columns).min(content_height / rows);
        if cell_size <= 0.0 {
            return None;
        }
        let grid_width = cell_size * columns;
        let grid_height = cell_size * rows;
        let left = self.insets.left + (content_width - grid_width) / 2.0;
        let top = self.insets.top + (content_height - grid_height) / 2.0;

        Some(GridLayout {
            rect: Rect::new(left, top, left + grid_width, top + grid_height),
            cell_size,
            cell_padding: cell_size * CELL_PADDING_RATIO,
        })
    }

    fn deliver_tap(&mut self, point: Point) {
        let layout = match self.layout {
            Some(layout) => layout,
            None => return,
        };
        let field = match &self.field {
            Some(field) => field,
            None => return,
        };
        let row = ((point.y - layout.rect.top) / layout.cell_size).floor() as i32;
        let column = ((point.x - layout.rect.left) / layout.cell_size).floor() as i32;
        tracing::debug!(row, column, x = point.x, y = point.y, "tap resolved");

        if let Some(action) = &mut self.action {
            action(row, column, field);
        }
    }

    fn draw_grid(&self, canvas: &mut dyn Canvas, layout: &GridLayout, field: &GameField) {
        let paint = Paint::new(self.style.grid_color, self.style.grid_stroke_width);
        let rect = layout.rect;

        for row in 0..=field.rows() {
            let y = rect.top + layout.cell_size * row as f32;
            canvas.line(Point::new(rect.left, y), Point::new(rect.right, y), &paint);
        }
        for column in 0..=field.columns() {
            let x = rect.left + layout.cell_size * column as f32;
            canvas.line(Point::new(x, rect.top), Point::new(x, rect.bottom), &paint);
        }
    }

    /// Highlight layer drawn between the grid and the marks.
    ///
    /// Currently empty.
    // TODO: fill the pressed cell with a subtle highlight; the gesture state
    // is already tracked.
    fn draw_current_cell(&self, _canvas: &mut dyn Canvas, _layout: &GridLayout) {}

    fn draw_marks(&self, canvas: &mut dyn Canvas, layout: &GridLayout, field: &GameField) {
        for row in 0..field.rows() {
            for column in 0..field.columns() {
                match field.get_cell(row as i32, column as i32) {
                    Cell::FirstPlayer => self.draw_cross(canvas, layout, row, column),
                    Cell::SecondPlayer => self.draw_circle(canvas, layout, row, column),
                    Cell::Empty => {}
                }
            }
        }
    }

    fn draw_cross(&self, canvas: &mut dyn Canvas, layout: &GridLayout, row: usize, column: usize) {
        let paint = Paint::new(self.style.first_player_color, self.style.mark_stroke_width);
        let rect = cell_rect(layout, row, column);
        let pad = layout.cell_padding;

        canvas.line(
            Point::new(rect.left + pad, rect.top + pad),
            Point::new(rect.right - pad, rect.bottom - pad),
            &paint,
        );
        canvas.line(
            Point::new(rect.right - pad, rect.top + pad),
            Point::new(rect.left + pad, rect.bottom - pad),
            &paint,
        );
    }

    fn draw_circle(&self, canvas: &mut dyn Canvas, layout: &GridLayout, row: usize, column: usize) {
        let paint = Paint::new(self.style.second_player_color, self.style.mark_stroke_width);
        let rect = cell_rect(layout, row, column);
        let center = Point::new(
            (rect.left + rect.right) / 2.0,
            (rect.top + rect.bottom) / 2.0,
        );
        let radius = (layout.cell_size - layout.cell_padding) / 2.0;
        canvas.circle(center, radius, &paint);
    }
}

fn cell_rect(layout: &GridLayout, row: usize, column: usize) -> Rect {
    let left = layout.rect.left + layout.cell_size * column as f32;
    let top = layout.rect.top + layout.cell_size * row as f32;
    Rect::new(left, top, left + layout.cell_size, top + layout.cell_size)
}
