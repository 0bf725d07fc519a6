// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and UI logic.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use xo_core::{Cell, FieldError, GameField};
use xo_view::{GameView, MeasureSpec, SharedField, ViewStyle};

use crate::widget;

/// Space reserved above the board for the status bar.
const STATUS_BAR_HEIGHT: f32 = 40.0;

/// Main application state.
///
/// Owns the field and the view and carries the one piece of game policy the
/// view stays unaware of: whose turn it is. The action listener installed
/// here places a mark when a tap lands on an empty in-bounds cell and flips
/// the turn only when a mark was actually placed.
pub struct App {
    /// Field the view is bound to
    field: SharedField,
    /// Board view rendering the field
    view: GameView,
    /// True while the first player (cross) is to move
    first_player_turn: Rc<std::cell::Cell<bool>>,
}

impl App {
    pub fn new(field: SharedField, style: ViewStyle) -> Self {
        let mut view = GameView::new(style);
        view.bind_field(Some(Rc::clone(&field)));

        let first_player_turn = Rc::new(std::cell::Cell::new(true));
        let turn = Rc::clone(&first_player_turn);
        view.set_action_listener(move |row, column, field| {
            let mut field = field.borrow_mut();
            if !field.in_bounds(row, column) {
                return;
            }
            if field.get_cell(row, column) != Cell::Empty {
                return;
            }
            let mark = if turn.get() {
                Cell::FirstPlayer
            } else {
                Cell::SecondPlayer
            };
            field.set_cell(row, column, mark);
            turn.set(!turn.get());
        });

        Self {
            field,
            view,
            first_player_turn,
        }
    }

    /// Replace the field with a fresh one of the same dimensions.
    ///
    /// The view rebinds to the new field and the first player moves again.
    pub fn new_game(&mut self) -> Result<(), FieldError> {
        let (rows, columns) = {
            let field = self.field.borrow();
            (field.rows(), field.columns())
        };
        let fresh = Rc::new(RefCell::new(GameField::new(rows, columns)?));
        self.view.bind_field(Some(Rc::clone(&fresh)));
        self.field = fresh;
        self.first_player_turn.set(true);
        Ok(())
    }

    /// The field currently played on.
    pub fn field(&self) -> &SharedField {
        &self.field
    }

    /// The board view, for feeding viewport sizes and pointer events.
    pub fn view_mut(&mut self) -> &mut GameView {
        &mut self.view
    }

    /// Whether the first player is to move.
    pub fn first_player_turn(&self) -> bool {
        self.first_player_turn.get()
    }

    /// Text for the status line.
    pub fn status_line(&self) -> &'static str {
        if self.first_player_turn.get() {
            "Cross to move"
        } else {
            "Circle to move"
        }
    }

    /// Window size fitting the unconstrained board plus the status bar.
    pub fn initial_window_size(&self) -> egui::Vec2 {
        let size = self
            .view
            .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        egui::vec2(size.width.max(280.0), size.height + STATUS_BAR_HEIGHT)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_line());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New game").clicked() {
                        if let Err(err) = self.new_game() {
                            tracing::warn!(%err, "new game failed");
                        }
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| {
                    widget::game_view(ui, &mut self.view);
                },
            );
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.view.detach();
    }
}

/// Sample field shown by `--preview`: an 8x6 grid with two marks per player.
pub fn preview_field() -> Result<GameField, FieldError> {
    let mut field = GameField::new(8, 6)?;
    field.set_cell(1, 1, Cell::FirstPlayer);
    field.set_cell(1, 2, Cell::SecondPlayer);
    field.set_cell(5, 1, Cell::FirstPlayer);
    field.set_cell(5, 2, Cell::SecondPlayer);
    Ok(field)
}
