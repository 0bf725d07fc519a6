// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host policy tests that drive the app headlessly through pointer events.

use std::cell::RefCell;
use std::rc::Rc;

use xo_core::{Cell, GameField};
use xo_ui_egui::app::preview_field;
use xo_ui_egui::App;
use xo_view::{Point, PointerEvent, SharedField, Size, ViewStyle};

fn shared_field(rows: usize, columns: usize) -> SharedField {
    Rc::new(RefCell::new(GameField::new(rows, columns).unwrap()))
}

/// Builds an app over a fresh field and gives the view a square viewport
/// with 100-point cells.
fn app(rows: usize, columns: usize) -> App {
    let mut app = App::new(shared_field(rows, columns), ViewStyle::default());
    app.view_mut().set_viewport(Size::new(
        columns as f32 * 100.0,
        rows as f32 * 100.0,
    ));
    app
}

fn tap(app: &mut App, x: f32, y: f32) {
    let view = app.view_mut();
    view.handle_pointer(PointerEvent::Press(Point::new(x, y)));
    view.handle_pointer(PointerEvent::Release(Point::new(x, y)));
}

#[test]
fn taps_alternate_the_players() {
    let mut app = app(3, 3);
    assert!(app.first_player_turn());

    tap(&mut app, 50.0, 50.0); // (0, 0)
    assert!(!app.first_player_turn());

    tap(&mut app, 150.0, 150.0); // (1, 1)
    assert!(app.first_player_turn());

    let field = app.field().borrow();
    assert_eq!(field.get_cell(0, 0), Cell::FirstPlayer);
    assert_eq!(field.get_cell(1, 1), Cell::SecondPlayer);
}

#[test]
fn occupied_cells_reject_the_tap() {
    let mut app = app(3, 3);

    tap(&mut app, 50.0, 50.0); // (0, 0) -> cross
    tap(&mut app, 50.0, 50.0); // occupied, the circle keeps its turn
    tap(&mut app, 150.0, 150.0); // (1, 1) -> circle
    assert!(app.first_player_turn(), "two placed marks, cross moves again");

    let field = app.field().borrow();
    assert_eq!(field.get_cell(0, 0), Cell::FirstPlayer);
    assert_eq!(field.get_cell(1, 1), Cell::SecondPlayer);
    for row in 0..3 {
        for column in 0..3 {
            if (row, column) != (0, 0) && (row, column) != (1, 1) {
                assert_eq!(field.get_cell(row, column), Cell::Empty);
            }
        }
    }
}

#[test]
fn margin_taps_leave_the_turn_alone() {
    let mut app = App::new(shared_field(5, 5), ViewStyle::default());
    // 300x200 gives 40-point cells and a 50-point margin on each side.
    app.view_mut().set_viewport(Size::new(300.0, 200.0));

    tap(&mut app, 10.0, 100.0); // resolves to column -1
    assert!(app.first_player_turn());

    let field = app.field().borrow();
    for row in 0..5 {
        for column in 0..5 {
            assert_eq!(field.get_cell(row, column), Cell::Empty);
        }
    }
}

#[test]
fn new_game_rebinds_to_a_fresh_field() {
    let mut app = app(3, 3);
    tap(&mut app, 50.0, 50.0);
    assert!(!app.first_player_turn());

    let old = Rc::clone(app.field());
    assert_eq!(old.borrow().listener_count(), 1);

    app.new_game().unwrap();
    assert!(!Rc::ptr_eq(app.field(), &old), "a new field replaces the old one");
    assert_eq!(old.borrow().listener_count(), 0, "the view has let go of the old field");
    assert!(app.first_player_turn(), "a new game starts with the cross");

    tap(&mut app, 150.0, 150.0);
    assert_eq!(app.field().borrow().get_cell(1, 1), Cell::FirstPlayer);
    assert_eq!(old.borrow().get_cell(0, 0), Cell::FirstPlayer, "the old field is untouched");
    assert_eq!(old.borrow().get_cell(1, 1), Cell::Empty);
}

#[test]
fn new_game_keeps_the_field_dimensions() {
    let mut app = App::new(shared_field(4, 7), ViewStyle::default());
    app.new_game().unwrap();

    let field = app.field().borrow();
    assert_eq!(field.rows(), 4);
    assert_eq!(field.columns(), 7);
}

#[test]
fn status_line_follows_the_turn() {
    let mut app = app(3, 3);
    assert_eq!(app.status_line(), "Cross to move");

    tap(&mut app, 50.0, 50.0);
    assert_eq!(app.status_line(), "Circle to move");
}

#[test]
fn initial_window_size_fits_the_field_and_status_bar() {
    let app = App::new(shared_field(3, 3), ViewStyle::default());
    // 3x3 at the default 50-point cell measures 150x150; the width is
    // padded up to the minimum window width and the status bar stacks
    // on top of the height.
    let size = app.initial_window_size();
    assert_eq!(size.x, 280.0);
    assert_eq!(size.y, 190.0);
}

#[test]
fn preview_field_carries_the_sample_marks() {
    let field = preview_field().unwrap();
    assert_eq!(field.rows(), 8);
    assert_eq!(field.columns(), 6);

    assert_eq!(field.get_cell(1, 1), Cell::FirstPlayer);
    assert_eq!(field.get_cell(1, 2), Cell::SecondPlayer);
    assert_eq!(field.get_cell(5, 1), Cell::FirstPlayer);
    assert_eq!(field.get_cell(5, 2), Cell::SecondPlayer);

    let marks = (0..8)
        .flat_map(|row| (0..6).map(move |column| (row, column)))
        .filter(|&(row, column)| field.get_cell(row, column) != Cell::Empty)
        .count();
    assert_eq!(marks, 4);
}
