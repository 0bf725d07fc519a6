// SPDX-License-Identifier: MIT OR Apache-2.0

//! The game field and its change-notification registry.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contents of a single cell on the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet
    #[default]
    Empty,
    /// Mark of the player who moves first (drawn as a cross)
    FirstPlayer,
    /// Mark of the player who moves second (drawn as a circle)
    SecondPlayer,
}

/// Errors that can occur when constructing a field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A zero axis, or a cell count that does not fit in `usize`
    #[error("invalid field dimensions: {rows}x{columns}")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },
}

/// Callback invoked after a cell value effectively changed.
///
/// Listeners are identified by `Rc` pointer, so the same handle can be
/// registered once and removed again later. They receive a shared reference
/// to the field and cannot mutate it from inside the notification.
pub type FieldListener = Rc<dyn Fn(&GameField)>;

/// A rectangular game field of [`Cell`]s with fixed dimensions.
///
/// Reads outside the field yield [`Cell::Empty`] and writes outside it are
/// ignored, so callers may pass through unclamped coordinates coming from
/// hit testing. Listeners fire synchronously on every effective change.
pub struct GameField {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    listeners: Vec<FieldListener>,
}

impl GameField {
    /// Create a field with every cell empty.
    ///
    /// Dimensions with a zero axis, or whose cell count overflows `usize`,
    /// are rejected.
    pub fn new(rows: usize, columns: usize) -> Result<Self, FieldError> {
        if rows == 0 || columns == 0 {
            return Err(FieldError::InvalidDimensions { rows, columns });
        }
        let cell_count = rows
            .checked_mul(columns)
            .ok_or(FieldError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; cell_count],
            listeners: Vec::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check whether a coordinate pair addresses a cell of this field.
    pub fn in_bounds(&self, row: i32, column: i32) -> bool {
        self.index_of(row, column).is_some()
    }

    /// Value at `(row, column)`, or [`Cell::Empty`] outside the field.
    pub fn get_cell(&self, row: i32, column: i32) -> Cell {
        self.index_of(row, column)
            .map_or(Cell::Empty, |idx| self.cells[idx])
    }

    /// Store `cell` at `(row, column)` and notify listeners.
    ///
    /// Writes outside the field are ignored, and writing the value a cell
    /// already holds notifies nobody.
    pub fn set_cell(&mut self, row: i32, column: i32, cell: Cell) {
        let idx = match self.index_of(row, column) {
            Some(idx) => idx,
            None => return,
        };
        if self.cells[idx] == cell {
            return;
        }
        self.cells[idx] = cell;
        tracing::debug!(row, column, ?cell, "cell changed");
        for listener in &self.listeners {
            listener(self);
        }
    }

    /// Register a change listener.
    ///
    /// Registering a handle that is already present keeps a single
    /// registration.
    pub fn add_listener(&mut self, listener: &FieldListener) {
        if !self.listeners.iter().any(|l| Rc::ptr_eq(l, listener)) {
            self.listeners.push(Rc::clone(listener));
        }
    }

    /// Remove a previously registered listener; unknown handles are ignored.
    pub fn remove_listener(&mut self, listener: &FieldListener) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Drop every registered listener.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn index_of(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        // rows * columns fits in usize (checked in new), so this cannot
        // overflow.
        Some(row * self.columns + column)
    }
}

impl fmt::Debug for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameField")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cells", &self.cells)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
