// SPDX-License-Identifier: MIT OR Apache-2.0

//! xo Core - Game Field Model
//!
//! This crate provides the game data model:
//! - Grid field representation with bounds-absorbing access
//! - Cell contents for a two-player game
//! - Change notification for views observing the field

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod field;

pub use field::{Cell, FieldError, FieldListener, GameField};
