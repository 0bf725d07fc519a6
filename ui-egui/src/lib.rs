// SPDX-License-Identifier: MIT OR Apache-2.0

//! xo egui UI
//!
//! Hosts the board view inside an eframe application:
//! - Canvas adapter over the egui painter
//! - Widget function feeding layout, viewport and pointer input to the view
//! - Application state carrying the turn policy and the New game action

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod app;
pub mod painter;
pub mod widget;

pub use app::App;
pub use painter::EguiCanvas;
pub use widget::game_view;
