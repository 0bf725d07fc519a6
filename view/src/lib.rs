// SPDX-License-Identifier: MIT OR Apache-2.0

//! xo View - Board Rendering and Input Translation
//!
//! This crate renders a [`GameField`](xo_core::GameField) as a grid of
//! crosses and circles and turns pointer gestures into cell positions:
//! - Size negotiation against the host layout constraints
//! - Grid geometry derived from the viewport
//! - Drawing through the [`Canvas`] trait, with no backend of its own
//! - Hit testing and the press/release gesture
//!
//! Hosts bind a shared field, feed viewport sizes and pointer events, and
//! receive taps through an action callback. The view observes the field for
//! redraws but never mutates it.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod canvas;
pub mod geometry;
pub mod style;
pub mod view;

pub use canvas::{Canvas, Paint};
pub use geometry::{Insets, Point, Rect, Size};
pub use style::{Rgb, StyleError, ViewStyle};
pub use view::{GameView, GridLayout, MeasureSpec, PointerEvent, SharedField};
