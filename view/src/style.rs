// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visual styling for the board view.
//!
//! Styles configure drawing only; game semantics never depend on them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
    pub const GRAY: Rgb = Rgb {
        r: 136,
        g: 136,
        b: 136,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual configuration for [`GameView`](crate::GameView).
///
/// Widths and sizes are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStyle {
    /// Color of the first player's cross marks
    pub first_player_color: Rgb,
    /// Color of the second player's circle marks
    pub second_player_color: Rgb,
    /// Color of the grid lines
    pub grid_color: Rgb,
    /// Stroke width for player marks
    pub mark_stroke_width: f32,
    /// Stroke width for grid lines
    pub grid_stroke_width: f32,
    /// Preferred edge length of one cell, used during size negotiation
    pub desired_cell_size: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            first_player_color: Rgb::BLACK,
            second_player_color: Rgb::YELLOW,
            grid_color: Rgb::GRAY,
            mark_stroke_width: 3.0,
            grid_stroke_width: 1.0,
            desired_cell_size: 50.0,
        }
    }
}

/// Errors from reading or writing a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The file could not be read or written
    #[error("style file I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid style
    #[error("style file parse: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewStyle {
    /// Load a style from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, StyleError> {
        let contents = std::fs::read_to_string(path)?;
        let style = serde_json::from_str(&contents)?;
        Ok(style)
    }

    /// Save this style to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), StyleError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_the_classic_look() {
        let style = ViewStyle::default();
        assert_eq!(style.first_player_color, Rgb::BLACK);
        assert_eq!(style.second_player_color, Rgb::YELLOW);
        assert_eq!(style.grid_color, Rgb::GRAY);
        assert_eq!(style.mark_stroke_width, 3.0);
        assert_eq!(style.grid_stroke_width, 1.0);
        assert_eq!(style.desired_cell_size, 50.0);
    }

    #[test]
    fn style_roundtrips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");

        let mut style = ViewStyle::default();
        style.grid_stroke_width = 2.5;
        style.grid_color = Rgb::new(10, 20, 30);
        style.save_to_file(&path).unwrap();

        let loaded = ViewStyle::load_from_file(&path).unwrap();
        assert_eq!(loaded, style);
    }

    #[test]
    fn malformed_style_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ViewStyle::load_from_file(&path),
            Err(StyleError::Json(_))
        ));
    }
}
