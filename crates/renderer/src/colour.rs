// SPDX-License-Identifier: MIT

//!
//! The colour type used when drawing a timeline
//!

use eframe::egui;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColourError {
    #[error("`{0}` is not a valid hex colour")]
    InvalidHex(String),
}

/// The `Colour` type.  Saved and loaded as a hex string (e.g. `"#0affc3"`)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for egui::Color32 {
    fn from(value: Colour) -> Self {
        egui::Color32::from_rgb(value.r, value.g, value.b)
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_hex()
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let hex_colour = original.trim_start_matches('#');

        // Remove the alpha part
        let hex_colour = match hex_colour.len() {
            8 => hex_colour
                .get(0..6)
                .ok_or_else(|| ColourError::InvalidHex(original.clone()))?,
            6 => hex_colour,
            _ => return Err(ColourError::InvalidHex(original.clone())),
        };

        let component = |range: std::ops::Range<usize>| {
            hex_colour
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| ColourError::InvalidHex(original.clone()))
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// To get RGB as, say, #0affc3 (for CSS & SVG)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to an egui colour with the given opacity (0.0 - 1.0)
    pub fn to_egui_with_opacity(&self, opacity: f64) -> egui::Color32 {
        egui::Color32::from(*self).gamma_multiply(opacity as f32)
    }
}
