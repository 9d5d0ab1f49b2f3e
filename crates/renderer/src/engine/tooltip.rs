// SPDX-License-Identifier: MIT

//!
//! Tooltips
//!

use crate::{Point, TooltipColours};
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw the hovered option's tooltip.
///
/// The position is in the frontend's surface coordinates (not drawing units)
/// because the tooltip follows the pointer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOut {
    pub top_left: Point,
    pub cutoff: String,
    pub arrival: String,
    pub colours: TooltipColours,
}

impl TooltipOut {
    /// The lines of text to show
    pub fn lines(&self) -> [String; 2] {
        [
            format!("Cutoff: {}", self.cutoff),
            format!("Arrival: {}", self.arrival),
        ]
    }
}
