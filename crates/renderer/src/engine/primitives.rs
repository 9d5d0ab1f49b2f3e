// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// Opacity of anything not dimmed
pub const FULL_OPACITY: f64 = 1.0;

/// Information needed to draw text.  The position is the left end of the
/// text's baseline (as in SVG)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
    pub bold: bool,
    pub opacity: f64,
}

/// Information needed to draw a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineOut {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
    pub opacity: f64,
}

/// Information needed to draw a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleOut {
    pub centre: Point,
    pub radius: f64,
    pub fill_colour: Colour,
    pub opacity: f64,
}

impl CircleOut {
    /// Whether the point is inside (or on the edge of) the circle
    pub fn contains(&self, point: Point) -> bool {
        self.centre.distance_to(point) <= self.radius
    }
}

/// A box that specifies the location and size of something
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Point,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
    pub border_style: Option<LineStyle>,
}
