// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use crate::colour::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipColours {
    pub fill: Colour,
    pub border: Colour,
    pub text: Colour,
}

/// Everything drawn on the timeline that isn't coloured by arrival date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineColours {
    pub background: Colour,
    pub axis: Colour,
    pub grid_line: Colour,
    pub label_text: Colour,
    pub now_line: Colour,
    pub tooltip: TooltipColours,
}

impl Default for TimelineColours {
    fn default() -> Self {
        Self {
            background: Colour::from_rgb(0xf0, 0xf0, 0xf0),
            axis: Colour::from_rgb(0, 0, 0),
            grid_line: Colour::from_rgb(0xcc, 0xcc, 0xcc),
            label_text: Colour::from_rgb(0, 0, 0),
            now_line: Colour::from_rgb(0xff, 0, 0),
            tooltip: TooltipColours {
                fill: Colour::from_rgb(0xff, 0xff, 0xff),
                border: Colour::from_rgb(0xd1, 0xd5, 0xdb),
                text: Colour::from_rgb(0, 0, 0),
            },
        }
    }
}
