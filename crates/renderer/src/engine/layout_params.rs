// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can arise when checking [`LayoutParams`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutParamsError {
    #[error("Layout param `{0}` must be a finite number")]
    NotFinite(&'static str),

    #[error("Layout param `{0}` must be greater than zero (got {1})")]
    NotPositive(&'static str, f64),

    #[error("Layout param `{0}` must be between 0 and 1 (got {1})")]
    NotFraction(&'static str, f64),
}

/// Layout parameters, in drawing units.  Frontends scale the whole drawing to
/// fit their surface, so these never need to know about pixels on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// The width of one calendar day
    pub day_width: f64,

    /// The height of the whole drawing
    pub height: f64,

    /// The y position of the horizontal axis
    pub timeline_y: f64,

    /// The y position of the first option's line
    pub option_line_start_y: f64,

    /// The vertical distance between consecutive options
    pub option_row_height: f64,

    pub option_line_thickness: f64,
    pub marker_radius: f64,
    pub axis_thickness: f64,
    pub grid_line_thickness: f64,
    pub now_line_thickness: f64,

    /// Distance of the day labels from the day's grid line
    pub label_padding_x: f64,

    /// Distance of the weekday label's baseline above the axis
    pub weekday_label_offset_y: f64,

    /// Distance of the month/day label's baseline above the axis
    pub date_label_offset_y: f64,

    pub font_size_px: f64,

    /// Distance of the tooltip from the pointer (both x and y)
    pub tooltip_offset: f64,

    /// Opacity of closed days and options
    pub dimmed_opacity: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            day_width: 100.0,
            height: 400.0,
            timeline_y: 50.0,
            option_line_start_y: 80.0,
            option_row_height: 15.0,
            option_line_thickness: 2.0,
            marker_radius: 4.0,
            axis_thickness: 1.0,
            grid_line_thickness: 1.0,
            now_line_thickness: 2.0,
            label_padding_x: 5.0,
            weekday_label_offset_y: 5.0,
            date_label_offset_y: 20.0,
            font_size_px: 12.0,
            tooltip_offset: 10.0,
            dimmed_opacity: 0.3,
        }
    }
}

impl LayoutParams {
    /// Check the params can be drawn with: every value is finite, the drawing
    /// has a size, and the dimmed opacity is a fraction
    pub fn validate(&self) -> Result<(), LayoutParamsError> {
        let named = [
            ("day_width", self.day_width),
            ("height", self.height),
            ("timeline_y", self.timeline_y),
            ("option_line_start_y", self.option_line_start_y),
            ("option_row_height", self.option_row_height),
            ("option_line_thickness", self.option_line_thickness),
            ("marker_radius", self.marker_radius),
            ("axis_thickness", self.axis_thickness),
            ("grid_line_thickness", self.grid_line_thickness),
            ("now_line_thickness", self.now_line_thickness),
            ("label_padding_x", self.label_padding_x),
            ("weekday_label_offset_y", self.weekday_label_offset_y),
            ("date_label_offset_y", self.date_label_offset_y),
            ("font_size_px", self.font_size_px),
            ("tooltip_offset", self.tooltip_offset),
            ("dimmed_opacity", self.dimmed_opacity),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(LayoutParamsError::NotFinite(name));
        }

        for (name, value) in [
            ("day_width", self.day_width),
            ("height", self.height),
            ("font_size_px", self.font_size_px),
        ] {
            if value <= 0.0 {
                return Err(LayoutParamsError::NotPositive(name, value));
            }
        }

        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(LayoutParamsError::NotFraction(
                "dimmed_opacity",
                self.dimmed_opacity,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let params: LayoutParams =
            serde_json::from_str(r#"{ "day_width": 80.0, "dimmed_opacity": 0.5 }"#).unwrap();
        assert_eq!(params.day_width, 80.0);
        assert_eq!(params.dimmed_opacity, 0.5);
        assert_eq!(params.height, 400.0);
        assert_eq!(params.option_row_height, 15.0);
    }

    #[test]
    fn validate() {
        assert_eq!(LayoutParams::default().validate(), Ok(()));

        let zero_width = LayoutParams {
            day_width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            zero_width.validate(),
            Err(LayoutParamsError::NotPositive("day_width", 0.0))
        );

        let negative_height = LayoutParams {
            height: -1.0,
            ..Default::default()
        };
        assert_eq!(
            negative_height.validate(),
            Err(LayoutParamsError::NotPositive("height", -1.0))
        );

        let infinite_radius = LayoutParams {
            marker_radius: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            infinite_radius.validate(),
            Err(LayoutParamsError::NotFinite("marker_radius"))
        );

        let nan_font = LayoutParams {
            font_size_px: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            nan_font.validate(),
            Err(LayoutParamsError::NotFinite("font_size_px"))
        );

        let too_opaque = LayoutParams {
            dimmed_opacity: 1.5,
            ..Default::default()
        };
        assert_eq!(
            too_opaque.validate(),
            Err(LayoutParamsError::NotFraction("dimmed_opacity", 1.5))
        );

        // Fully transparent or fully opaque are both fine
        for dimmed_opacity in [0.0, 1.0] {
            let params = LayoutParams {
                dimmed_opacity,
                ..Default::default()
            };
            assert_eq!(params.validate(), Ok(()));
        }
    }
}
