// SPDX-License-Identifier: MIT

//!
//! Constants
//!

/// The slider's minimum value (the start of the timeline)
pub const MIN_SLIDER_VALUE: f64 = 0.0;

/// The slider's maximum value (the end of the timeline)
pub const MAX_SLIDER_VALUE: f64 = 100.0;

/// The slider's step in the HTML frontend
pub const SLIDER_STEP: f64 = 0.1;

/// Where the slider starts when no reference time is given
/// (`2024-09-27T07:40:00Z`)
pub const DEFAULT_REFERENCE_TIMESTAMP: i64 = 1_727_422_800;
