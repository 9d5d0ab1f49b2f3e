// SPDX-License-Identifier: MIT

//!
//! Days
//!

use crate::{LineOut, TextOut};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw one calendar day of the timeline: its grid line
/// and its two labels (weekday, and month & day)
#[derive(Debug, Clone, Serialize)]
pub struct DayOut {
    pub date: NaiveDate,
    pub grid_line: LineOut,
    pub weekday_label: TextOut,
    pub date_label: TextOut,

    /// Whether every option arriving on this day has closed
    pub is_closed: bool,
}
