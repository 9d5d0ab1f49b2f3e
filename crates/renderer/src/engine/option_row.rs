// SPDX-License-Identifier: MIT

//!
//! Delivery option rows
//!

use crate::{CircleOut, LineOut, NamedColour};
use delivery_timeline_core::DeliveryOption;
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw a [`DeliveryOption`]: a line from its cutoff to
/// its arrival date, with a marker at the cutoff end
#[derive(Debug, Clone, Serialize)]
pub struct OptionOut {
    /// The option's index in the (sorted) options
    pub index: usize,
    pub option: DeliveryOption,
    pub colour_name: NamedColour,
    pub line: LineOut,
    pub marker: CircleOut,

    /// Whether the option's cutoff has passed
    pub is_closed: bool,
    pub is_hovered_over: bool,
}
