// SPDX-License-Identifier: MIT

//!
//! Events
//!

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Debug;

/// Interaction events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TimelineInteractionEvent {
    /// The pointer entered the marker of the option at this index
    HoverStart(usize),

    /// The pointer left the hovered option's marker
    HoverEnd,

    /// The slider moved the simulated current time
    CurrentTimeChanged(DateTime<Utc>),
}
