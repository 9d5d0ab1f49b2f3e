// SPDX-License-Identifier: MIT

//!
//! *Part of the wider delivery timeline project*
//!
//! This crate facilitates the drawing of delivery option timelines.  It can be
//! compiled for native use as well as to WASM for use in the browser.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Laying out the days and delivery options on a horizontal time axis
//! - Assigning colours to arrival dates
//! - Tracking the hovered option and the pointer (for tooltips)
//! - Tracking the simulated "current time" (the time-scrub slider) and which
//!   options & days have closed because of it
//! - Handling and emitting events
//!
//! The rest of the crate holds code for the frontends:
//!
//! - SVG (a plain string, usable anywhere)
//! - HTML + SVG for browser rendering (WASM)
//! - `egui` for native desktop rendering
//!
//! ## Usage
//!
//! To use in a native `egui` desktop application the crate can simply be
//! included like any other crate.
//!
//! To use in a browser one can use the following to compile to WASM:
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!

extern crate console_error_panic_hook;

pub mod colour;
pub mod colours;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use colours::*;
pub use engine::*;
pub use frontends::html_svg::DeliveryTimelineHtml;
pub use frontends::svg::render_svg;
