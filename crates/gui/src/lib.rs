// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider delivery timeline project*
//!
//! This library crate provides the GUI parts of the GUI application.  It is
//! used to build the native delivery timeline GUI application.
//!

mod app;
mod config;
mod consts;
mod error;

pub use app::DeliveryTimelineApp;
pub use config::Config;
pub use consts::DEFAULT_WINDOW_SIZE;
pub use error::GuiError;

#[macro_use]
extern crate log;
