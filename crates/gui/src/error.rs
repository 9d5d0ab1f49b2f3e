// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! GUI errors
//!

use delivery_timeline_core::DeliveryOptionsError;
use delivery_timeline_renderer::LayoutParamsError;
use thiserror::Error;

/// Errors that can arise in the desktop application
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuiError {
    #[error("Unable to find a config directory")]
    ConfigDir,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Invalid delivery options: {0}")]
    Options(#[from] DeliveryOptionsError),

    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutParamsError),
}

impl From<std::io::Error> for GuiError {
    fn from(error: std::io::Error) -> Self {
        GuiError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for GuiError {
    fn from(error: serde_json::Error) -> Self {
        GuiError::Json(error.to_string())
    }
}
