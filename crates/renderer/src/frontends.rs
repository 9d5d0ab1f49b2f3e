// SPDX-License-Identifier: MIT

//!
//! The frontends that draw what the [`Engine`](crate::Engine) lays out
//!

pub mod desktop_egui;
pub mod html_svg;
pub mod svg;
