// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 1000.0,
    height: 600.0,
};

/// The file types offered by the "Open" dialog
pub const OPTIONS_FILE_EXTENSIONS: [&str; 1] = ["json"];
