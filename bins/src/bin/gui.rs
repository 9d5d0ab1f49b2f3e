// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The delivery timeline desktop app
//!

use clap::Parser;
use delivery_timeline_gui::{Config, DEFAULT_WINDOW_SIZE, DeliveryTimelineApp};
use eframe::egui::ViewportBuilder;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Delivery timeline desktop app CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Show delivery options on a timeline")]
struct Cli {
    /// JSON file of delivery options (overrides the configured file)
    #[arg(long)]
    options: Option<PathBuf>,
}

/// Entry point for the native GUI desktop application
fn main() -> Result<(), eframe::Error> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("delivery_timeline")
        .build();

    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to initialise logging: {error}");
    }

    // A broken config shouldn't stop the app from opening
    let mut config = Config::load().unwrap_or_else(|error| {
        warn!("Unable to load config ({error}), using the default");
        Config::default()
    });
    if let Some(path) = args.options {
        config.set_options_path(path);
    }

    let app = DeliveryTimelineApp::new(config);

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default()
        .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native(
        "Delivery Timeline",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
