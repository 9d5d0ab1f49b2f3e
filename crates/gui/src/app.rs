// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Delivery timeline egui desktop app
//!

use crate::consts::OPTIONS_FILE_EXTENSIONS;
use crate::{Config, GuiError};
use delivery_timeline_core::DeliveryOptions;
use delivery_timeline_renderer::TimelineInteractionEvent;
use delivery_timeline_renderer::frontends::desktop_egui::DeliveryTimelineEgui;
use eframe::App;
use eframe::egui::{self, CentralPanel, Color32, Context, ScrollArea, TopBottomPanel};
use std::path::PathBuf;

/// All data needed for the delivery timeline (egui) desktop app
pub struct DeliveryTimelineApp {
    config: Config,

    /// The timeline being shown
    timeline: DeliveryTimelineEgui,

    /// Shown until the next successful load
    error: Option<GuiError>,
}

impl DeliveryTimelineApp {
    /// Create the app from the config.  If the configured options can't be
    /// loaded the sample options are shown along with the error (likewise the
    /// default layout for an invalid layout)
    pub fn new(config: Config) -> Self {
        let (options, mut error) = match config.load_options() {
            Ok(options) => (options, None),
            Err(error) => {
                warn!("Unable to load options: {error}");
                (DeliveryOptions::sample(), Some(error))
            }
        };
        let mut timeline =
            DeliveryTimelineEgui::with_reference_time(options, config.reference_time());
        if let Err(layout_error) = timeline.set_layout_params(config.layout) {
            warn!("Unable to use the configured layout: {layout_error}");
            error = Some(layout_error.into());
        }
        timeline.set_colours(config.colours);
        Self {
            config,
            timeline,
            error,
        }
    }

    /// Load the options in the file, and remember the file in the config
    fn open(&mut self, path: PathBuf) {
        info!("Opening {path:?}");
        match DeliveryOptions::from_json_file(&path) {
            Ok(options) => {
                self.timeline.set_options(options);
                self.error = None;
                self.config.set_options_path(path);
                if let Err(error) = self.config.save() {
                    warn!("Unable to save config: {error}");
                    self.error = Some(error);
                }
            }
            Err(error) => {
                warn!("Unable to open {path:?}: {error}");
                self.error = Some(error.into());
            }
        }
    }

    fn draw_menu_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open…").clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("Delivery options", &OPTIONS_FILE_EXTENSIONS)
                    .pick_file();
                if let Some(path) = picked {
                    self.open(path);
                }
            }
            match self.config.options_path() {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.label("Sample options"),
            };
        });
        if let Some(error) = &self.error {
            ui.colored_label(Color32::RED, error.to_string());
        }
    }
}

impl App for DeliveryTimelineApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| self.draw_menu_bar(ui));
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| self.timeline.draw(ctx, ui));
        });

        for event in self.timeline.drain_interaction_events() {
            match event {
                TimelineInteractionEvent::CurrentTimeChanged(current_time) => {
                    debug!("Current time changed to {current_time}")
                }
                event => trace!("{event:?}"),
            }
        }
    }
}
