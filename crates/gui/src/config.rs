// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Delivery timeline GUI config
//!

use crate::GuiError;
use chrono::{DateTime, Utc};
use delivery_timeline_core::DeliveryOptions;
use delivery_timeline_renderer::{LayoutParams, TimelineColours, default_reference_time};
use directories_next::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "DeliveryTimeline";
const APPLICATION_NAME: &str = "DeliveryTimeline";
const CONFIG_FILE_NAME: &str = "config.json";

/// The config that's saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The JSON file of options to show (the sample options if unset)
    options_path: Option<PathBuf>,

    /// Where the slider starts (now if unset)
    reference_time: Option<DateTime<Utc>>,

    pub layout: LayoutParams,
    pub colours: TimelineColours,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            options_path: None,
            reference_time: Some(default_reference_time()),
            layout: LayoutParams::default(),
            colours: TimelineColours::default(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, writing the default
    /// config first if there isn't one
    pub fn load() -> Result<Self, GuiError> {
        info!("Loading config");
        let path = config_file_path()?;
        if !path.exists() {
            info!("No config file found");
            Config::default().save_to(&path)?;
        }
        Config::load_from(&path)
    }

    /// Load the config from the file.  The layout must be drawable
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, GuiError> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.layout.validate()?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Save the config to the platform config directory
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(config_file_path()?)
    }

    /// Save the config (as pretty JSON) to the file, creating any missing
    /// directories
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), GuiError> {
        let path = path.as_ref();
        info!("Saving config to {path:?}");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    pub fn options_path(&self) -> Option<&Path> {
        self.options_path.as_deref()
    }

    pub fn set_options_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.options_path = Some(path.into());
    }

    /// The configured reference time, or now
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    pub fn set_reference_time(&mut self, reference_time: Option<DateTime<Utc>>) {
        self.reference_time = reference_time;
    }

    /// The options from the configured file, or the sample options if no file
    /// is configured
    pub fn load_options(&self) -> Result<DeliveryOptions, GuiError> {
        match &self.options_path {
            Some(path) => {
                info!("Loading options from {path:?}");
                Ok(DeliveryOptions::from_json_file(path)?)
            }
            None => Ok(DeliveryOptions::sample()),
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    info!("Getting project directories (dev build)");
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(GuiError::ConfigDir)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    info!("Getting project directories");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(GuiError::ConfigDir)
}

/// Get the path to the config
fn config_file_path() -> Result<PathBuf, GuiError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    info!("Config file path = {config_file:?}");
    Ok(config_file)
}
