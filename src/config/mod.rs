//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use device_stage::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Start on the keyboard sample with a slower rotation animation
//! config.start_sample = Some("keyboard".to_string());
//! config.animation_duration_secs = Some(0.4);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::orientation::DEFAULT_ANIMATION_DURATION_SECS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DeviceStage";

pub const DEFAULT_DEVICE_WIDTH: f32 = 384.0;
pub const DEFAULT_DEVICE_HEIGHT: f32 = 512.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Which sample opens at startup: `"orientation"` or `"keyboard"`.
    pub start_sample: Option<String>,
    #[serde(default)]
    pub animation_duration_secs: Option<f32>,
    #[serde(default)]
    pub device_width: Option<f32>,
    #[serde(default)]
    pub device_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_sample: None,
            animation_duration_secs: Some(DEFAULT_ANIMATION_DURATION_SECS),
            device_width: Some(DEFAULT_DEVICE_WIDTH),
            device_height: Some(DEFAULT_DEVICE_HEIGHT),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
