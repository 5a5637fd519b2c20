// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::keyboard_screen;
use crate::ui::orientation_screen;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Orientation(orientation_screen::Message),
    Keyboard(keyboard_screen::Message),
    SwitchScreen(Screen),
    /// Animation frame from the tick subscription.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Sample to open first (`orientation` or `keyboard`).
    pub sample: Option<String>,
    /// Animation window override in seconds.
    pub duration: Option<f32>,
    /// Settings file override (for tests and portable setups).
    pub config_path: Option<PathBuf>,
}
