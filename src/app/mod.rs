// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two samples.
//!
//! The `App` struct owns the screens and the origin of the animation clock,
//! and translates top-level messages into screen updates. Policy decisions
//! (window sizing, config fallbacks, clock representation) stay close to
//! the update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::orientation::DEFAULT_ANIMATION_DURATION_SECS;
use crate::ui::keyboard_screen;
use crate::ui::orientation_screen;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 880;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Root Iced application state bridging the two sample screens.
pub struct App {
    screen: Screen,
    orientation: orientation_screen::State,
    keyboard: keyboard_screen::State,
    /// Origin of the app clock; all animation timestamps are seconds since
    /// this instant.
    started_at: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the persisted
    /// configuration. A broken settings file degrades to defaults rather
    /// than aborting startup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            eprintln!("Failed to load settings, using defaults: {err}");
            config::Config::default()
        });

        let device_size = Size::new(
            config.device_width.unwrap_or(config::DEFAULT_DEVICE_WIDTH),
            config.device_height.unwrap_or(config::DEFAULT_DEVICE_HEIGHT),
        );
        let duration = flags
            .duration
            .or(config.animation_duration_secs)
            .unwrap_or(DEFAULT_ANIMATION_DURATION_SECS);
        let screen = flags
            .sample
            .as_deref()
            .or(config.start_sample.as_deref())
            .and_then(Screen::from_name)
            .unwrap_or(Screen::Orientation);

        let app = App {
            screen,
            orientation: orientation_screen::State::new(device_size, duration),
            keyboard: keyboard_screen::State::default(),
            started_at: Instant::now(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} - Device Stage", self.screen.label())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.screen, self.orientation.is_settled());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Seconds between the app clock's origin and `instant`.
    fn clock(&self, instant: Instant) -> f32 {
        instant.duration_since(self.started_at).as_secs_f32()
    }

    /// The app clock right now, for messages that carry no timestamp.
    fn now(&self) -> f32 {
        self.started_at.elapsed().as_secs_f32()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Orientation(msg) => {
                let now = self.now();
                self.orientation.handle(msg, now);
            }
            Message::Keyboard(msg) => self.keyboard.handle(msg),
            Message::SwitchScreen(target) => self.screen = target,
            Message::Tick(instant) => {
                let now = self.clock(instant);
                match self.screen {
                    Screen::Orientation => self.orientation.tick(now),
                    Screen::Keyboard => self.keyboard.tick(),
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            orientation: &self.orientation,
            keyboard: &self.keyboard,
        })
    }
}
