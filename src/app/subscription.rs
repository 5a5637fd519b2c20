// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes uncaptured keyboard events to the active screen and drives the
//! animation tick only while something on screen is actually moving.

use super::{Message, Screen};
use crate::ui::keyboard_screen;
use crate::ui::orientation_screen;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Frame period for animation ticks (~60 Hz).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the keyboard routing subscription for the current screen.
///
/// Only events no widget captured are forwarded. While the keyboard
/// sample's text field has focus its keystrokes arrive as captured events,
/// so they reach the log solely through the text-entry path, the same
/// split a native on-screen-keyboard delegate has.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Orientation => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                orientation_key_message(&key).map(Message::Orientation)
            } else {
                None
            }
        }),
        Screen::Keyboard => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            if let event::Event::Keyboard(key_event) = event {
                Some(Message::Keyboard(keyboard_screen::Message::HostKey(
                    key_event,
                )))
            } else {
                None
            }
        }),
    }
}

/// Creates the animation tick subscription.
///
/// The keyboard sample's square spins for as long as the screen is visible;
/// the orientation sample only needs frames while a transition is in
/// flight.
pub fn create_tick_subscription(
    screen: Screen,
    orientation_settled: bool,
) -> Subscription<Message> {
    let animating = match screen {
        Screen::Keyboard => true,
        Screen::Orientation => !orientation_settled,
    };
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a pressed key to an orientation-sample message: digit keys inject
/// raw sensor codes (including the non-interface ones, to exercise the
/// filter), arrows rotate the simulated device.
fn orientation_key_message(key: &keyboard::Key) -> Option<orientation_screen::Message> {
    match key {
        keyboard::Key::Character(c) => {
            let code: u8 = c.as_str().parse().ok()?;
            Some(orientation_screen::Message::SensorCode(code))
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(orientation_screen::Message::RotateClockwise)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(orientation_screen::Message::RotateCounterClockwise)
        }
        _ => None,
    }
}
