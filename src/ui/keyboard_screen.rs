// SPDX-License-Identifier: MPL-2.0
//! Keyboard sample screen.
//!
//! A text field whose edits are diffed into synthetic key-down/key-up pairs,
//! feeding the same on-screen event log as physical keys. This is the
//! desktop analog of forwarding on-screen-keyboard characters into an
//! app's key pipeline. Next to it, a square textured with a blue-green
//! gradient spins continuously, one fixed angular step per animation tick.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::keyboard;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::widget::{column, text, text_input};
use iced::{mouse, Color, Element, Font, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::collections::VecDeque;
use std::f32::consts::TAU;

/// Oldest entries fall off once the log grows past this.
const LOG_CAPACITY: usize = 12;
/// Radians the gradient square turns per animation tick.
const SPIN_STEP: f32 = 0.03;
/// Side length of the gradient square.
const SQUARE_SIZE: f32 = 192.0;
/// Tiles per gradient square edge.
const TILES: u32 = 16;
const CANVAS_SIZE: f32 = 320.0;

/// Keyboard sample state.
pub struct State {
    input_value: String,
    log: VecDeque<String>,
    square_angle: f32,
}

/// Messages for the keyboard sample.
#[derive(Debug, Clone)]
pub enum Message {
    /// The text field's content changed (on-screen entry path).
    InputEdited(String),
    /// Return was pressed inside the text field.
    InputSubmitted,
    /// A physical keyboard event that no widget captured.
    HostKey(keyboard::Event),
}

impl Default for State {
    fn default() -> Self {
        Self {
            input_value: String::new(),
            log: VecDeque::new(),
            square_angle: 0.0,
        }
    }
}

impl State {
    /// Handle a sample message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::InputEdited(value) => {
                self.forward_edit(&value);
                self.input_value = value;
            }
            Message::InputSubmitted => {
                self.push_key_pair("return");
            }
            Message::HostKey(event) => match event {
                keyboard::Event::KeyPressed { key, .. } => {
                    let label = key_label(&key);
                    self.push_log(format!("Key down: {label}"));
                }
                keyboard::Event::KeyReleased { key, .. } => {
                    let label = key_label(&key);
                    self.push_log(format!("Key up: {label}"));
                }
                _ => {}
            },
        }
    }

    /// Advance the spinning square by one tick.
    pub fn tick(&mut self) {
        self.square_angle = (self.square_angle + SPIN_STEP).rem_euclid(TAU);
    }

    /// Current text field content.
    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// The forwarded key-event log, oldest first.
    #[must_use]
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Current rotation of the gradient square, in radians.
    #[must_use]
    pub fn square_angle(&self) -> f32 {
        self.square_angle
    }

    /// Turns a text edit into the key events it implies: a down/up pair per
    /// inserted character, a backspace pair per removed one.
    fn forward_edit(&mut self, new_value: &str) {
        let old = self.input_value.clone();
        let common = old
            .chars()
            .zip(new_value.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let removed = old.chars().count() - common;
        for _ in 0..removed {
            self.push_key_pair("backspace");
        }
        for c in new_value.chars().skip(common) {
            self.push_key_pair(&c.to_string());
        }
    }

    fn push_key_pair(&mut self, label: &str) {
        self.push_log(format!("Key down: {label}"));
        self.push_log(format!("Key up: {label}"));
    }

    fn push_log(&mut self, entry: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }

    /// Renders the text field, the spinning gradient square and the log.
    pub fn view(&self) -> Element<'_, Message> {
        let field = text_input("Username", &self.input_value)
            .on_input(Message::InputEdited)
            .on_submit(Message::InputSubmitted)
            .padding(spacing::SM)
            .width(Length::Fixed(300.0));

        let canvas = Canvas::new(GradientSquare {
            angle: self.square_angle,
        })
        .width(Length::Fixed(CANVAS_SIZE))
        .height(Length::Fixed(CANVAS_SIZE));

        let mut log_column = column![].spacing(spacing::XS);
        for entry in self.log() {
            log_column = log_column.push(
                text(entry)
                    .size(typography::CAPTION)
                    .font(Font::MONOSPACE)
                    .color(palette::GRAY_700),
            );
        }

        column![field, canvas, log_column]
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .into()
    }
}

/// Label used in the log for a physical key.
fn key_label(key: &keyboard::Key) -> String {
    match key {
        keyboard::Key::Character(c) => c.to_string(),
        keyboard::Key::Named(named) => format!("{named:?}").to_lowercase(),
        keyboard::Key::Unidentified => "unidentified".to_owned(),
    }
}

/// Canvas program drawing the spinning gradient square on a dark backdrop.
struct GradientSquare {
    angle: f32,
}

impl canvas::Program<Message> for GradientSquare {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let backdrop = Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&backdrop, palette::SLATE_800);

        let center = frame.center();
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.angle);

            // Green grows along x, blue along y, like the gradient texture
            // this square stands in for.
            let tile = SQUARE_SIZE / TILES as f32;
            for row in 0..TILES {
                for col in 0..TILES {
                    let color = Color::from_rgb(
                        0.0,
                        (col as f32 + 0.5) / TILES as f32,
                        (row as f32 + 0.5) / TILES as f32,
                    );
                    let path = Path::rectangle(
                        Point::new(
                            col as f32 * tile - SQUARE_SIZE / 2.0,
                            row as f32 * tile - SQUARE_SIZE / 2.0,
                        ),
                        Size::new(tile + 0.5, tile + 0.5),
                    );
                    frame.fill(&path, color);
                }
            }
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_characters_become_key_pairs() {
        let mut state = State::default();
        state.handle(Message::InputEdited("ab".to_owned()));

        let log: Vec<_> = state.log().collect();
        assert_eq!(
            log,
            ["Key down: a", "Key up: a", "Key down: b", "Key up: b"]
        );
        assert_eq!(state.input_value(), "ab");
    }

    #[test]
    fn appending_only_forwards_the_new_characters() {
        let mut state = State::default();
        state.handle(Message::InputEdited("hi".to_owned()));
        state.handle(Message::InputEdited("hi!".to_owned()));

        let log: Vec<_> = state.log().collect();
        assert_eq!(log.last(), Some(&"Key up: !"));
        assert_eq!(log.len(), 6);
    }

    #[test]
    fn deleting_characters_forwards_backspaces() {
        let mut state = State::default();
        state.handle(Message::InputEdited("abc".to_owned()));
        state.handle(Message::InputEdited("a".to_owned()));

        let log: Vec<_> = state.log().collect();
        assert_eq!(
            &log[log.len() - 4..],
            &[
                "Key down: backspace",
                "Key up: backspace",
                "Key down: backspace",
                "Key up: backspace"
            ]
        );
        assert_eq!(state.input_value(), "a");
    }

    #[test]
    fn replacement_edits_forward_removals_then_insertions() {
        let mut state = State::default();
        state.handle(Message::InputEdited("cat".to_owned()));
        state.handle(Message::InputEdited("cow".to_owned()));

        let log: Vec<_> = state.log().collect();
        // "at" removed, "ow" typed.
        assert_eq!(
            &log[log.len() - 8..],
            &[
                "Key down: backspace",
                "Key up: backspace",
                "Key down: backspace",
                "Key up: backspace",
                "Key down: o",
                "Key up: o",
                "Key down: w",
                "Key up: w"
            ]
        );
    }

    #[test]
    fn log_is_capped() {
        let mut state = State::default();
        for i in 0..20 {
            state.handle(Message::InputEdited("x".repeat(i + 1)));
        }
        assert_eq!(state.log().count(), LOG_CAPACITY);
    }

    #[test]
    fn submit_logs_a_return_pair() {
        let mut state = State::default();
        state.handle(Message::InputSubmitted);
        let log: Vec<_> = state.log().collect();
        assert_eq!(log, ["Key down: return", "Key up: return"]);
    }

    #[test]
    fn host_keys_use_their_labels() {
        let mut state = State::default();
        state.handle(Message::HostKey(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Space),
            modified_key: keyboard::Key::Named(keyboard::key::Named::Space),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Space),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }));
        let log: Vec<_> = state.log().collect();
        assert_eq!(log, ["Key down: space"]);
    }

    #[test]
    fn tick_advances_and_wraps_the_square_angle() {
        let mut state = State::default();
        state.tick();
        assert!((state.square_angle() - SPIN_STEP).abs() < 1e-6);

        for _ in 0..1000 {
            state.tick();
        }
        assert!(state.square_angle() >= 0.0 && state.square_angle() < TAU);
    }
}
