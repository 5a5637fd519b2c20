// SPDX-License-Identifier: MPL-2.0
//! Orientation sample screen.
//!
//! Hosts the transition controller and draws the simulated device: casing,
//! screen, home button, the translucent interface rectangle placed through
//! the controller's transform, and the two orientation captions. Sensor
//! input is simulated: buttons and keys inject raw platform codes, which
//! are filtered here before they reach the controller.

use crate::orientation::{Orientation, Transition};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::widget::text::Alignment as TextAlignment;
use iced::widget::{button, column, row, text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Empty border around the device drawing inside the canvas.
const CANVAS_MARGIN: f32 = 48.0;
/// How far the casing outline extends past the screen on the sides and top.
const BEZEL: f32 = 10.0;
/// Extra casing below the screen, making room for the home button.
const CHIN: f32 = 40.0;
/// Home button center distance below the screen's bottom edge.
const HOME_OFFSET: f32 = 20.0;
const HOME_RADIUS: f32 = 12.0;
const HOME_SQUARE: f32 = 10.0;

/// Orientation sample state.
pub struct State {
    transition: Transition,
}

/// Messages for the orientation sample.
#[derive(Debug, Clone)]
pub enum Message {
    /// A raw orientation code from the simulated sensor. Non-interface
    /// codes (unknown, face-up, face-down) are dropped here, like the
    /// notification callback filtering in a real host.
    SensorCode(u8),
    /// Rotate the simulated device a quarter turn clockwise.
    RotateClockwise,
    /// Rotate the simulated device a quarter turn counter-clockwise.
    RotateCounterClockwise,
}

impl State {
    /// Creates the sample settled in portrait, without an intro animation.
    #[must_use]
    pub fn new(device_size: Size, animation_duration_secs: f32) -> Self {
        Self {
            transition: Transition::new(
                device_size,
                animation_duration_secs,
                Orientation::Portrait,
            ),
        }
    }

    /// Handle a sample message. `now` is the app clock in seconds.
    pub fn handle(&mut self, msg: Message, now: f32) {
        let target = match msg {
            Message::SensorCode(code) => match Orientation::from_raw(code) {
                Some(orientation) => orientation,
                None => return,
            },
            Message::RotateClockwise => self.transition.orientation().rotated_clockwise(),
            Message::RotateCounterClockwise => {
                self.transition.orientation().rotated_counterclockwise()
            }
        };
        self.transition.set_orientation(target, true, now);
        self.transition.update(now);
    }

    /// Advance the animation to the given clock reading.
    pub fn tick(&mut self, now: f32) {
        self.transition.update(now);
    }

    /// Whether the transition has reached its target (used to pause the
    /// animation tick).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition.is_settled()
    }

    /// Read-only access to the transition for rendering and tests.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Renders the device canvas and the simulated sensor controls.
    pub fn view(&self) -> Element<'_, Message> {
        let device = self.transition.device_size();
        let canvas = Canvas::new(DeviceCanvas {
            transition: &self.transition,
        })
        .width(Length::Fixed(device.width + 2.0 * CANVAS_MARGIN))
        .height(Length::Fixed(device.height + 2.0 * CANVAS_MARGIN + CHIN + typography::LABEL));

        let sensor_buttons = row![
            code_button("Portrait", 1),
            code_button("Upside Down", 2),
            code_button("Landscape Left", 3),
            code_button("Landscape Right", 4),
            // Filtered before reaching the controller, like on a real device.
            code_button("Face Up", 5),
            code_button("Face Down", 6),
        ]
        .spacing(spacing::SM);

        let rotate_buttons = row![
            button(text("Rotate Left")).on_press(Message::RotateCounterClockwise),
            button(text("Rotate Right")).on_press(Message::RotateClockwise),
        ]
        .spacing(spacing::SM);

        let hint = text("Keys 1-6 inject sensor codes; arrow keys rotate the device.")
            .size(typography::CAPTION)
            .color(palette::GRAY_700);

        column![canvas, sensor_buttons, rotate_buttons, hint]
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .into()
    }
}

fn code_button(label: &str, code: u8) -> Element<'_, Message> {
    button(text(label).size(typography::CAPTION))
        .on_press(Message::SensorCode(code))
        .into()
}

/// Canvas program drawing the simulated device and its interface.
struct DeviceCanvas<'a> {
    transition: &'a Transition,
}

impl canvas::Program<Message> for DeviceCanvas<'_> {
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
        let device = self.transition.device_size();
        let origin = Vector::new(CANVAS_MARGIN, CANVAS_MARGIN);
        let outline = Stroke::default().with_width(1.0).with_color(palette::BLACK);

        // Casing around the screen, with a chin below for the home button.
        let casing = Path::rectangle(
            Point::new(origin.x - BEZEL, origin.y - BEZEL),
            Size::new(device.width + 2.0 * BEZEL, device.height + BEZEL + CHIN),
        );
        frame.stroke(&casing, outline);

        // The screen itself.
        let screen = Path::rectangle(Point::new(origin.x, origin.y), device);
        frame.stroke(&screen, outline);

        // Home button: a circle with a square inside.
        let home_center = Point::new(
            origin.x + device.width / 2.0,
            origin.y + device.height + HOME_OFFSET,
        );
        frame.stroke(&Path::circle(home_center, HOME_RADIUS), outline);
        frame.stroke(
            &Path::rectangle(
                Point::new(
                    home_center.x - HOME_SQUARE / 2.0,
                    home_center.y - HOME_SQUARE / 2.0,
                ),
                Size::new(HOME_SQUARE, HOME_SQUARE),
            ),
            outline,
        );

        // The interface rectangle, mid-animation or settled, placed through
        // the controller's transform so it pivots about the device center.
        let matrix = self.transition.transform();
        let size = self.transition.size();
        let corners = [
            Point::ORIGIN,
            Point::new(size.width, 0.0),
            Point::new(size.width, size.height),
            Point::new(0.0, size.height),
        ];
        let mut outline_builder = canvas::path::Builder::new();
        let to_canvas =
            |local: Point| -> Point { matrix.transform_point(local) + origin };
        outline_builder.move_to(to_canvas(corners[0]));
        for corner in &corners[1..] {
            outline_builder.line_to(to_canvas(*corner));
        }
        outline_builder.close();
        frame.fill(
            &outline_builder.build(),
            Color {
                a: opacity::OVERLAY_SOFT,
                ..palette::GRAY_500
            },
        );

        // Captions: device orientation below the casing, interface
        // orientation centered in the (possibly rotating) rectangle.
        frame.fill_text(Text {
            content: format!("Device: {}", self.transition.orientation().label()),
            position: Point::new(origin.x, origin.y + device.height + CHIN + spacing::MD),
            color: palette::BLACK,
            size: typography::LABEL.into(),
            ..Text::default()
        });

        let interface_center = to_canvas(Point::new(size.width / 2.0, size.height / 2.0));
        frame.fill_text(Text {
            content: format!("Interface:\n{}", self.transition.orientation().label()),
            position: interface_center,
            color: palette::BLACK,
            size: typography::LABEL.into(),
            align_x: TextAlignment::Center,
            align_y: Vertical::Center,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}
