// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state.

use super::{Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::keyboard_screen;
use crate::ui::orientation_screen;
use iced::widget::{button, row, text, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub orientation: &'a orientation_screen::State,
    pub keyboard: &'a keyboard_screen::State,
}

/// Renders the sample switcher and the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let switcher = row![
        sample_button("Orientation", Screen::Orientation, ctx.screen),
        sample_button("Keyboard", Screen::Keyboard, ctx.screen),
    ]
    .spacing(spacing::SM)
    .padding(spacing::SM);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Orientation => ctx.orientation.view().map(Message::Orientation),
        Screen::Keyboard => ctx.keyboard.view().map(Message::Keyboard),
    };

    let column = Column::new().push(switcher).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A switcher button; the active sample's button is disabled.
fn sample_button(label: &str, target: Screen, current: Screen) -> Element<'_, Message> {
    let mut switch = button(text(label));
    if target != current {
        switch = switch.on_press(Message::SwitchScreen(target));
    }
    switch.into()
}
