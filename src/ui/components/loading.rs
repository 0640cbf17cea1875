// SPDX-License-Identifier: MPL-2.0
//! Centered placeholder shown while a request is in flight.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    let label = Text::new(label)
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
