// SPDX-License-Identifier: MPL-2.0
//! Top bar shown on every page.
//!
//! Holds the app title (a link home), a back link on pages other than the
//! category list, and the session-wide audio settings: auto-play and volume.

use crate::domain::Volume;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, slider, text, toggler, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub show_back: bool,
    pub autoplay: bool,
    pub volume: Volume,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TitlePressed,
    BackPressed,
    AutoPlayToggled(bool),
    VolumeChanged(f32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    GoHome,
    ToggleAutoPlay,
    SetVolume(Volume),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::TitlePressed | Message::BackPressed => Event::GoHome,
        // The store owns the flag; the toggler only reports a click.
        Message::AutoPlayToggled(_) => Event::ToggleAutoPlay,
        Message::VolumeChanged(value) => Event::SetVolume(Volume::new(value)),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = button(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD))
        .on_press(Message::TitlePressed)
        .padding(spacing::XXS)
        .style(styles::button::link);

    let mut bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(title);

    if ctx.show_back {
        bar = bar.push(
            button(Text::new(ctx.i18n.tr("header-back")).size(typography::BODY))
                .on_press(Message::BackPressed)
                .padding(spacing::XXS)
                .style(styles::button::link),
        );
    }

    let autoplay = toggler(ctx.autoplay)
        .label(ctx.i18n.tr("header-autoplay"))
        .on_toggle(Message::AutoPlayToggled)
        .size(20.0);

    let volume = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(Text::new(ctx.i18n.tr("header-volume")).size(typography::BODY))
        .push(
            slider(0.0..=1.0, ctx.volume.value(), Message::VolumeChanged)
                .step(0.01)
                .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH)),
        )
        .push(text(format!("{}%", ctx.volume.percent())).size(typography::CAPTION));

    bar = bar
        .push(Space::new().width(Length::Fill))
        .push(autoplay)
        .push(volume);

    container(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::header)
        .into()
}
