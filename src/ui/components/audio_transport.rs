// SPDX-License-Identifier: MPL-2.0
//! Play/pause and stop controls for the question clip, with elapsed/total time.

use crate::audio::format_time;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, progress_bar, text, tooltip, Row, Text};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Snapshot of the question audio the control renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportState {
    pub loaded: bool,
    pub playing: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
}

impl TransportState {
    /// Fraction of the clip already played, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.duration {
            Some(total) if !total.is_zero() => {
                (self.position.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

pub fn view<'a, Message: Clone + 'a>(
    i18n: &I18n,
    state: TransportState,
    on_toggle: Message,
    on_stop: Message,
) -> Element<'a, Message> {
    let (glyph, hint) = if state.playing {
        ("⏸", i18n.tr("audio-pause"))
    } else {
        ("▶", i18n.tr("audio-play"))
    };

    // Pressing before the clip is decoded queues a replay.
    let toggle = button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::TRANSPORT_BUTTON))
    .height(Length::Fixed(sizing::TRANSPORT_BUTTON))
    .style(styles::button::transport)
    .on_press(on_toggle);

    let toggle = tooltip(toggle, Text::new(hint), tooltip::Position::Top).gap(4);

    let stop = button(
        Text::new("⏹")
            .size(typography::BODY_LG)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::TRANSPORT_BUTTON))
    .height(Length::Fixed(sizing::TRANSPORT_BUTTON))
    .style(styles::button::secondary)
    .on_press_maybe(state.loaded.then_some(on_stop));
    let stop = tooltip(
        stop,
        Text::new(i18n.tr("audio-stop")),
        tooltip::Position::Top,
    )
    .gap(4);

    let timeline = progress_bar(0.0..=1.0, state.progress())
        .length(Length::Fill)
        .girth(sizing::PROGRESS_HEIGHT);

    let time = text(format!(
        "{} / {}",
        format_time(state.position),
        state.duration.map(format_time).unwrap_or_else(|| "-:--".to_string()),
    ))
    .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(toggle)
        .push(stop)
        .push(timeline)
        .push(time)
        .into()
}
