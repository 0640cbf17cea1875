// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module renders the header and the page of the current route.

use super::{Message, Route};
use crate::audio::QuestionAudio;
use crate::i18n::fluent::I18n;
use crate::quiz::Store;
use crate::ui::components::audio_transport::TransportState;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{category_select, header, quiz_page, results};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub store: &'a Store,
    pub categories: &'a category_select::State,
    pub quiz_page: &'a quiz_page::State,
    pub question_audio: &'a QuestionAudio,
    pub notice: Option<&'a str>,
}

/// Renders the header and the page of the active route.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings = ctx.store.settings();
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        show_back: ctx.route != Route::CategorySelect,
        autoplay: settings.autoplay_audio,
        volume: settings.volume,
    })
    .map(Message::Header);

    let page: Element<'_, Message> = match ctx.route {
        Route::CategorySelect => category_select::view(category_select::ViewContext {
            i18n: ctx.i18n,
            state: ctx.categories,
        })
        .map(Message::CategorySelect),
        Route::Quiz(_) => quiz_page::view(quiz_page::ViewContext {
            i18n: ctx.i18n,
            quiz: ctx.store.state(),
            page: ctx.quiz_page,
            transport: transport_state(ctx.question_audio),
        })
        .map(Message::Quiz),
        Route::Results(category) => results::view(results::ViewContext {
            i18n: ctx.i18n,
            category,
            summary: ctx.store.state().summary(),
        })
        .map(Message::Results),
    };

    let mut column = Column::new().push(header);

    if let Some(key) = ctx.notice {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .padding([spacing::XXS, spacing::LG]),
        );
    }

    column = column.push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn transport_state(audio: &QuestionAudio) -> TransportState {
    TransportState {
        loaded: audio.is_loaded(),
        playing: audio.is_playing(),
        position: audio.position(),
        duration: audio.duration(),
    }
}
