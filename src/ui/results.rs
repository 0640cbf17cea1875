// SPDX-License-Identifier: MPL-2.0
//! Results page (`/quiz/{category}/results`).

use crate::domain::{CategoryId, ScoreSummary};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub category: CategoryId,
    pub summary: ScoreSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Restart,
    BackToCategories,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Restart,
    GoHome,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Restart => Event::Restart,
        Message::BackToCategories => Event::GoHome,
    }
}

/// Localized headline naming the category, e.g. "国旗クイズの結果".
#[must_use]
pub fn subtitle(i18n: &I18n, category: CategoryId) -> String {
    let name = i18n.tr(category.name_key());
    i18n.tr_with_args("results-subtitle", &[("category", &name)])
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let summary = ctx.summary;

    let title = Text::new(ctx.i18n.tr("results-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(subtitle(ctx.i18n, ctx.category))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });

    let score = Text::new(format!("{} / {}", summary.correct, summary.total))
        .size(typography::TITLE_XL)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).brand),
        });

    let accuracy = progress_bar(0.0..=100.0, summary.percentage as f32)
        .length(Length::Fixed(sizing::RESULT_RING_WIDTH))
        .girth(sizing::PROGRESS_HEIGHT);

    let accuracy_label = Text::new(ctx.i18n.tr_with_args(
        "results-accuracy",
        &[("percentage", &summary.percentage.to_string())],
    ))
    .size(typography::BODY_LG);

    let grade = Text::new(ctx.i18n.tr(summary.grade.message_key())).size(typography::TITLE_MD);

    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("button-restart")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Restart),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-choose-category")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary)
                .on_press(Message::BackToCategories),
        );

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("🎯").size(typography::DISPLAY))
        .push(title)
        .push(subtitle)
        .push(score)
        .push(accuracy)
        .push(accuracy_label)
        .push(grade)
        .push(Container::new(buttons).padding([spacing::MD, 0.0]));

    Container::new(
        Container::new(card)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ja;

    #[test]
    fn subtitle_uses_category_display_name() {
        let i18n = ja();
        assert_eq!(subtitle(&i18n, CategoryId::Flags), "国旗クイズの結果");
        assert_eq!(subtitle(&i18n, CategoryId::Words), "言葉クイズの結果");
    }

    #[test]
    fn restart_and_home_events() {
        assert_eq!(update(&Message::Restart), Event::Restart);
        assert_eq!(update(&Message::BackToCategories), Event::GoHome);
    }
}
