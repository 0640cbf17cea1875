// SPDX-License-Identifier: MPL-2.0
//! Category selection page (`/`).
//!
//! Lists the categories served by the backend. Every visit refetches the
//! list; results of superseded fetches are dropped by generation.

use crate::domain::{Category, CategoryId};
use crate::i18n::fluent::I18n;
use crate::quiz::LoadError;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::components::loading;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Default)]
pub struct State {
    categories: Vec<Category>,
    loading: bool,
    error: Option<LoadError>,
    generation: u64,
}

impl State {
    /// Starts a new fetch and returns the generation its result must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a fetch result. Returns `false` for a superseded generation.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Category>, LoadError>,
    ) -> bool {
        if generation != self.generation || !self.loading {
            tracing::debug!(generation, current = self.generation, "dropping stale category list");
            return false;
        }
        self.loading = false;
        match result {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "categories loaded");
                self.categories = categories;
                self.error = None;
            }
            Err(error) => {
                self.categories.clear();
                self.error = Some(error);
            }
        }
        true
    }

    /// Generation of the most recent fetch.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Retry,
    Select(CategoryId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Reload,
    StartQuiz(CategoryId),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Retry => Event::Reload,
        Message::Select(category) => Event::StartQuiz(*category),
    }
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.state.is_loading() {
        return loading::view(ctx.i18n.tr("category-loading"));
    }

    if let Some(error) = ctx.state.error() {
        return centered_error_view(
            ErrorDisplay::new(ErrorSeverity::Error)
                .title(ctx.i18n.tr("category-load-failed"))
                .message(error.message(ctx.i18n))
                .action(ctx.i18n.tr("button-retry"), Message::Retry),
        );
    }

    let heading = Text::new(ctx.i18n.tr("category-select-heading")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("category-select-subtitle"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });

    let cards = ctx
        .state
        .categories()
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, category| {
            row.push(category_card(ctx.i18n, category))
        })
        .wrap()
        .vertical_spacing(spacing::LG);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(subtitle)
        .push(Container::new(cards).padding([spacing::LG, 0.0]));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .into()
}

fn category_card<'a>(i18n: &I18n, category: &'a Category) -> Element<'a, Message> {
    let icon = Container::new(Text::new(category.id.icon()).size(typography::DISPLAY))
        .center_x(Length::Fixed(sizing::CATEGORY_ICON))
        .center_y(Length::Fixed(sizing::CATEGORY_ICON))
        .style(styles::container::icon_badge);

    let start = Container::new(Text::new(i18n.tr("category-start")).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::call_to_action);

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(Text::new(category.name.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(category.description.as_str())
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_secondary),
                }),
        )
        .push(start);

    button(body)
        .width(Length::Fixed(sizing::CATEGORY_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::button::card)
        .on_press(Message::Select(category.id))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> Category {
        Category {
            id: CategoryId::Flags,
            name: "国旗".into(),
            description: "世界の国旗".into(),
            thumbnail: "/images/flags.png".into(),
        }
    }

    #[test]
    fn selecting_a_card_starts_that_quiz() {
        assert_eq!(
            update(&Message::Select(CategoryId::Flags)),
            Event::StartQuiz(CategoryId::Flags)
        );
        assert_eq!(update(&Message::Retry), Event::Reload);
    }

    #[test]
    fn card_labels_are_translated() {
        let i18n = crate::test_utils::ja();
        assert_eq!(i18n.tr("category-start"), "🚀 学習を開始");
        assert_eq!(flags().id.icon(), "🏳️");
    }

    #[test]
    fn latest_generation_wins() {
        let mut state = State::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.finish_load(first, Ok(vec![flags()])));
        assert!(state.is_loading());
        assert!(state.categories().is_empty());

        assert!(state.finish_load(second, Ok(vec![flags()])));
        assert!(!state.is_loading());
        assert_eq!(state.categories().len(), 1);
    }

    #[test]
    fn error_clears_previous_list() {
        let mut state = State::default();
        let generation = state.begin_load();
        state.finish_load(generation, Ok(vec![flags()]));

        let generation = state.begin_load();
        state.finish_load(generation, Err(LoadError::Request("offline".into())));
        assert!(state.categories().is_empty());
        assert_eq!(state.error(), Some(&LoadError::Request("offline".into())));
    }

    #[test]
    fn retry_clears_error_while_loading() {
        let mut state = State::default();
        let generation = state.begin_load();
        state.finish_load(generation, Err(LoadError::Request("offline".into())));

        state.begin_load();
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }
}
