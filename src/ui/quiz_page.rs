// SPDX-License-Identifier: MPL-2.0
//! Quiz page (`/quiz/{category}`).
//!
//! Renders the current question of the store: image, audio transport,
//! shuffled choices and, once answered, the result panel. Page-local state
//! only caches what is derived per question (image, choice order).

use crate::domain::{QuestionId, QuizQuestion};
use crate::i18n::fluent::I18n;
use crate::quiz::{Phase, QuizState, Recovery, ShuffledChoices};
use crate::ui::components::audio_transport::{self, TransportState};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::components::loading;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::{
    button, mouse_area, progress_bar, scrollable, text, Column, Container, Row, Space, Text,
};
use iced::{alignment, Alignment, ContentFit, Element, Length, Theme};
use rand::Rng;

/// How a choice button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    /// Clickable, no answer yet.
    Open,
    /// The correct answer, revealed after judging.
    Correct,
    /// The user's pick, when it was wrong.
    Wrong,
    /// Any other choice after judging.
    Dimmed,
}

impl ChoiceState {
    fn icon(self) -> &'static str {
        match self {
            ChoiceState::Open | ChoiceState::Dimmed => "⚪",
            ChoiceState::Correct => "✅",
            ChoiceState::Wrong => "❌",
        }
    }
}

/// Visual state of one choice given the judged answer, if any.
#[must_use]
pub fn choice_state(
    choice: &str,
    correct_answer: &str,
    selected: Option<&str>,
    show_result: bool,
) -> ChoiceState {
    if !show_result {
        ChoiceState::Open
    } else if choice == correct_answer {
        ChoiceState::Correct
    } else if selected == Some(choice) {
        ChoiceState::Wrong
    } else {
        ChoiceState::Dimmed
    }
}

#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    question: Option<QuestionId>,
    image: ImageState,
    choices: ShuffledChoices,
}

impl State {
    /// Follows the store's current question. Returns its id when it just
    /// became current, so the caller can fetch its image and audio.
    pub fn sync<R: Rng + ?Sized>(
        &mut self,
        question: Option<&QuizQuestion>,
        rng: &mut R,
    ) -> Option<QuestionId> {
        let Some(question) = question else {
            self.reset();
            return None;
        };
        let reshuffled = self.choices.refresh(question, rng);
        if !reshuffled && self.question.as_ref() == Some(&question.id) {
            return None;
        }
        self.question = Some(question.id.clone());
        self.image = ImageState::Loading;
        Some(question.id.clone())
    }

    /// Stores the downloaded image of `id`. Returns `false` when `id` is no
    /// longer the current question.
    pub fn image_loaded(&mut self, id: &QuestionId, image: Option<Handle>) -> bool {
        if self.question.as_ref() != Some(id) {
            return false;
        }
        self.image = image.map_or(ImageState::Failed, ImageState::Ready);
        true
    }

    pub fn reset(&mut self) {
        self.question = None;
        self.image = ImageState::Loading;
        self.choices.clear();
    }

    #[must_use]
    pub fn question(&self) -> Option<&QuestionId> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        self.choices.order()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a QuizState,
    pub page: &'a State,
    pub transport: TransportState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Retry,
    BackToCategories,
    ImagePressed,
    TogglePlayback,
    StopAudio,
    Choose(String),
    Next,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Retry,
    GoHome,
    ReplayAudio,
    TogglePlayback,
    StopAudio,
    Answer(String),
    Next,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Retry => Event::Retry,
        Message::BackToCategories => Event::GoHome,
        Message::ImagePressed => Event::ReplayAudio,
        Message::TogglePlayback => Event::TogglePlayback,
        Message::StopAudio => Event::StopAudio,
        Message::Choose(answer) => Event::Answer(answer.clone()),
        Message::Next => Event::Next,
    }
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.quiz.phase() {
        Phase::Loading => return loading::view(ctx.i18n.tr("quiz-loading")),
        Phase::Error => {
            if let Some(error) = ctx.quiz.error() {
                return error_view(ctx.i18n, error.message(ctx.i18n), error.recovery());
            }
        }
        _ => {}
    }

    let Some(question) = ctx.quiz.current_question() else {
        return centered_error_view(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .message(ctx.i18n.tr("quiz-nothing-to-show"))
                .secondary_action(ctx.i18n.tr("button-choose-category"), Message::BackToCategories),
        );
    };

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(progress_view(ctx.i18n, ctx.quiz))
        .push(question_card(&ctx, question))
        .push(choices_view(&ctx, question));

    if ctx.quiz.show_result() {
        content = content.push(result_panel(&ctx, question));
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .into()
}

fn error_view<'a>(i18n: &I18n, message: String, recovery: Recovery) -> Element<'a, Message> {
    let display = ErrorDisplay::new(ErrorSeverity::Error).message(message);
    let display = match recovery {
        Recovery::Retry => display.action(i18n.tr("button-retry"), Message::Retry),
        Recovery::ChooseAnotherCategory => {
            display.action(i18n.tr("button-back-to-categories"), Message::BackToCategories)
        }
    };
    centered_error_view(
        display.secondary_action(i18n.tr("button-choose-category"), Message::BackToCategories),
    )
}

fn progress_view<'a>(i18n: &I18n, quiz: &QuizState) -> Element<'a, Message> {
    let total = quiz.total_questions().max(1);
    let current = quiz.current_index() + 1;

    let label = Text::new(i18n.tr_with_args(
        "quiz-progress",
        &[
            ("current", &current.to_string()),
            ("total", &quiz.total_questions().to_string()),
        ],
    ))
    .size(typography::BODY);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(progress_bar(0.0..=total as f32, current as f32).girth(sizing::PROGRESS_HEIGHT))
        .push(label)
        .into()
}

fn question_card<'a>(ctx: &ViewContext<'a>, question: &'a QuizQuestion) -> Element<'a, Message> {
    let prompt = Text::new(ctx.i18n.tr("quiz-prompt")).size(typography::TITLE_MD);

    let picture: Element<'a, Message> = match ctx.page.image() {
        ImageState::Ready(handle) if ctx.page.question() == Some(&question.id) => {
            image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        ImageState::Failed => Text::new(ctx.i18n.tr("quiz-image-error"))
            .size(typography::BODY)
            .into(),
        _ => Text::new(ctx.i18n.tr("quiz-image-loading"))
            .size(typography::BODY)
            .into(),
    };

    let frame = Container::new(picture)
        .width(Length::Fixed(sizing::QUESTION_IMAGE_WIDTH))
        .height(Length::Fixed(sizing::QUESTION_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_frame);

    let hint = Text::new(ctx.i18n.tr("quiz-tap-to-play"))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(prompt)
        .push(mouse_area(frame).on_press(Message::ImagePressed))
        .push(hint)
        .push(
            Container::new(audio_transport::view(
                ctx.i18n,
                ctx.transport,
                Message::TogglePlayback,
                Message::StopAudio,
            ))
            .max_width(sizing::QUESTION_IMAGE_WIDTH),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}

fn choices_view<'a>(ctx: &ViewContext<'a>, question: &'a QuizQuestion) -> Element<'a, Message> {
    let selected = ctx.quiz.selected_answer();
    let show_result = ctx.quiz.show_result();

    let buttons: Vec<Element<'a, Message>> = ctx
        .page
        .choices()
        .iter()
        .map(|choice| {
            let state = choice_state(choice, &question.correct_answer, selected, show_result);
            let label = Row::new()
                .spacing(spacing::SM)
                .align_y(Alignment::Center)
                .push(Text::new(state.icon()).size(typography::BODY_LG))
                .push(Text::new(choice.as_str()).size(typography::BODY_LG));

            button(label)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::choice(state))
                .on_press_maybe(
                    (state == ChoiceState::Open).then(|| Message::Choose(choice.clone())),
                )
                .into()
        })
        .collect();

    // Two choices per row
    let mut grid = Column::new().spacing(spacing::MD);
    let mut buttons = buttons.into_iter();
    while let Some(first) = buttons.next() {
        let mut row = Row::new().spacing(spacing::MD).push(first);
        row = match buttons.next() {
            Some(second) => row.push(second),
            None => row.push(Space::new().width(Length::Fill)),
        };
        grid = grid.push(row);
    }
    grid.into()
}

fn result_panel<'a>(ctx: &ViewContext<'a>, question: &'a QuizQuestion) -> Element<'a, Message> {
    let correct = ctx.quiz.last_answer_correct().unwrap_or(false);
    let (emoji, verdict) = if correct {
        ("🎉", ctx.i18n.tr("result-correct"))
    } else {
        ("😔", ctx.i18n.tr("result-incorrect"))
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(emoji).size(typography::DISPLAY))
        .push(Text::new(verdict).size(typography::TITLE_LG));

    if !correct {
        body = body.push(
            Text::new(ctx.i18n.tr_with_args(
                "result-correct-answer-was",
                &[("answer", question.correct_answer.as_str())],
            ))
            .size(typography::BODY_LG),
        );
    }

    if !question.explanation.is_empty() {
        body = body
            .push(Text::new(ctx.i18n.tr("result-explanation")).size(typography::TITLE_MD))
            .push(
                Text::new(question.explanation.as_str())
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            );
    }

    let next_label = if ctx.quiz.is_last_question() {
        ctx.i18n.tr("button-finish")
    } else {
        ctx.i18n.tr("button-next")
    };
    body = body.push(
        button(Text::new(next_label).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
            .on_press(Message::Next),
    );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::answer_result(correct))
        .into()
}
