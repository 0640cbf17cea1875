// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Pages only report what the user did; the handlers here dispatch to the
//! quiz store, drive the audio channels and start the asynchronous work.
//! Every async result is tagged (fetch ticket, page generation or question
//! id) so superseded results are dropped on arrival.

use super::{Message, Route};
use crate::api::{ApiClient, ApiError, HealthStatus};
use crate::audio::{decode, AudioError, Clip, FeedbackAudio, OutputFormat, QuestionAudio};
use crate::domain::{Category, QuestionId, QuizQuestion};
use crate::i18n::fluent::I18n;
use crate::quiz::{Action, Effect, FetchRequest, FetchTicket, Store};
use crate::ui::category_select::{self, Event as CategoryEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::quiz_page::{self, Event as QuizEvent};
use crate::ui::results::{self, Event as ResultsEvent};
use iced::widget::image::Handle;
use iced::Task;

/// Mutable view of the application state the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub api: &'a Result<ApiClient, ApiError>,
    pub store: &'a mut Store,
    pub route: &'a mut Route,
    pub question_count: u32,
    pub categories: &'a mut category_select::State,
    pub quiz_page: &'a mut quiz_page::State,
    pub question_audio: &'a mut QuestionAudio,
    pub feedback_audio: &'a mut FeedbackAudio,
    pub output_format: OutputFormat,
}

// =============================================================================
// Navigation
// =============================================================================

/// Moves to `route` and starts whatever the page needs on entry.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    let target = route.guard(ctx.store.state());
    if target != route {
        tracing::info!(requested = %route, redirected = %target, "navigation redirected");
    } else {
        tracing::info!(path = %target, "navigate");
    }

    // Question audio only lives on the quiz page; each entry starts afresh.
    ctx.question_audio.release();
    ctx.quiz_page.reset();
    *ctx.route = target;

    match target {
        Route::CategorySelect => load_categories(ctx),
        Route::Quiz(category) => {
            ctx.store.dispatch(Action::SetCategory(category));
            start_quiz(ctx)
        }
        Route::Results(_) => Task::none(),
    }
}

fn load_categories(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let generation = ctx.categories.begin_load();
    match ctx.api {
        Ok(api) => {
            let api = api.clone();
            Task::perform(async move { api.categories().await }, move |result| {
                Message::CategoriesLoaded { generation, result }
            })
        }
        Err(err) => Task::done(Message::CategoriesLoaded {
            generation,
            result: Err(err.clone()),
        }),
    }
}

fn start_quiz(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let effect = ctx.store.dispatch(Action::StartLoading {
        count: ctx.question_count,
    });
    run_effect(ctx, effect)
}

// =============================================================================
// Store effects
// =============================================================================

/// Turns the effect of a dispatch into its side effects.
fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None | Effect::Stale => Task::none(),
        Effect::FetchStarted(request) => fetch_questions(ctx.api, request),
        Effect::Judged(judgement) => {
            if judgement.correct {
                let outcome = ctx.feedback_audio.play();
                tracing::debug!(?outcome, question = %judgement.question_id, "correct answer cue");
            }
            Task::none()
        }
        Effect::Advanced => sync_question(ctx),
        Effect::Completed => {
            let next = ctx
                .store
                .state()
                .category()
                .map_or(Route::CategorySelect, Route::Results);
            navigate(ctx, next)
        }
    }
}

fn fetch_questions(api: &Result<ApiClient, ApiError>, request: FetchRequest) -> Task<Message> {
    let ticket = request.ticket;
    match api {
        Ok(api) => {
            let api = api.clone();
            Task::perform(
                async move { api.quiz_questions(request.category, request.count).await },
                move |result| Message::QuestionsLoaded { ticket, result },
            )
        }
        Err(err) => Task::done(Message::QuestionsLoaded {
            ticket,
            result: Err(err.clone()),
        }),
    }
}

/// Follows the store's current question: reshuffles its choices, binds the
/// audio channel and starts the image download and audio decoding.
fn sync_question(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let question = ctx.store.state().current_question();
    let Some(id) = ctx.quiz_page.sync(question, &mut rand::thread_rng()) else {
        if question.is_none() {
            ctx.question_audio.release();
        }
        return Task::none();
    };
    let Some(question) = question.cloned() else {
        return Task::none();
    };

    ctx.question_audio.bind(id.clone());
    let Ok(api) = ctx.api else {
        return Task::none();
    };
    Task::batch([
        fetch_image(api, &question),
        decode_audio(api, &question, ctx.output_format),
    ])
}

fn fetch_image(api: &ApiClient, question: &QuizQuestion) -> Task<Message> {
    let api = api.clone();
    let url = question.question_image_url.clone();
    let id = question.id.clone();
    Task::perform(async move { api.fetch_bytes(&url).await }, move |result| {
        Message::ImageLoaded {
            question: id,
            result,
        }
    })
}

fn decode_audio(api: &ApiClient, question: &QuizQuestion, format: OutputFormat) -> Task<Message> {
    let url = api.resolve_url(&question.question_audio_url);
    let id = question.id.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || decode::decode_clip(&url, format))
                .await
                .unwrap_or_else(|err| Err(AudioError::Decode(err.to_string())))
        },
        move |result| Message::AudioDecoded {
            question: id,
            result,
        },
    )
}

// =============================================================================
// Page messages
// =============================================================================

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::GoHome => navigate(ctx, Route::CategorySelect),
        HeaderEvent::ToggleAutoPlay => {
            ctx.store.dispatch(Action::ToggleAutoPlay);
            Task::none()
        }
        HeaderEvent::SetVolume(volume) => {
            ctx.store.dispatch(Action::SetVolume(volume));
            ctx.question_audio.set_volume(volume);
            Task::none()
        }
    }
}

pub fn handle_category_message(
    ctx: &mut UpdateContext<'_>,
    message: &category_select::Message,
) -> Task<Message> {
    match category_select::update(message) {
        CategoryEvent::Reload => load_categories(ctx),
        CategoryEvent::StartQuiz(category) => {
            ctx.store.dispatch(Action::SetCategory(category));
            navigate(ctx, Route::Quiz(category))
        }
    }
}

pub fn handle_quiz_message(
    ctx: &mut UpdateContext<'_>,
    message: &quiz_page::Message,
) -> Task<Message> {
    match quiz_page::update(message) {
        QuizEvent::Retry => {
            ctx.quiz_page.reset();
            ctx.question_audio.release();
            start_quiz(ctx)
        }
        QuizEvent::GoHome => navigate(ctx, Route::CategorySelect),
        QuizEvent::ReplayAudio => {
            let outcome = ctx.question_audio.replay();
            tracing::debug!(?outcome, "replay requested");
            Task::none()
        }
        QuizEvent::TogglePlayback => {
            if ctx.question_audio.is_playing() {
                ctx.question_audio.pause();
            } else {
                let outcome = ctx.question_audio.play();
                tracing::debug!(?outcome, "play requested");
            }
            Task::none()
        }
        QuizEvent::StopAudio => {
            ctx.question_audio.stop();
            Task::none()
        }
        QuizEvent::Answer(answer) => {
            let effect = ctx.store.dispatch(Action::SelectAnswer(answer));
            run_effect(ctx, effect)
        }
        QuizEvent::Next => {
            let effect = ctx.store.dispatch(Action::NextQuestion);
            run_effect(ctx, effect)
        }
    }
}

pub fn handle_results_message(
    ctx: &mut UpdateContext<'_>,
    message: &results::Message,
) -> Task<Message> {
    match results::update(message) {
        ResultsEvent::Restart => {
            let next = ctx
                .route
                .category()
                .or(ctx.store.state().category())
                .map_or(Route::CategorySelect, Route::Quiz);
            ctx.store.dispatch(Action::ResetQuiz);
            navigate(ctx, next)
        }
        ResultsEvent::GoHome => navigate(ctx, Route::CategorySelect),
    }
}

// =============================================================================
// Async results
// =============================================================================

pub fn handle_categories_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<Vec<Category>, ApiError>,
) -> Task<Message> {
    let result = result.map_err(|err| {
        tracing::warn!(error = %err, "category fetch failed");
        err.into_load_error(ctx.i18n)
    });
    ctx.categories.finish_load(generation, result);
    Task::none()
}

pub fn handle_questions_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: FetchTicket,
    result: Result<Vec<QuizQuestion>, ApiError>,
) -> Task<Message> {
    let result = result.map_err(|err| {
        tracing::warn!(error = %err, generation = ticket.generation(), "question fetch failed");
        err.into_load_error(ctx.i18n)
    });
    let effect = ctx.store.dispatch(Action::QuestionsLoaded { ticket, result });
    if effect == Effect::Stale {
        return Task::none();
    }
    sync_question(ctx)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    question: &QuestionId,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    let handle = match result {
        Ok(bytes) => Some(Handle::from_bytes(bytes)),
        Err(err) => {
            tracing::warn!(%question, error = %err, "question image unavailable");
            None
        }
    };
    if !ctx.quiz_page.image_loaded(question, handle) {
        tracing::debug!(%question, "dropping image of a past question");
    }
    Task::none()
}

pub fn handle_audio_decoded(
    ctx: &mut UpdateContext<'_>,
    question: &QuestionId,
    result: Result<Clip, AudioError>,
) -> Task<Message> {
    let outcome = match result {
        Ok(clip) => {
            let autoplay = ctx.store.settings().autoplay_audio;
            ctx.question_audio.attach(question, clip, autoplay)
        }
        Err(err) => ctx.question_audio.fail(question, err),
    };
    tracing::debug!(%question, ?outcome, "question audio ready");
    Task::none()
}

pub fn handle_health_checked(result: Result<HealthStatus, ApiError>) {
    match result {
        Ok(health) if health.is_ok() => {
            tracing::info!(status = %health.status, timestamp = %health.timestamp, "backend is healthy");
        }
        Ok(health) => {
            tracing::warn!(status = %health.status, "backend reports degraded health");
        }
        Err(err) => tracing::warn!(error = %err, "backend health check failed"),
    }
}
