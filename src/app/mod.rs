// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct wires together the quiz store, the audio channels, the
//! backend client and the page states, and translates messages into side
//! effects like fetches, audio decoding or navigation. Policy decisions
//! (which page fetches what, when audio stops) live in [`update`] so they are
//! easy to audit in one place.

mod message;
pub mod paths;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::api::{ApiClient, ApiError};
use crate::audio::output::{self, DeviceSink};
use crate::audio::{FeedbackAudio, OutputFormat, QuestionAudio, SinkFactory};
use crate::config::{self, Config};
use crate::domain::Volume;
use crate::i18n::fluent::I18n;
use crate::quiz::{Settings, Store};
use crate::ui::theming::ThemeMode;
use crate::ui::{category_select, quiz_page};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    /// Backend client, or the reason it could not be built.
    api: Result<ApiClient, ApiError>,
    store: Store,
    route: Route,
    question_count: u32,
    categories: category_select::State,
    quiz_page: quiz_page::State,
    question_audio: QuestionAudio,
    feedback_audio: FeedbackAudio,
    /// Format question clips are decoded to.
    output_format: OutputFormat,
    /// i18n key of a startup warning shown under the header.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("phase", &self.store.state().phase())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and opens the start page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let (mut app, task) = Self::with_config(
            flags,
            &config,
            DeviceSink::factory(),
            output::default_output_format(),
        );
        app.notice = config_warning;
        (app, task)
    }

    /// Builds the application from an already loaded configuration and an
    /// audio output. Also used by tests with recording sinks.
    fn with_config(
        flags: Flags,
        config: &Config,
        sinks: SinkFactory,
        output_format: OutputFormat,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        let base_url = flags.api_url.unwrap_or_else(|| config.api.base_url());
        let question_count = flags
            .question_count
            .unwrap_or_else(|| config.api.question_count());
        if question_count > config::BACKEND_MAX_QUESTION_COUNT {
            tracing::warn!(
                question_count,
                max = config::BACKEND_MAX_QUESTION_COUNT,
                "question count exceeds what the backend usually serves"
            );
        }

        let api = ApiClient::new(&base_url, config.api.timeout());
        if let Err(err) = &api {
            tracing::error!(error = %err, "cannot build API client");
        }

        let settings = Settings {
            autoplay_audio: config.audio.autoplay.unwrap_or(config::DEFAULT_AUTOPLAY),
            volume: Volume::new(config.audio.volume.unwrap_or(config::DEFAULT_VOLUME)),
        };
        let feedback_volume = Volume::new(
            config
                .audio
                .feedback_volume
                .unwrap_or(config::DEFAULT_FEEDBACK_VOLUME),
        );

        let start = match flags.start_route.as_deref() {
            Some(path) => Route::parse(path).unwrap_or_else(|| {
                tracing::warn!(path, "unknown start route, opening category list");
                Route::CategorySelect
            }),
            None => Route::CategorySelect,
        };

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            api,
            store: Store::new(settings),
            route: Route::CategorySelect,
            question_count,
            categories: category_select::State::default(),
            quiz_page: quiz_page::State::default(),
            question_audio: QuestionAudio::new(sinks.clone(), settings.volume),
            feedback_audio: FeedbackAudio::new(sinks, feedback_volume),
            output_format,
            notice: None,
        };

        tracing::info!(%base_url, question_count, route = %start, "starting quiz client");
        let health = app.check_health();
        let open = app.navigate(start);
        (app, Task::batch([health, open]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.route {
            Route::CategorySelect => app_name,
            Route::Quiz(category) | Route::Results(category) => {
                let category_name = self.i18n.tr(category.name_key());
                format!("{category_name} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            matches!(self.route, Route::Quiz(_)),
            self.question_audio.is_playing(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::CategorySelect(message) => {
                update::handle_category_message(&mut ctx, &message)
            }
            Message::Quiz(message) => update::handle_quiz_message(&mut ctx, &message),
            Message::Results(message) => update::handle_results_message(&mut ctx, &message),
            Message::CategoriesLoaded { generation, result } => {
                update::handle_categories_loaded(&mut ctx, generation, result)
            }
            Message::QuestionsLoaded { ticket, result } => {
                update::handle_questions_loaded(&mut ctx, ticket, result)
            }
            Message::ImageLoaded { question, result } => {
                update::handle_image_loaded(&mut ctx, &question, result)
            }
            Message::AudioDecoded { question, result } => {
                update::handle_audio_decoded(&mut ctx, &question, result)
            }
            Message::HealthChecked(result) => {
                update::handle_health_checked(result);
                Task::none()
            }
            // Only redraws the transport position.
            Message::Tick(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            store: &self.store,
            categories: &self.categories,
            quiz_page: &self.quiz_page,
            question_audio: &self.question_audio,
            notice: self.notice.as_deref(),
        })
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        let mut ctx = self.update_context();
        update::navigate(&mut ctx, route)
    }

    fn check_health(&self) -> Task<Message> {
        match &self.api {
            Ok(api) => {
                let api = api.clone();
                Task::perform(async move { api.health().await }, Message::HealthChecked)
            }
            Err(err) => Task::done(Message::HealthChecked(Err(err.clone()))),
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            api: &self.api,
            store: &mut self.store,
            route: &mut self.route,
            question_count: self.question_count,
            categories: &mut self.categories,
            quiz_page: &mut self.quiz_page,
            question_audio: &mut self.question_audio,
            feedback_audio: &mut self.feedback_audio,
            output_format: self.output_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::sink::testing::{clip, failing_factory, recording_factory, SinkLog};
    use crate::domain::question::fixtures::question;
    use crate::domain::{CategoryId, QuizQuestion};
    use crate::quiz::{Phase, Recovery};
    use crate::ui::{header, quiz_page, results};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app_with_sinks(flags: Flags, sinks: SinkFactory) -> App {
        let flags = Flags {
            lang: Some("ja".to_string()),
            api_url: Some("http://127.0.0.1:9".to_string()),
            ..flags
        };
        let (app, _task) =
            App::with_config(flags, &Config::default(), sinks, OutputFormat::default());
        app
    }

    fn app_with(flags: Flags) -> (App, Rc<RefCell<SinkLog>>) {
        let (factory, log) = recording_factory();
        (app_with_sinks(flags, factory), log)
    }

    fn app() -> (App, Rc<RefCell<SinkLog>>) {
        app_with(Flags::default())
    }

    fn five_questions() -> Vec<QuizQuestion> {
        (1..=5)
            .map(|i| {
                question(
                    &format!("q{i}"),
                    CategoryId::Flags,
                    &format!("answer{i}"),
                    &["wrong-a", "wrong-b", "wrong-c"],
                )
            })
            .collect()
    }

    /// Opens the flags quiz and delivers `questions` for the pending fetch.
    fn load_quiz(app: &mut App, questions: Vec<QuizQuestion>) {
        let _ = app.update(Message::CategorySelect(
            category_select::Message::Select(CategoryId::Flags),
        ));
        let ticket = app.store.pending_fetch().expect("fetch pending");
        let _ = app.update(Message::QuestionsLoaded {
            ticket,
            result: Ok(questions),
        });
    }

    fn current_id(app: &App) -> crate::domain::QuestionId {
        app.store
            .state()
            .current_question()
            .map(|q| q.id.clone())
            .expect("current question")
    }

    #[test]
    fn starts_on_category_list_and_fetches() {
        let (app, _) = app();
        assert_eq!(app.route, Route::CategorySelect);
        assert!(app.categories.is_loading());
        assert_eq!(app.title(), "音声スライド学習");
    }

    #[test]
    fn start_route_opens_quiz_directly() {
        let (app, _) = app_with(Flags {
            start_route: Some("/quiz/animals".into()),
            ..Flags::default()
        });
        assert_eq!(app.route, Route::Quiz(CategoryId::Animals));
        assert_eq!(app.store.state().category(), Some(CategoryId::Animals));
        assert_eq!(app.store.state().phase(), Phase::Loading);
    }

    #[test]
    fn start_route_to_results_without_session_is_redirected() {
        let (app, _) = app_with(Flags {
            start_route: Some("/quiz/flags/results".into()),
            ..Flags::default()
        });
        assert_eq!(app.route, Route::CategorySelect);
    }

    #[test]
    fn selecting_category_navigates_and_loads() {
        let (mut app, _) = app();
        let _ = app.update(Message::CategorySelect(
            category_select::Message::Select(CategoryId::Flags),
        ));

        assert_eq!(app.route, Route::Quiz(CategoryId::Flags));
        assert_eq!(app.route.path(), "/quiz/flags");
        assert_eq!(app.store.state().category(), Some(CategoryId::Flags));
        assert!(app.store.state().is_loading());
        assert!(app.store.pending_fetch().is_some());
    }

    #[test]
    fn loaded_questions_bind_audio_and_shuffle_choices() {
        let (mut app, _) = app();
        load_quiz(&mut app, five_questions());

        let id = current_id(&app);
        assert_eq!(app.question_audio.bound(), Some(&id));
        assert_eq!(app.quiz_page.question(), Some(&id));
        assert_eq!(app.quiz_page.choices().len(), 4);
    }

    #[test]
    fn decoded_clip_autoplays_for_current_question_only() {
        let (mut app, log) = app();
        load_quiz(&mut app, five_questions());
        let id = current_id(&app);

        let _ = app.update(Message::AudioDecoded {
            question: crate::domain::QuestionId::new("elsewhere"),
            result: Ok(clip(2)),
        });
        assert_eq!(log.borrow().plays, 0);

        let _ = app.update(Message::AudioDecoded {
            question: id,
            result: Ok(clip(2)),
        });
        assert_eq!(log.borrow().plays, 1);
        assert!(app.question_audio.is_playing());
    }

    #[test]
    fn autoplay_off_waits_for_tap() {
        let (mut app, log) = app();
        let _ = app.update(Message::Header(header::Message::AutoPlayToggled(false)));
        assert!(!app.store.settings().autoplay_audio);

        load_quiz(&mut app, five_questions());
        let id = current_id(&app);
        let _ = app.update(Message::AudioDecoded {
            question: id,
            result: Ok(clip(2)),
        });
        assert_eq!(log.borrow().plays, 0);

        let _ = app.update(Message::Quiz(quiz_page::Message::ImagePressed));
        assert_eq!(log.borrow().plays, 1);
    }

    #[test]
    fn correct_answer_plays_feedback_cue() {
        let (mut app, log) = app();
        load_quiz(&mut app, five_questions());
        let created_before = log.borrow().created;

        let _ = app.update(Message::Quiz(quiz_page::Message::Choose("answer1".into())));
        assert_eq!(app.store.state().score(), 1);
        assert!(app.feedback_audio.is_ready());
        assert_eq!(log.borrow().created, created_before + 1);
    }

    #[test]
    fn wrong_answer_is_silent() {
        let (mut app, _) = app();
        load_quiz(&mut app, five_questions());

        let _ = app.update(Message::Quiz(quiz_page::Message::Choose("wrong-a".into())));
        assert_eq!(app.store.state().score(), 0);
        assert!(app.store.state().show_result());
        assert!(!app.feedback_audio.is_ready());
    }

    #[test]
    fn finishing_last_question_shows_results() {
        let (mut app, _) = app();
        load_quiz(&mut app, five_questions());

        for i in 1..=5 {
            let _ = app.update(Message::Quiz(quiz_page::Message::Choose(format!("answer{i}"))));
            let _ = app.update(Message::Quiz(quiz_page::Message::Next));
        }

        assert_eq!(app.route, Route::Results(CategoryId::Flags));
        assert_eq!(app.store.state().score(), 5);
        assert_eq!(app.store.state().current_index(), 4);
        assert_eq!(app.question_audio.bound(), None);
    }

    #[test]
    fn missing_audio_device_never_blocks_the_quiz() {
        let mut app = app_with_sinks(Flags::default(), failing_factory());
        load_quiz(&mut app, five_questions());

        for i in 1..=5 {
            let id = current_id(&app);
            let phase = app.store.state().phase();

            let _ = app.update(Message::AudioDecoded {
                question: id,
                result: Ok(clip(2)),
            });
            assert_eq!(app.store.state().phase(), phase);
            assert!(!app.question_audio.is_playing());

            let _ = app.update(Message::Quiz(quiz_page::Message::ImagePressed));
            assert_eq!(app.store.state().phase(), phase);

            let _ = app.update(Message::Quiz(quiz_page::Message::Choose(format!("answer{i}"))));
            assert_eq!(app.store.state().score(), i);
            assert!(!app.feedback_audio.is_ready());
            let _ = app.update(Message::Quiz(quiz_page::Message::Next));
        }

        assert_eq!(app.route, Route::Results(CategoryId::Flags));
        assert_eq!(app.store.state().score(), 5);
    }

    #[test]
    fn restart_reloads_same_category() {
        let (mut app, _) = app();
        load_quiz(&mut app, five_questions());
        for i in 1..=5 {
            let _ = app.update(Message::Quiz(quiz_page::Message::Choose(format!("answer{i}"))));
            let _ = app.update(Message::Quiz(quiz_page::Message::Next));
        }

        let _ = app.update(Message::Results(results::Message::Restart));
        assert_eq!(app.route, Route::Quiz(CategoryId::Flags));
        assert_eq!(app.store.state().score(), 0);
        assert!(app.store.state().is_loading());
    }

    #[test]
    fn empty_question_list_offers_other_category() {
        let (mut app, _) = app();
        load_quiz(&mut app, Vec::new());

        let error = app.store.state().error().expect("error");
        assert!(!app.store.state().is_loading());
        assert_eq!(error.recovery(), Recovery::ChooseAnotherCategory);
    }

    #[test]
    fn transport_errors_are_translated() {
        let (mut app, _) = app();
        let _ = app.update(Message::CategorySelect(
            category_select::Message::Select(CategoryId::Flags),
        ));
        let ticket = app.store.pending_fetch().expect("fetch pending");
        let _ = app.update(Message::QuestionsLoaded {
            ticket,
            result: Err(ApiError::Timeout),
        });

        let error = app.store.state().error().expect("error");
        assert_eq!(
            error.message(&app.i18n),
            "リクエストがタイムアウトしました。しばらく後に再試行してください。"
        );
        assert_eq!(error.recovery(), Recovery::Retry);

        let _ = app.update(Message::Quiz(quiz_page::Message::Retry));
        assert!(app.store.state().is_loading());
        assert_ne!(app.store.pending_fetch(), Some(ticket));
    }

    #[test]
    fn leaving_quiz_releases_audio() {
        let (mut app, log) = app();
        load_quiz(&mut app, five_questions());
        let id = current_id(&app);
        let _ = app.update(Message::AudioDecoded {
            question: id,
            result: Ok(clip(2)),
        });
        assert!(app.question_audio.is_playing());

        let _ = app.update(Message::Header(header::Message::BackPressed));
        assert_eq!(app.route, Route::CategorySelect);
        assert!(!app.question_audio.is_playing());
        assert!(app.question_audio.bound().is_none());
        assert!(log.borrow().pauses > 0);
    }

    #[test]
    fn volume_change_reaches_playing_clip() {
        let (mut app, log) = app();
        load_quiz(&mut app, five_questions());
        let id = current_id(&app);
        let _ = app.update(Message::AudioDecoded {
            question: id,
            result: Ok(clip(2)),
        });

        let _ = app.update(Message::Header(header::Message::VolumeChanged(0.3)));
        assert_eq!(app.store.settings().volume, Volume::new(0.3));
        assert_eq!(log.borrow().volume, Some(Volume::new(0.3)));
    }

    #[test]
    fn stale_category_list_is_ignored() {
        let (mut app, _) = app();
        let first = app.categories.generation();
        let _ = app.update(Message::CategorySelect(category_select::Message::Retry));

        let _ = app.update(Message::CategoriesLoaded {
            generation: first,
            result: Ok(Vec::new()),
        });
        assert!(app.categories.is_loading());
    }

    #[test]
    fn title_names_category_during_quiz() {
        let (mut app, _) = app();
        load_quiz(&mut app, five_questions());
        assert_eq!(app.title(), "国旗 - 音声スライド学習");
    }
}
