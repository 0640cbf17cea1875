// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, HealthStatus};
use crate::audio::{AudioError, Clip};
use crate::domain::{Category, QuestionId, QuizQuestion};
use crate::quiz::FetchTicket;
use crate::ui::{category_select, header, quiz_page, results};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page messages and carry the results of asynchronous work back in.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    CategorySelect(category_select::Message),
    Quiz(quiz_page::Message),
    Results(results::Message),
    /// Category list fetched for the given page generation.
    CategoriesLoaded {
        generation: u64,
        result: Result<Vec<Category>, ApiError>,
    },
    /// Question list fetched for `ticket`.
    QuestionsLoaded {
        ticket: FetchTicket,
        result: Result<Vec<QuizQuestion>, ApiError>,
    },
    /// Question image downloaded.
    ImageLoaded {
        question: QuestionId,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Question audio decoded to the output format.
    AudioDecoded {
        question: QuestionId,
        result: Result<Clip, AudioError>,
    },
    HealthChecked(Result<HealthStatus, ApiError>),
    /// Periodic tick refreshing the audio position while a clip plays.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Backend base URL, overriding config and `QUIZ_API_BASE_URL`.
    pub api_url: Option<String>,
    /// Questions per session, overriding config.
    pub question_count: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `QUIZ_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Page to open first, e.g. `/quiz/flags`.
    pub start_route: Option<String>,
}
