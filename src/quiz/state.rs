// SPDX-License-Identifier: MPL-2.0
//! Session state and settings read by the pages.
//!
//! Fields are private; the only writer is [`Store`](super::Store).

use crate::domain::{CategoryId, QuizQuestion, ScoreSummary, Volume};
use crate::i18n::fluent::I18n;
use std::fmt;

/// Why a loading attempt ended without questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Timeout, unreachable backend or an unexpected failure.
    Request(String),
    /// Message reported by the backend in its error body.
    Backend(String),
    /// The category has no questions to offer.
    NoQuestions(Option<CategoryId>),
}

/// What the user is offered after a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    Retry,
    ChooseAnotherCategory,
}

impl LoadError {
    #[must_use]
    pub fn recovery(&self) -> Recovery {
        match self {
            LoadError::Request(_) | LoadError::Backend(_) => Recovery::Retry,
            LoadError::NoQuestions(_) => Recovery::ChooseAnotherCategory,
        }
    }

    /// The single user-facing message for this error.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        match self {
            LoadError::Request(message) | LoadError::Backend(message) => message.clone(),
            LoadError::NoQuestions(category) => {
                let category = category.map(CategoryId::as_str).unwrap_or_default();
                i18n.tr_with_args("quiz-no-questions", &[("category", category)])
            }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Request(message) => write!(f, "request failed: {message}"),
            LoadError::Backend(message) => write!(f, "backend error: {message}"),
            LoadError::NoQuestions(Some(category)) => {
                write!(f, "no questions for category {category}")
            }
            LoadError::NoQuestions(None) => write!(f, "no questions"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Derived position of the session in the progression state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Answering,
    ShowingResult,
    Completed,
}

/// Process-wide playback preferences. Survive quiz restarts, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub autoplay_audio: bool,
    pub volume: Volume,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay_audio: crate::config::DEFAULT_AUTOPLAY,
            volume: Volume::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    pub(super) category: Option<CategoryId>,
    pub(super) questions: Vec<QuizQuestion>,
    pub(super) current_index: usize,
    pub(super) is_loading: bool,
    pub(super) error: Option<LoadError>,
    pub(super) selected_answer: Option<String>,
    pub(super) show_result: bool,
    pub(super) score: usize,
    pub(super) total_questions: usize,
    pub(super) completed: bool,
}

impl QuizState {
    /// Empty session shape for `category`.
    pub(super) fn empty(category: Option<CategoryId>) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn show_result(&self) -> bool {
        self.show_result
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    /// Whether the answer shown in the result panel was correct.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        let question = self.current_question()?;
        let answer = self.selected_answer.as_deref()?;
        Some(question.is_correct(answer))
    }

    /// A session exists once questions were loaded for a category.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.category.is_some() && self.total_questions > 0
    }

    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.total_questions)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.completed {
            Phase::Completed
        } else if self.questions.is_empty() {
            Phase::Idle
        } else if self.show_result {
            Phase::ShowingResult
        } else {
            Phase::Answering
        }
    }
}
