// SPDX-License-Identifier: MPL-2.0
//! The closed set of quiz state mutations.

use super::state::LoadError;
use super::store::FetchTicket;
use crate::domain::{CategoryId, QuizQuestion, Volume};

#[derive(Debug, Clone)]
pub enum Action {
    /// Records the category of the next session.
    SetCategory(CategoryId),
    /// Clears the session and issues a new fetch for the current category.
    StartLoading { count: u32 },
    /// Completion of the fetch identified by `ticket`.
    QuestionsLoaded {
        ticket: FetchTicket,
        result: Result<Vec<QuizQuestion>, LoadError>,
    },
    /// Ends the current loading attempt with an error.
    SetError(LoadError),
    /// Answers the current question with one of its choices.
    SelectAnswer(String),
    /// Leaves the result panel for the next question, or completes the session.
    NextQuestion,
    /// Back to an empty session, keeping the category.
    ResetQuiz,
    ToggleAutoPlay,
    SetVolume(Volume),
}
