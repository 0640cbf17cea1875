// SPDX-License-Identifier: MPL-2.0
//! Reducer-style owner of the quiz state.

use super::action::Action;
use super::state::{LoadError, Phase, QuizState, Settings};
use crate::domain::{CategoryId, QuestionId, QuizQuestion};

/// Generation stamp of a question fetch.
///
/// Tickets are only created by [`Store`]; a ticket is current until the next
/// `StartLoading`, `SetError` or `ResetQuiz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Everything needed to issue the fetch a ticket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub category: CategoryId,
    pub count: u32,
}

/// Outcome of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub question_id: QuestionId,
    pub answer: String,
    pub correct: bool,
}

/// Side effect requested by a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run this fetch and feed its result back as `QuestionsLoaded`.
    FetchStarted(FetchRequest),
    /// A fetch result arrived for a ticket that is no longer current.
    Stale,
    /// An answer was recorded; play the feedback cue when correct.
    Judged(Judgement),
    /// The next question is now current.
    Advanced,
    /// The last question was passed; show the results.
    Completed,
}

#[derive(Debug, Default)]
pub struct Store {
    state: QuizState,
    settings: Settings,
    next_generation: u64,
    pending: Option<FetchTicket>,
}

impl Store {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ticket whose result would currently be applied.
    #[must_use]
    pub fn pending_fetch(&self) -> Option<FetchTicket> {
        self.pending
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        tracing::debug!(?action, phase = ?self.state.phase(), "dispatch");
        match action {
            Action::SetCategory(category) => {
                self.state.category = Some(category);
                Effect::None
            }
            Action::StartLoading { count } => self.start_loading(count),
            Action::QuestionsLoaded { ticket, result } => self.questions_loaded(ticket, result),
            Action::SetError(error) => {
                self.fail(error);
                Effect::None
            }
            Action::SelectAnswer(answer) => self.select_answer(answer),
            Action::NextQuestion => self.next_question(),
            Action::ResetQuiz => {
                self.state = QuizState::empty(self.state.category);
                self.pending = None;
                Effect::None
            }
            Action::ToggleAutoPlay => {
                self.settings.autoplay_audio = !self.settings.autoplay_audio;
                Effect::None
            }
            Action::SetVolume(volume) => {
                self.settings.volume = volume;
                Effect::None
            }
        }
    }

    fn start_loading(&mut self, count: u32) -> Effect {
        let category = self.state.category;
        self.state = QuizState::empty(category);
        self.pending = None;

        let Some(category) = category else {
            self.fail(LoadError::NoQuestions(None));
            return Effect::None;
        };
        if count == 0 {
            self.fail(LoadError::NoQuestions(Some(category)));
            return Effect::None;
        }

        self.next_generation += 1;
        let ticket = FetchTicket(self.next_generation);
        self.pending = Some(ticket);
        self.state.is_loading = true;
        Effect::FetchStarted(FetchRequest {
            ticket,
            category,
            count,
        })
    }

    fn questions_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<QuizQuestion>, LoadError>,
    ) -> Effect {
        if self.pending != Some(ticket) {
            tracing::debug!(generation = ticket.generation(), "dropping stale fetch result");
            return Effect::Stale;
        }
        self.pending = None;

        let questions = match result {
            Ok(questions) => questions,
            Err(error) => {
                self.fail(error);
                return Effect::None;
            }
        };

        let questions: Vec<QuizQuestion> = questions
            .into_iter()
            .filter(|question| match question.validate() {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(error = %err, "dropping invalid question");
                    false
                }
            })
            .collect();

        if questions.is_empty() {
            self.fail(LoadError::NoQuestions(self.state.category));
            return Effect::None;
        }

        tracing::info!(count = questions.len(), category = ?self.state.category, "questions loaded");
        self.state = QuizState {
            total_questions: questions.len(),
            questions,
            ..QuizState::empty(self.state.category)
        };
        Effect::None
    }

    fn fail(&mut self, error: LoadError) {
        tracing::debug!(%error, "loading attempt failed");
        self.state = QuizState {
            error: Some(error),
            ..QuizState::empty(self.state.category)
        };
        self.pending = None;
    }

    fn select_answer(&mut self, answer: String) -> Effect {
        if self.state.phase() != Phase::Answering {
            return Effect::None;
        }
        let Some(question) = self.state.current_question() else {
            return Effect::None;
        };
        let correct = question.is_correct(&answer);
        let question_id = question.id.clone();

        if correct {
            self.state.score += 1;
        }
        self.state.selected_answer = Some(answer.clone());
        self.state.show_result = true;

        Effect::Judged(Judgement {
            question_id,
            answer,
            correct,
        })
    }

    fn next_question(&mut self) -> Effect {
        if self.state.phase() != Phase::ShowingResult {
            return Effect::None;
        }
        if self.state.is_last_question() {
            self.state.completed = true;
            return Effect::Completed;
        }
        self.state.current_index += 1;
        self.state.selected_answer = None;
        self.state.show_result = false;
        Effect::Advanced
    }
}
