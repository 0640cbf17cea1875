// SPDX-License-Identifier: MPL-2.0
//! Presentation order of a question's choices.

use crate::domain::{QuestionId, QuizQuestion};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly shuffled copy of `choices`. The input is left untouched.
pub fn shuffle_choices<R: Rng + ?Sized>(choices: &[String], rng: &mut R) -> Vec<String> {
    let mut shuffled = choices.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Shuffled choice order, computed once per question rather than per render.
#[derive(Debug, Clone, Default)]
pub struct ShuffledChoices {
    question: Option<QuestionId>,
    source: Vec<String>,
    order: Vec<String>,
}

impl ShuffledChoices {
    /// Reshuffles when `question` differs from the one last seen (by id or
    /// by its choice set). Returns whether a new order was drawn.
    pub fn refresh<R: Rng + ?Sized>(&mut self, question: &QuizQuestion, rng: &mut R) -> bool {
        if self.question.as_ref() == Some(&question.id) && self.source == question.choices {
            return false;
        }
        self.question = Some(question.id.clone());
        self.source = question.choices.clone();
        self.order = shuffle_choices(&question.choices, rng);
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }
}
