// SPDX-License-Identifier: MPL-2.0
//! Quiz questions as delivered by the backend.

use super::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier of a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One quiz item: an image and audio prompt with a fixed set of choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question_image_url: String,
    pub question_audio_url: String,
    pub correct_answer: String,
    pub choices: Vec<String>,
    pub category: CategoryId,
    #[serde(default)]
    pub explanation: String,
}

/// Data-integrity violation in a fetched question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidQuestion {
    NoChoices(QuestionId),
    AnswerNotInChoices(QuestionId),
}

impl fmt::Display for InvalidQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidQuestion::NoChoices(id) => write!(f, "question {id} has no choices"),
            InvalidQuestion::AnswerNotInChoices(id) => {
                write!(f, "question {id}: correct answer is not one of the choices")
            }
        }
    }
}

impl std::error::Error for InvalidQuestion {}

impl QuizQuestion {
    /// Checks that the correct answer is one of the choices.
    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        if self.choices.is_empty() {
            return Err(InvalidQuestion::NoChoices(self.id.clone()));
        }
        if !self.choices.iter().any(|c| *c == self.correct_answer) {
            return Err(InvalidQuestion::AnswerNotInChoices(self.id.clone()));
        }
        Ok(())
    }

    /// Exact string comparison; choice order plays no part.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a valid question whose correct answer is the first choice.
    pub fn question(id: &str, category: CategoryId, answer: &str, others: &[&str]) -> QuizQuestion {
        let mut choices = vec![answer.to_string()];
        choices.extend(others.iter().map(|s| s.to_string()));
        QuizQuestion {
            id: QuestionId::new(id),
            question_image_url: format!("/images/{id}.png"),
            question_audio_url: format!("/audio/{id}.mp3"),
            correct_answer: answer.to_string(),
            choices,
            category,
            explanation: format!("{answer} explained"),
        }
    }
}
