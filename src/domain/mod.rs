// SPDX-License-Identifier: MPL-2.0
//! Domain layer - quiz data shapes and value objects.
//!
//! Types here carry no behaviour beyond their own validity rules. Beside
//! `std` they only depend on `serde`, since the question and category
//! shapes double as the backend's JSON contract.
//!
//! # Modules
//!
//! - [`category`]: [`CategoryId`](category::CategoryId), [`Category`](category::Category)
//! - [`question`]: [`QuizQuestion`](question::QuizQuestion), [`QuestionId`](question::QuestionId)
//! - [`score`]: [`ScoreSummary`](score::ScoreSummary), [`Grade`](score::Grade)
//! - [`volume`]: [`Volume`](volume::Volume)

pub mod category;
pub mod question;
pub mod score;
pub mod volume;

pub use category::{Category, CategoryId};
pub use question::{InvalidQuestion, QuestionId, QuizQuestion};
pub use score::{Grade, ScoreSummary};
pub use volume::Volume;
