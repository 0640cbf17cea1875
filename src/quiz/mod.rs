// SPDX-License-Identifier: MPL-2.0
//! Quiz progression state machine.
//!
//! All session state lives in a [`Store`] and changes only through
//! [`Store::dispatch`] with one of the closed set of [`Action`]s. Each dispatch
//! returns an [`Effect`] telling the caller which side effect to run next
//! (start a fetch, play the feedback cue, navigate to the results page).
//!
//! # Phases
//!
//! ```text
//! Idle ──StartLoading──▶ Loading ──QuestionsLoaded(ok)──▶ Answering
//!                          │                                 │ SelectAnswer
//!                          └──(err / empty)──▶ Error          ▼
//!                                         Answering ◀──Next── ShowingResult
//!                                                             │ Next on last
//!                                                             ▼
//!                                                          Completed
//! ```
//!
//! Fetch results are stamped with a [`FetchTicket`]; only the most recently
//! issued ticket is applied, so a slow earlier response can never overwrite
//! a newer one.

pub mod action;
pub mod shuffle;
pub mod state;
pub mod store;

pub use action::Action;
pub use shuffle::{shuffle_choices, ShuffledChoices};
pub use state::{LoadError, Phase, QuizState, Recovery, Settings};
pub use store::{Effect, FetchRequest, FetchTicket, Judgement, Store};
