// SPDX-License-Identifier: MPL-2.0
//! `iced_quiz` is an audio and image multiple-choice quiz client built with the
//! Iced GUI framework.
//!
//! Users pick a category, listen to each question's recording, answer from
//! shuffled choices and get a score summary. Questions come from a REST
//! backend; the progression lives in a reducer-style store ([`quiz`]) and
//! playback in two independent audio channels ([`audio`]).

pub mod api;
pub mod app;
pub mod audio;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod quiz;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
