// SPDX-License-Identifier: MPL-2.0
//! Audio playback for quiz questions and answer feedback.
//!
//! Two independent channels share one output port, the [`AudioSink`] trait:
//!
//! - [`QuestionAudio`] plays the current question's recording. It is bound
//!   to one question at a time, auto-plays from zero when the question
//!   changes, and restarts from zero on replay.
//! - [`FeedbackAudio`] plays a short chime on every correct answer.
//!
//! Nothing in here returns `Result` to the quiz flow. Every operation
//! reports a [`Playback`] outcome; failures become [`Playback::Ignored`]
//! after being logged, so audio problems never block progression.
//!
//! Production sinks are [`output::DeviceSink`] (cpal) fed with clips decoded
//! by [`decode::decode_clip`] (`FFmpeg`).

mod clip;
pub mod decode;
mod error;
mod feedback;
pub mod output;
mod question;
pub(crate) mod sink;

pub use clip::{chime, Clip, OutputFormat};
pub use error::{AudioError, Playback};
pub use feedback::FeedbackAudio;
pub use question::QuestionAudio;
pub use sink::{AudioSink, SinkFactory};

/// Formats a playback position as `m:ss`.
#[must_use]
pub fn format_time(time: std::time::Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
