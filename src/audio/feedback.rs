// SPDX-License-Identifier: MPL-2.0
//! Channel for the "correct answer" cue.

use super::clip::chime;
use super::error::{AudioError, Playback};
use super::sink::{AudioSink, SinkFactory};
use crate::domain::Volume;

const CHANNEL: &str = "feedback";

/// One-shot cue, built on first use and restarted on every call.
pub struct FeedbackAudio {
    factory: SinkFactory,
    sink: Option<Box<dyn AudioSink>>,
    volume: Volume,
}

impl std::fmt::Debug for FeedbackAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackAudio")
            .field("ready", &self.sink.is_some())
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl FeedbackAudio {
    #[must_use]
    pub fn new(factory: SinkFactory, volume: Volume) -> Self {
        Self {
            factory,
            sink: None,
            volume,
        }
    }

    /// Whether the cue has been constructed yet.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.sink.is_some()
    }

    /// Plays the cue from the start, cutting off a previous playback.
    pub fn play(&mut self) -> Playback {
        if self.sink.is_none() {
            match build(&self.factory, self.volume) {
                Ok(sink) => self.sink = Some(sink),
                Err(error) => return Playback::ignore(CHANNEL, error),
            }
        }
        let Some(sink) = self.sink.as_mut() else {
            return Playback::Skipped;
        };
        sink.rewind();
        match sink.play() {
            Ok(()) => Playback::Started,
            Err(error) => Playback::ignore(CHANNEL, error),
        }
    }
}

fn build(factory: &SinkFactory, volume: Volume) -> Result<Box<dyn AudioSink>, AudioError> {
    let mut sink = factory()?;
    let cue = chime(sink.format());
    sink.set_volume(volume);
    sink.load(cue)?;
    Ok(sink)
}
