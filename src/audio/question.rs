// SPDX-License-Identifier: MPL-2.0
//! Channel playing the current question's recording.

use super::clip::Clip;
use super::error::{AudioError, Playback};
use super::sink::{AudioSink, SinkFactory};
use crate::domain::{QuestionId, Volume};
use std::time::Duration;

const CHANNEL: &str = "question";

/// Question audio bound to one question at a time.
///
/// The clip for a question arrives asynchronously: [`bind`](Self::bind) it
/// when the question is shown, then [`attach`](Self::attach) the decoded
/// clip. Clips for any other question are dropped.
pub struct QuestionAudio {
    factory: SinkFactory,
    sink: Option<Box<dyn AudioSink>>,
    bound: Option<QuestionId>,
    loaded: bool,
    replay_pending: bool,
    volume: Volume,
}

impl std::fmt::Debug for QuestionAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionAudio")
            .field("bound", &self.bound)
            .field("loaded", &self.loaded)
            .field("replay_pending", &self.replay_pending)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl QuestionAudio {
    #[must_use]
    pub fn new(factory: SinkFactory, volume: Volume) -> Self {
        Self {
            factory,
            sink: None,
            bound: None,
            loaded: false,
            replay_pending: false,
            volume,
        }
    }

    #[must_use]
    pub fn bound(&self) -> Option<&QuestionId> {
        self.bound.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Binds the channel to `id`, stopping whatever was playing.
    ///
    /// Returns `false` when `id` is already bound; nothing changes then.
    pub fn bind(&mut self, id: QuestionId) -> bool {
        if self.bound.as_ref() == Some(&id) {
            return false;
        }
        self.stop();
        tracing::debug!(question = %id, "question audio bound");
        self.bound = Some(id);
        self.loaded = false;
        self.replay_pending = false;
        true
    }

    /// Stops playback and forgets the bound question.
    pub fn release(&mut self) {
        self.stop();
        self.bound = None;
        self.loaded = false;
        self.replay_pending = false;
    }

    /// Loads the decoded clip of `id`. Plays it from zero when `autoplay` is
    /// on or a replay was requested while it was loading.
    pub fn attach(&mut self, id: &QuestionId, clip: Clip, autoplay: bool) -> Playback {
        if self.bound.as_ref() != Some(id) {
            tracing::debug!(question = %id, "dropping clip of unbound question");
            return Playback::Skipped;
        }
        let volume = self.volume;
        let loaded = self.sink().and_then(|sink| {
            sink.set_volume(volume);
            sink.load(clip)
        });
        if let Err(error) = loaded {
            self.replay_pending = false;
            return Playback::ignore(CHANNEL, error);
        }
        self.loaded = true;

        if autoplay || std::mem::take(&mut self.replay_pending) {
            self.restart()
        } else {
            Playback::Skipped
        }
    }

    /// Records that the clip of `id` could not be produced.
    pub fn fail(&mut self, id: &QuestionId, error: AudioError) -> Playback {
        if self.bound.as_ref() == Some(id) {
            self.replay_pending = false;
        }
        Playback::ignore(CHANNEL, error)
    }

    /// Restarts from zero; never resumes. Deferred while the clip is loading.
    pub fn replay(&mut self) -> Playback {
        if self.bound.is_none() {
            return Playback::Skipped;
        }
        if !self.loaded {
            self.replay_pending = true;
            return Playback::Deferred;
        }
        self.restart()
    }

    /// Transport play: resumes a paused clip, restarts a finished one.
    pub fn play(&mut self) -> Playback {
        if self.bound.is_none() {
            return Playback::Skipped;
        }
        if !self.loaded {
            self.replay_pending = true;
            return Playback::Deferred;
        }
        let finished = self
            .duration()
            .is_some_and(|duration| self.position() >= duration);
        if finished {
            return self.restart();
        }
        match self.sink().and_then(|sink| sink.play()) {
            Ok(()) => Playback::Started,
            Err(error) => Playback::ignore(CHANNEL, error),
        }
    }

    pub fn pause(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
        }
    }

    /// Pauses and rewinds to zero.
    pub fn stop(&mut self) {
        self.replay_pending = false;
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
            sink.rewind();
        }
    }

    /// Applies to the playing clip immediately and to every later one.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_mut() {
            sink.set_volume(volume);
        }
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        match (&self.sink, self.loaded) {
            (Some(sink), true) => sink.position(),
            _ => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match (&self.sink, self.loaded) {
            (Some(sink), true) => sink.duration(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.loaded && self.sink.as_ref().is_some_and(|sink| sink.is_playing())
    }

    fn restart(&mut self) -> Playback {
        let started = self.sink().and_then(|sink| {
            sink.rewind();
            sink.play()
        });
        match started {
            Ok(()) => Playback::Started,
            Err(error) => Playback::ignore(CHANNEL, error),
        }
    }

    fn sink(&mut self) -> Result<&mut Box<dyn AudioSink>, AudioError> {
        if self.sink.is_none() {
            let mut sink = (self.factory)()?;
            sink.set_volume(self.volume);
            self.sink = Some(sink);
        }
        self.sink.as_mut().ok_or(AudioError::NotLoaded)
    }
}
