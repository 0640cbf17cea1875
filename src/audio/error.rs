// SPDX-License-Identifier: MPL-2.0
//! Audio failures and playback outcomes.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The host has no default output device.
    NoOutputDevice,
    /// The output device rejected configuration or stream creation.
    Device(String),
    /// The clip's sample format does not match the output stream.
    FormatMismatch,
    /// The source has no audio stream.
    NoAudioStream,
    /// The source could not be opened or decoded.
    Decode(String),
    /// Playback was requested before any clip was loaded.
    NotLoaded,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "no audio output device found"),
            AudioError::Device(e) => write!(f, "audio device error: {}", e),
            AudioError::FormatMismatch => write!(f, "clip format does not match output"),
            AudioError::NoAudioStream => write!(f, "no audio stream found"),
            AudioError::Decode(e) => write!(f, "audio decode failed: {}", e),
            AudioError::NotLoaded => write!(f, "no clip loaded"),
        }
    }
}

impl std::error::Error for AudioError {}

/// What happened to a playback request.
///
/// Callers may inspect it but are never forced to handle a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Audio is now playing from the requested position.
    Started,
    /// The clip is still loading; playback starts once it arrives.
    Deferred,
    /// Nothing to do (auto-play off, nothing bound, stale request).
    Skipped,
    /// Playback failed; the error was logged and dropped.
    Ignored(AudioError),
}

impl Playback {
    /// Logs a failed request at `warn` and turns it into [`Playback::Ignored`].
    pub(crate) fn ignore(channel: &str, error: AudioError) -> Self {
        tracing::warn!(channel, %error, "audio playback ignored");
        Playback::Ignored(error)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Playback::Started)
    }
}
