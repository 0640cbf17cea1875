// SPDX-License-Identifier: MPL-2.0
//! Decoded audio held in memory.

use crate::config::{FALLBACK_CHANNELS, FALLBACK_SAMPLE_RATE};
use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::Duration;

/// Sample rate and channel count of an output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            sample_rate: FALLBACK_SAMPLE_RATE,
            channels: FALLBACK_CHANNELS,
        }
    }
}

/// Interleaved f32 samples in [-1.0, 1.0] at a fixed [`OutputFormat`].
///
/// Cloning is cheap; the samples are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    samples: Arc<Vec<f32>>,
    format: OutputFormat,
}

impl Clip {
    #[must_use]
    pub fn new(samples: Vec<f32>, format: OutputFormat) -> Self {
        Self {
            samples: Arc::new(samples),
            format,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &Arc<Vec<f32>> {
        &self.samples
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Number of frames (samples per channel).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.format.channels.max(1))
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        frames_to_duration(self.frames(), self.format.sample_rate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

pub(crate) fn frames_to_duration(frames: usize, sample_rate: u32) -> Duration {
    if sample_rate == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(frames as f64 / f64::from(sample_rate))
}

const CHIME_NOTES_HZ: [f32; 2] = [880.0, 1318.5];
const CHIME_NOTE_SECS: f32 = 0.14;
const CHIME_PEAK: f32 = 0.5;

/// Synthesizes the "correct answer" cue: two rising sine notes with a short
/// attack and an exponential decay.
#[must_use]
pub fn chime(format: OutputFormat) -> Clip {
    let channels = usize::from(format.channels.max(1));
    let rate = format.sample_rate.max(1) as f32;
    let note_frames = (CHIME_NOTE_SECS * rate) as usize;
    let attack_frames = (0.005 * rate) as usize;

    let mut samples = Vec::with_capacity(note_frames * CHIME_NOTES_HZ.len() * channels);
    for freq in CHIME_NOTES_HZ {
        for frame in 0..note_frames {
            let t = frame as f32 / rate;
            let attack = if frame < attack_frames {
                frame as f32 / attack_frames as f32
            } else {
                1.0
            };
            let envelope = attack * (-t * 18.0).exp();
            let value = (TAU * freq * t).sin() * envelope * CHIME_PEAK;
            samples.extend(std::iter::repeat(value).take(channels));
        }
    }
    Clip::new(samples, format)
}
