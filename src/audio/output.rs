// SPDX-License-Identifier: MPL-2.0
//! Audio output through the system's default device using cpal.
//!
//! Each [`DeviceSink`] owns one output stream. The stream callback and the UI
//! thread share the play cursor, pause flag and volume through atomics; the
//! clip itself sits behind a mutex the callback only `try_lock`s.

use super::clip::{frames_to_duration, Clip, OutputFormat};
use super::error::AudioError;
use super::sink::{AudioSink, SinkFactory};
use crate::domain::Volume;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// State shared between the audio callback and the owning sink.
struct SharedState {
    /// Volume stored as the bits of an f32 for atomic access.
    volume_bits: AtomicU32,
    paused: AtomicBool,
    /// Next sample to output, in interleaved samples.
    cursor: AtomicUsize,
    samples: Mutex<Option<Arc<Vec<f32>>>>,
}

impl SharedState {
    fn new(volume: Volume) -> Self {
        Self {
            volume_bits: AtomicU32::new(volume.value().to_bits()),
            paused: AtomicBool::new(true),
            cursor: AtomicUsize::new(0),
            samples: Mutex::new(None),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    fn set_cursor(&self, cursor: usize) {
        self.cursor.store(cursor, Ordering::Relaxed);
    }

    /// Fills `out` (already converted to f32) from the clip, advancing the
    /// cursor and pausing at the end of the clip. Never blocks: while `load`
    /// holds the clip lock the callback outputs silence.
    fn render(&self, out: &mut [f32]) {
        out.fill(0.0);
        if self.is_paused() {
            return;
        }
        let Ok(guard) = self.samples.try_lock() else {
            return;
        };
        let Some(samples) = guard.as_ref() else {
            return;
        };

        let gain = Volume::new(self.volume()).gain();
        let start = self.cursor().min(samples.len());
        let end = (start + out.len()).min(samples.len());
        for (dst, src) in out.iter_mut().zip(&samples[start..end]) {
            *dst = (src * gain).clamp(-1.0, 0.999_999_9);
        }
        self.set_cursor(end);
        if end >= samples.len() {
            self.set_paused(true);
        }
    }
}

/// Queries the default output device format, falling back to 48 kHz stereo.
#[must_use]
pub fn default_output_format() -> OutputFormat {
    let config = cpal::default_host()
        .default_output_device()
        .and_then(|device| device.default_output_config().ok());
    match config {
        Some(config) => OutputFormat {
            sample_rate: config.sample_rate(),
            channels: config.channels(),
        },
        None => {
            tracing::debug!("no output device config, using fallback format");
            OutputFormat::default()
        }
    }
}

/// Sink playing through the default output device.
pub struct DeviceSink {
    shared: Arc<SharedState>,
    format: OutputFormat,
    clip: Option<Clip>,
    _stream: cpal::Stream,
}

impl DeviceSink {
    /// Opens a paused output stream on the default device.
    pub fn open(volume: Volume) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::Device(format!("failed to get output config: {e}")))?;

        let format = OutputFormat {
            sample_rate: supported_config.sample_rate(),
            channels: supported_config.channels(),
        };
        let shared = Arc::new(SharedState::new(volume));
        let config: cpal::StreamConfig = supported_config.config();

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config, Arc::clone(&shared))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config, Arc::clone(&shared))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config, Arc::clone(&shared))?
            }
            other => {
                return Err(AudioError::Device(format!(
                    "unsupported sample format: {other:?}"
                )))
            }
        };
        stream
            .play()
            .map_err(|e| AudioError::Device(format!("failed to start output stream: {e}")))?;

        tracing::debug!(?format, "audio output opened");
        Ok(Self {
            shared,
            format,
            clip: None,
            _stream: stream,
        })
    }

    /// Factory opening a new device sink per channel.
    #[must_use]
    pub fn factory() -> SinkFactory {
        Rc::new(|| Ok(Box::new(DeviceSink::open(Volume::default())?) as Box<dyn AudioSink>))
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        shared: Arc<SharedState>,
    ) -> Result<cpal::Stream, AudioError> {
        let mut scratch: Vec<f32> = Vec::new();
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    scratch.resize(data.len(), 0.0);
                    shared.render(&mut scratch);
                    for (sample, value) in data.iter_mut().zip(&scratch) {
                        *sample = T::from_sample(*value);
                    }
                },
                |err| {
                    tracing::warn!(error = %err, "audio output stream error");
                },
                None,
            )
            .map_err(|e| AudioError::Device(format!("failed to build output stream: {e}")))
    }
}

impl AudioSink for DeviceSink {
    fn format(&self) -> OutputFormat {
        self.format
    }

    fn load(&mut self, clip: Clip) -> Result<(), AudioError> {
        if clip.format() != self.format {
            return Err(AudioError::FormatMismatch);
        }
        self.shared.set_paused(true);
        if let Ok(mut samples) = self.shared.samples.lock() {
            *samples = Some(Arc::clone(clip.samples()));
        }
        self.shared.set_cursor(0);
        self.clip = Some(clip);
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        if self.clip.is_none() {
            return Err(AudioError::NotLoaded);
        }
        self.shared.set_paused(false);
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.set_paused(true);
    }

    fn rewind(&mut self) {
        self.shared.set_cursor(0);
    }

    fn set_volume(&mut self, volume: Volume) {
        self.shared.set_volume(volume.value());
    }

    fn position(&self) -> Duration {
        let channels = usize::from(self.format.channels.max(1));
        frames_to_duration(self.shared.cursor() / channels, self.format.sample_rate)
    }

    fn duration(&self) -> Option<Duration> {
        self.clip.as_ref().map(Clip::duration)
    }

    fn is_playing(&self) -> bool {
        self.clip.is_some() && !self.shared.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn loaded(samples: Vec<f32>, volume: f32) -> SharedState {
        let state = SharedState::new(Volume::new(volume));
        if let Ok(mut guard) = state.samples.lock() {
            *guard = Some(Arc::new(samples));
        }
        state
    }

    #[test]
    fn paused_state_renders_silence() {
        let state = loaded(vec![0.5; 8], 1.0);
        let mut out = [1.0f32; 4];
        state.render(&mut out);
        assert!(out.iter().all(|s| *s == 0.0));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn render_applies_perceptual_volume_and_advances() {
        let state = loaded(vec![0.8; 8], 0.5);
        state.set_paused(false);
        let mut out = [0.0f32; 4];
        state.render(&mut out);
        for sample in out {
            assert_abs_diff_eq!(sample, 0.2, epsilon = F32_EPSILON);
        }
        assert_eq!(state.cursor(), 4);
        assert!(!state.is_paused());
    }

    #[test]
    fn render_pauses_at_end_and_pads_with_silence() {
        let state = loaded(vec![0.5; 6], 1.0);
        state.set_paused(false);
        let mut out = [1.0f32; 8];
        state.render(&mut out);
        assert_abs_diff_eq!(out[5], 0.5);
        assert_abs_diff_eq!(out[6], 0.0);
        assert!(state.is_paused());
        assert_eq!(state.cursor(), 6);
    }

    #[test]
    fn render_clamps_to_safe_range() {
        let state = loaded(vec![1.0, -1.5], 1.0);
        state.set_paused(false);
        let mut out = [0.0f32; 2];
        state.render(&mut out);
        assert!(out[0] < 1.0);
        assert_abs_diff_eq!(out[1], -1.0);
    }

    #[test]
    fn render_outputs_silence_while_clip_is_locked() {
        let state = loaded(vec![0.5; 8], 1.0);
        state.set_paused(false);
        let guard = state.samples.lock().expect("lock");
        let mut out = [1.0f32; 4];
        state.render(&mut out);
        assert!(out.iter().all(|s| *s == 0.0));
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_paused());
        drop(guard);

        state.render(&mut out);
        assert_abs_diff_eq!(out[0], 0.5);
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn volume_round_trips_through_bits() {
        let state = SharedState::new(Volume::new(0.3));
        assert_abs_diff_eq!(state.volume(), 0.3);
        state.set_volume(0.9);
        assert_abs_diff_eq!(state.volume(), 0.9);
    }
}
