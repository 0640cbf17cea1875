// SPDX-License-Identifier: MPL-2.0
//! Question audio decoding using `FFmpeg`.
//!
//! [`decode_clip`] opens a file path or an `http(s)` URL, decodes its best
//! audio stream and resamples it to the output device's format. It blocks;
//! run it on a blocking task.

use super::clip::{Clip, OutputFormat};
use super::error::AudioError;
use std::sync::{Once, OnceLock};

/// Upper bound on decoded audio, in seconds. Longer sources are truncated.
const MAX_CLIP_SECS: usize = 600;

static FFMPEG_INIT: Once = Once::new();
static FFMPEG_INIT_ERROR: OnceLock<String> = OnceLock::new();

/// Initializes `FFmpeg` once per process and silences its console logging.
fn init_ffmpeg() -> Result<(), AudioError> {
    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            let _ = FFMPEG_INIT_ERROR.set(e.to_string());
            return;
        }
        // SAFETY: av_log_set_level only updates a global log threshold.
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });
    match FFMPEG_INIT_ERROR.get() {
        Some(e) => Err(AudioError::Decode(format!("FFmpeg initialization failed: {e}"))),
        None => Ok(()),
    }
}

/// Decodes `source` completely into a clip in `format`.
pub fn decode_clip(source: &str, format: OutputFormat) -> Result<Clip, AudioError> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&source)
        .map_err(|e| AudioError::Decode(format!("failed to open {source}: {e}")))?;
    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or(AudioError::NoAudioStream)?;
    let stream_index = input.index();

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::Decode(format!("failed to create codec context: {e}")))?;
    let mut decoder = context
        .decoder()
        .audio()
        .map_err(|e| AudioError::Decode(format!("failed to create audio decoder: {e}")))?;

    // The device plays interleaved f32 at its own rate; anything with more
    // than one channel is mixed to stereo.
    let output_channels: u16 = if format.channels == 1 { 1 } else { 2 };
    let output_layout = if output_channels == 1 {
        ffmpeg_next::ChannelLayout::MONO
    } else {
        ffmpeg_next::ChannelLayout::STEREO
    };
    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_layout,
        format.sample_rate,
    )
    .map_err(|e| AudioError::Decode(format!("failed to create resampler: {e}")))?;

    let limit = MAX_CLIP_SECS * format.sample_rate as usize * usize::from(output_channels);
    let mut samples: Vec<f32> = Vec::new();

    let mut drain = |decoder: &mut ffmpeg_next::codec::decoder::Audio,
                     samples: &mut Vec<f32>|
     -> Result<(), AudioError> {
        let mut decoded = ffmpeg_next::frame::Audio::empty();
        while decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            resampler
                .run(&decoded, &mut resampled)
                .map_err(|e| AudioError::Decode(format!("resampling failed: {e}")))?;
            let count = resampled.samples() * usize::from(output_channels);
            samples.extend(f32_samples(resampled.data(0), count));
        }
        Ok(())
    };

    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!(error = %e, "skipping undecodable audio packet");
            continue;
        }
        drain(&mut decoder, &mut samples)?;
        if samples.len() >= limit {
            tracing::warn!(source, "question audio truncated");
            break;
        }
    }
    if decoder.send_eof().is_ok() {
        drain(&mut decoder, &mut samples)?;
    }
    samples.truncate(limit);

    let mut clip_format = format;
    clip_format.channels = output_channels;
    let clip = upmix(samples, clip_format, format);
    tracing::debug!(source, duration = ?clip.duration(), "question audio decoded");
    Ok(clip)
}

/// Spreads stereo samples over a device with more than two channels,
/// leaving the extra channels silent.
fn upmix(samples: Vec<f32>, decoded: OutputFormat, device: OutputFormat) -> Clip {
    if decoded.channels == device.channels {
        return Clip::new(samples, device);
    }
    let from = usize::from(decoded.channels.max(1));
    let to = usize::from(device.channels.max(1));
    let mut out = Vec::with_capacity(samples.len() / from * to);
    for frame in samples.chunks_exact(from) {
        out.extend_from_slice(frame);
        out.extend(std::iter::repeat(0.0).take(to.saturating_sub(from)));
    }
    Clip::new(out, device)
}

/// Reads `count` little-endian f32 values from packed frame data.
fn f32_samples(data: &[u8], count: usize) -> impl Iterator<Item = f32> + '_ {
    data.chunks_exact(4)
        .take(count)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}
