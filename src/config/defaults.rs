// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Backend location, request timeout and question count
//! - **Volume**: Audio playback volume settings
//! - **Feedback**: The "correct answer" sound cue

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend base URL used when neither config, environment nor CLI set one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Fixed request timeout of the HTTP transport (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

/// Number of questions requested per quiz session.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Largest count the backend is known to serve. The client does not clamp to
/// it; it is only used to sanity-check configuration values.
pub const BACKEND_MAX_QUESTION_COUNT: u32 = 50;

/// Upper bound for downloaded question images (in bytes).
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default question audio volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Whether question audio starts on its own when a question is shown.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Feedback Sound Defaults
// ==========================================================================

/// Volume of the "correct" cue, independent from the question volume.
pub const DEFAULT_FEEDBACK_VOLUME: f32 = 0.6;

// ==========================================================================
// Audio Output Defaults
// ==========================================================================

/// Sample rate assumed when no output device can be queried.
pub const FALLBACK_SAMPLE_RATE: u32 = 48_000;

/// Channel count assumed when no output device can be queried.
pub const FALLBACK_CHANNELS: u16 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_defaults_are_ordered() {
        assert!(MIN_VOLUME <= DEFAULT_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
        assert!(MIN_VOLUME <= DEFAULT_FEEDBACK_VOLUME);
        assert!(DEFAULT_FEEDBACK_VOLUME <= MAX_VOLUME);
    }

    #[test]
    fn timeout_defaults_are_ordered() {
        assert!(MIN_API_TIMEOUT_SECS <= DEFAULT_API_TIMEOUT_SECS);
        assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);
    }

    #[test]
    fn default_count_within_backend_limit() {
        assert!(DEFAULT_QUESTION_COUNT > 0);
        assert!(DEFAULT_QUESTION_COUNT <= BACKEND_MAX_QUESTION_COUNT);
    }
}
