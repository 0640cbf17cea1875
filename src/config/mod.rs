// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[api]` - Backend base URL, request timeout, questions per session
//! - `[audio]` - Initial auto-play and volume settings, feedback cue volume
//!
//! The file is never written back: settings changed during a session live in
//! memory only and are reset on the next launch.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `QUIZ_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_quiz::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("backend: {}", config.api.base_url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the backend base URL.
pub const ENV_API_BASE_URL: &str = "QUIZ_API_BASE_URL";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "ja", "en-US").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Backend API settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the quiz backend, without trailing path.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Transport timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,

    /// Questions requested per session.
    #[serde(default = "default_question_count")]
    pub question_count: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            question_count: default_question_count(),
        }
    }
}

impl ApiConfig {
    /// Resolves the backend base URL.
    ///
    /// Priority: `QUIZ_API_BASE_URL` environment variable, then the config
    /// file, then [`DEFAULT_API_BASE_URL`]. A CLI override is applied by the
    /// caller on top of this.
    #[must_use]
    pub fn base_url(&self) -> String {
        let from_env = std::env::var(ENV_API_BASE_URL)
            .ok()
            .filter(|value| !value.trim().is_empty());
        from_env
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS)
            .clamp(MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Number of questions to request. Zero is passed through on purpose:
    /// the quiz store turns it into a "no questions" error.
    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT)
    }
}

/// Initial audio settings for a fresh launch.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Auto-play question audio when a question is shown.
    #[serde(default = "default_autoplay")]
    pub autoplay: Option<bool>,

    /// Question audio volume (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub volume: Option<f32>,

    /// Volume of the "correct answer" cue (0.0 to 1.0).
    #[serde(default = "default_feedback_volume")]
    pub feedback_volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            volume: default_volume(),
            feedback_volume: default_feedback_volume(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Initial audio settings.
    #[serde(default)]
    pub audio: AudioConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_API_TIMEOUT_SECS)
}

fn default_question_count() -> Option<u32> {
    Some(DEFAULT_QUESTION_COUNT)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_feedback_volume() -> Option<f32> {
    Some(DEFAULT_FEEDBACK_VOLUME)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
