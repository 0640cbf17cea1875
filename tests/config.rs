// SPDX-License-Identifier: MPL-2.0
use iced_quiz::config::{self, DEFAULT_QUESTION_COUNT};
use iced_quiz::i18n::fluent::I18n;
use iced_quiz::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_file_drives_language_and_session_size() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"en-US\"\ntheme_mode = \"light\"\n\n[api]\nquestion_count = 5\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.api.question_count(), 5);
    assert_eq!(config.general.theme_mode, ThemeMode::Light);

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn cli_language_beats_settings_file() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"en-US\"\n",
    )
    .expect("write settings");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n = I18n::new(Some("ja".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "ja");
}

#[test]
fn broken_settings_fall_back_with_a_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[api\nquestion_count = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config.api.question_count(), DEFAULT_QUESTION_COUNT);

    let key = warning.expect("a warning key");
    let i18n = I18n::new(Some("ja".to_string()), &config);
    assert!(!i18n.tr(&key).starts_with("MISSING"));
}
