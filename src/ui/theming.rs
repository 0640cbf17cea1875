// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Colors the custom styles draw from, resolved for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    pub brand: Color,
    pub brand_hover: Color,

    pub correct: Color,
    pub correct_surface: Color,
    pub incorrect: Color,
    pub incorrect_surface: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_muted: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,
            text_disabled: palette::GRAY_400,

            brand: palette::PRIMARY_500,
            brand_hover: palette::PRIMARY_600,

            correct: palette::CORRECT_500,
            correct_surface: palette::CORRECT_100,
            incorrect: palette::INCORRECT_500,
            incorrect_surface: palette::INCORRECT_100,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: Color::from_rgb(0.15, 0.15, 0.17),
            surface_muted: Color::from_rgb(0.2, 0.2, 0.22),
            border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            text_disabled: palette::GRAY_500,

            brand: palette::PRIMARY_400,
            brand_hover: palette::PRIMARY_500,

            correct: palette::CORRECT_500,
            correct_surface: Color {
                a: 0.25,
                ..palette::CORRECT_500
            },
            incorrect: palette::INCORRECT_500,
            incorrect_surface: Color {
                a: 0.25,
                ..palette::INCORRECT_500
            },
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Light is the quiz's native look; only an explicit dark OS wins.
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert!(ColorScheme::of(&Theme::Dark).surface.r < 0.2);
        assert!(ColorScheme::of(&Theme::Light).surface.r > 0.9);
    }

    #[test]
    fn answer_colors_are_distinct() {
        let scheme = ColorScheme::light();
        assert!(scheme.correct.g > scheme.correct.r);
        assert!(scheme.incorrect.r > scheme.incorrect.g);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System mode depends on the host, so only check it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }
}
