// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for the question, the result panel and the score.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    let base = colors.surface;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::SM,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top bar with the title, navigation and audio settings.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Framed box around the question image.
pub fn image_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_muted)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}

/// Round backdrop behind a category icon.
pub fn icon_badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_muted)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Brand-colored strip at the bottom of a category card.
pub fn call_to_action(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);

    container::Style {
        background: Some(Background::Color(colors.brand)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Answer result panel, tinted by the outcome.
pub fn answer_result(correct: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let (background, accent) = if correct {
            (colors.correct_surface, colors.correct)
        } else {
            (colors.incorrect_surface, colors.incorrect)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: accent,
                width: border::WIDTH_LG,
                radius: radius::LG.into(),
            },
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}
