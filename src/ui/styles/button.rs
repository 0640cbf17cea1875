// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette::WHITE, radius, shadow};
use crate::ui::quiz_page::ChoiceState;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (retry, next question, restart).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_hover,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_hover)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_hover,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(&colors),
    }
}

/// Outlined button for the less prominent action of a pair.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);

    let (background, border_color) = match status {
        button::Status::Hovered => (colors.surface_muted, colors.brand),
        button::Status::Disabled => return disabled_style(&colors),
        _ => (colors.surface, colors.border),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button (header title and back link).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        button::Status::Disabled => colors.text_disabled,
        button::Status::Active => colors.brand,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Category card on the selection page.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let (border_color, card_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.brand, shadow::MD),
        _ => (colors.border, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

/// Answer choice, colored by its state once the answer is judged.
pub fn choice(state: ChoiceState) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);

        let (background, border_color, text_color) = match state {
            ChoiceState::Open => match status {
                button::Status::Hovered | button::Status::Pressed => {
                    (colors.surface_muted, colors.brand, colors.text_primary)
                }
                _ => (colors.surface, colors.border, colors.text_primary),
            },
            ChoiceState::Correct => (colors.correct_surface, colors.correct, colors.text_primary),
            ChoiceState::Wrong => (
                colors.incorrect_surface,
                colors.incorrect,
                colors.text_primary,
            ),
            ChoiceState::Dimmed => (colors.surface, colors.border, colors.text_disabled),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_LG,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round play/pause control over the question image.
pub fn transport(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        button::Status::Disabled => colors.text_disabled,
        button::Status::Active => colors.brand,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

fn disabled_style(colors: &ColorScheme) -> button::Style {
    button::Style {
        background: Some(Background::Color(colors.surface_muted)),
        text_color: colors.text_disabled,
        border: Border {
            color: Color {
                a: 0.6,
                ..colors.text_disabled
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
