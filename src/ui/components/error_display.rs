// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! This component displays errors and warnings with:
//! - A title colored by severity
//! - A message explaining what went wrong
//! - Any number of recovery buttons (e.g., "Retry", "Back to categories")
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .message("No questions were found.")
//!     .action("Retry", Message::Retry)
//!     .secondary_action("Back", Message::Back)
//!     .view()
//! ```

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Operation failed (red)
    #[default]
    Error,
    /// Degraded but usable (orange)
    Warning,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone)]
struct Action<Message> {
    label: String,
    message: Message,
    primary: bool,
}

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    actions: Vec<Action<Message>>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            actions: Vec::new(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a highlighted recovery button.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.actions.push(Action {
            label: label.into(),
            message,
            primary: true,
        });
        self
    }

    /// Adds an outlined recovery button.
    pub fn secondary_action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.actions.push(Action {
            label: label.into(),
            message,
            primary: false,
        });
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            let message = Text::new(message_text)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if !self.actions.is_empty() {
            let buttons = self.actions.into_iter().fold(
                Row::new().spacing(spacing::SM),
                |row, action| {
                    let style = if action.primary {
                        button_styles::primary
                    } else {
                        button_styles::secondary
                    };
                    row.push(
                        button(Text::new(action.label))
                            .padding([spacing::XS, spacing::MD])
                            .on_press(action.message)
                            .style(style),
                    )
                },
            );
            content = content.push(Container::new(buttons).padding(spacing::SM));
        }

        // Neutral surface with a severity-colored outline
        Container::new(content)
            .width(Length::Fill)
            .max_width(560.0)
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
                let bg_color = theme.extended_palette().background.weak.color;
                container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: iced::Border {
                        color: accent_color,
                        width: border::WIDTH_SM,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Creates a centered error display that fills its container.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        Back,
    }

    #[test]
    fn error_severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn error_display_builder_keeps_action_order() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Test Error")
            .message("Something went wrong")
            .action("Retry", TestMessage::Retry)
            .secondary_action("Back", TestMessage::Back);

        assert_eq!(display.title, Some("Test Error".to_string()));
        assert_eq!(display.message, Some("Something went wrong".to_string()));
        let messages: Vec<_> = display.actions.iter().map(|a| a.message.clone()).collect();
        assert_eq!(messages, vec![TestMessage::Retry, TestMessage::Back]);
        assert!(display.actions[0].primary);
        assert!(!display.actions[1].primary);
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
        assert!(display.actions.is_empty());
    }
}
