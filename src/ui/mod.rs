// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern: pages receive a
//! `ViewContext`, emit their own `Message`, and `update` turns it into an
//! `Event` the application acts on.
//!
//! # Pages
//!
//! - [`category_select`] - Category list fetched from the backend
//! - [`quiz_page`] - Question image, audio, choices and the answer result
//! - [`results`] - Score summary with restart
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Title, back link, auto-play and volume settings
//! - [`components`] - Reusable UI components (error display, loading, audio transport)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod category_select;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod quiz_page;
pub mod results;
pub mod styles;
pub mod theming;
