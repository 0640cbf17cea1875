// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple pages.
//!
//! # Components
//!
//! - [`error_display`] - Consistent error presentation with severity levels
//!   and recovery buttons
//! - [`loading`] - Centered "loading..." placeholder
//! - [`audio_transport`] - Play/pause control with a position readout

pub mod audio_transport;
pub mod error_display;
pub mod loading;
