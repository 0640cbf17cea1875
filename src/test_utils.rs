// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

use crate::config::Config;
use crate::i18n::fluent::I18n;

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons of gains and sample values.
pub const F32_EPSILON: f32 = 1e-6;

/// Japanese translations, the locale the quiz content is written for.
pub fn ja() -> I18n {
    I18n::new(Some("ja".to_string()), &Config::default())
}
