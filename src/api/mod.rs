// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the quiz backend.
//!
//! Every failure is reported as an [`ApiError`]; pages turn it into a single
//! user-facing [`LoadError`](crate::quiz::LoadError) with
//! [`ApiError::into_load_error`] and never look at status codes themselves.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ErrorBody, ErrorDetail, HealthStatus};
