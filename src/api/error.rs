// SPDX-License-Identifier: MPL-2.0
//! Failures of backend requests.

use crate::i18n::fluent::I18n;
use crate::quiz::LoadError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The transport timeout elapsed.
    Timeout,
    /// No connection could be made to the backend.
    Unreachable(String),
    /// Non-success status carrying a structured error body.
    Backend {
        status: u16,
        code: String,
        message: String,
        details: Option<String>,
    },
    /// Non-success status without a usable body.
    Status(u16),
    /// The response body did not have the expected shape.
    Decode(String),
    Unexpected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Unreachable(e) => write!(f, "backend unreachable: {}", e),
            ApiError::Backend {
                status,
                code,
                message,
                ..
            } => write!(f, "HTTP {} {}: {}", status, code, message),
            ApiError::Status(status) => write!(f, "HTTP status: {}", status),
            ApiError::Decode(e) => write!(f, "invalid response body: {}", e),
            ApiError::Unexpected(e) => write!(f, "unexpected failure: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unreachable(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl ApiError {
    /// Collapses the failure into the one message the quiz shows.
    ///
    /// A backend-reported message is passed through verbatim; everything else
    /// maps to a localized transport message.
    #[must_use]
    pub fn into_load_error(self, i18n: &I18n) -> LoadError {
        match self {
            ApiError::Backend { message, .. } if !message.trim().is_empty() => {
                LoadError::Backend(message)
            }
            ApiError::Backend { .. } => LoadError::Backend(i18n.tr("api-error-generic")),
            ApiError::Timeout => LoadError::Request(i18n.tr("api-error-timeout")),
            ApiError::Unreachable(_) => LoadError::Request(i18n.tr("api-error-network")),
            // An error status without a structured body carries nothing to show.
            ApiError::Status(_) | ApiError::Decode(_) | ApiError::Unexpected(_) => {
                LoadError::Request(i18n.tr("api-error-unexpected"))
            }
        }
    }
}
