// SPDX-License-Identifier: MPL-2.0
//! Thin `reqwest` wrapper over the backend endpoints.

use super::error::ApiError;
use super::types::{ErrorBody, HealthStatus};
use crate::config::MAX_IMAGE_BYTES;
use crate::domain::{Category, CategoryId, QuestionId, QuizQuestion};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Handle to the backend. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `base_url` with a fixed per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("IcedQuiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `url`, which may be relative to the backend root.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health", &[]).await
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories", &[]).await
    }

    /// `GET /quiz?category=<id>&count=<n>`
    ///
    /// `count` is forwarded as-is; the backend enforces its own maximum.
    pub async fn quiz_questions(
        &self,
        category: CategoryId,
        count: u32,
    ) -> Result<Vec<QuizQuestion>, ApiError> {
        let count = count.to_string();
        self.get_json("/quiz", &[("category", category.as_str()), ("count", &count)])
            .await
    }

    /// `GET /quiz/{id}`
    pub async fn quiz_question(&self, id: &QuestionId) -> Result<QuizQuestion, ApiError> {
        self.get_json(&format!("/quiz/{}", id.as_str()), &[]).await
    }

    /// Downloads a question asset (image) into memory, refusing bodies
    /// larger than [`MAX_IMAGE_BYTES`].
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.resolve_url(url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        let mut bytes = Vec::with_capacity(
            response
                .content_length()
                .map_or(0, |len| (len as usize).min(MAX_IMAGE_BYTES)),
        );
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(ApiError::Unexpected(format!(
                    "asset exceeds {MAX_IMAGE_BYTES} bytes: {url}"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = check_status(request.send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Passes successful responses through and turns the rest into [`ApiError`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    let err = error_from_body(status.as_u16(), &body);
    tracing::debug!(error = %err, "backend returned an error");
    Err(err)
}

fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => ApiError::Backend {
            status,
            code: error.code,
            message: error.message,
            details: error.details,
        },
        Err(_) => ApiError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://quiz.test:8080/", Duration::from_secs(1)).expect("client")
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(client().base_url(), "http://quiz.test:8080");
    }

    #[test]
    fn resolves_relative_asset_urls() {
        let client = client();
        assert_eq!(
            client.resolve_url("/images/jp.png"),
            "http://quiz.test:8080/images/jp.png"
        );
        assert_eq!(
            client.resolve_url("audio/jp.mp3"),
            "http://quiz.test:8080/audio/jp.mp3"
        );
        assert_eq!(
            client.resolve_url("https://cdn.test/jp.png"),
            "https://cdn.test/jp.png"
        );
    }

    #[test]
    fn structured_body_becomes_backend_error() {
        let err = error_from_body(
            400,
            br#"{"error":{"code":"INVALID_COUNT","message":"count must be 1-50","details":"count=0"}}"#,
        );
        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                code: "INVALID_COUNT".into(),
                message: "count must be 1-50".into(),
                details: Some("count=0".into()),
            }
        );
    }

    #[test]
    fn unstructured_body_keeps_status() {
        assert_eq!(error_from_body(503, b"Service Unavailable"), ApiError::Status(503));
        assert_eq!(error_from_body(500, b""), ApiError::Status(500));
    }
}
