//! HTTP client for the AraBul REST backend.
//!
//! Wraps `reqwest` with a fixed per-request timeout, a normalised base URL,
//! and typed decoding. No request is ever retried: callers (the ranker in
//! particular) resolve a failed call through their own fallback.

mod aggregation;
mod complaints;
mod favorites;
mod ratings;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use favorites::{is_valid_favorite, MIN_FAVORITE_DWELL};

/// Client for the AraBul REST backend.
///
/// Cheap to clone; clones share one connection pool, so a single client can
/// serve concurrent ranking requests.
#[derive(Debug, Clone)]
pub struct ArabulClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ArabulClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// does not parse as a hierarchical URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so relative joins append to the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            timeout,
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`ArabulClient::new`].
    pub fn from_config(config: &arabul_core::AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Per-request timeout this client was built with.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends the request, maps 404 and other non-2xx statuses to typed
    /// errors, and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::NotFound`] on HTTP 404.
    /// - [`ApiError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ApiError::Deserialize`] if the body does not decode as `T`.
    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { url });
        }
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "backend returned error status");
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Deserialize {
            context: context.to_string(),
            source,
        })
    }
}
