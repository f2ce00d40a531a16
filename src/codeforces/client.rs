//! HTTP client for the Codeforces API

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::CodeforcesConfig;
use crate::error::{AppError, AppResult};
use crate::models::{SubmissionRecord, UserProfile};

use super::response::ApiEnvelope;

/// Client for the public Codeforces REST API
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
}

impl CodeforcesClient {
    /// Build a client from configuration
    pub fn new(config: &CodeforcesConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("cfwrapped/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a user's public profile via `user.info`
    pub async fn user_info(&self, handle: &str) -> AppResult<UserProfile> {
        let users: Vec<UserProfile> = self
            .get("user.info", &[("handles", handle)])
            .await?;

        users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", handle)))
    }

    /// Fetch a user's full submission history via `user.status`
    pub async fn user_status(&self, handle: &str) -> AppResult<Vec<SubmissionRecord>> {
        self.get("user.status", &[("handle", handle)]).await
    }

    /// Perform a GET against one API method and unwrap the envelope
    async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, method);

        tracing::debug!(method = method, "Calling Codeforces API");

        let envelope: ApiEnvelope<T> = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .json()
            .await?;

        if !envelope.is_ok() {
            let comment = envelope.failure_comment();
            // The API reports unknown handles as a FAILED status with a
            // "not found" comment rather than an HTTP 404
            if comment.contains("not found") {
                return Err(AppError::NotFound(comment));
            }
            return Err(AppError::Upstream(comment));
        }

        envelope
            .result
            .ok_or_else(|| AppError::Upstream("Codeforces API returned no result".to_string()))
    }
}
