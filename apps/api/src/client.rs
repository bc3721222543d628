//! Transport client: relays a profile to a remote advisor instance and
//! returns the typed result.
//!
//! No retries: the remote computation is deterministic, so a failed call would
//! fail the same way again. Timeouts are the only transport policy.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::profile::UserProfile;
use crate::models::recommendation::Recommendation;
use crate::recommendation::legacy::LegacyRecommendation;

const RECOMMENDATION_PATH: &str = "/api/v1/recommendation";
const LEGACY_RECOMMENDATION_PATH: &str = "/api/v1/recommendation/legacy";
const HEALTH_PATH: &str = "/health";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn recommend(&self, profile: &UserProfile) -> Result<Recommendation, ClientError> {
        self.post_json(RECOMMENDATION_PATH, profile).await
    }

    pub async fn recommend_legacy(
        &self,
        profile: &UserProfile,
    ) -> Result<LegacyRecommendation, ClientError> {
        self.post_json(LEGACY_RECOMMENDATION_PATH, profile).await
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .get(format!("{}{HEALTH_PATH}", self.base_url))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;
        let response = check_status(response).await?;

        Ok(response.json::<T>().await?)
    }
}

/// Turns a non-success response into `ClientError::Api`, preferring the
/// server's `{"error": ...}` message over the raw body.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    debug!("Remote advisor returned {status}: {message}");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
