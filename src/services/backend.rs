// src/services/backend.rs
use axum::{body::Bytes, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::Config, error::AppError};

/// Shown when the backend fails without saying why.
pub const UPSTREAM_ERROR_PLACEHOLDER: &str = "Upstream service error";

/// Error body as the backend may send it. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl UpstreamErrorBody {
    fn message(self) -> String {
        match self.error {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s,
            Some(serde_json::Value::Null) | Some(serde_json::Value::String(_)) | None => {
                UPSTREAM_ERROR_PLACEHOLDER.to_string()
            }
            Some(other) => other.to_string(),
        }
    }
}

/// HTTP client for the computation backend. Cheap to clone; clones share
/// the connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON to `path` and returns the success body untouched.
    ///
    /// A success body must at least be valid JSON. Non-success answers become
    /// [`AppError::Upstream`] carrying the backend's status and message.
    pub async fn forward<B>(&self, path: &str, body: &B) -> Result<Bytes, AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Forwarding request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let bytes = response.bytes().await.map_err(classify)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<UpstreamErrorBody>(&bytes)
                .unwrap_or_default()
                .message();
            return Err(AppError::Upstream { status, message });
        }

        serde_json::from_slice::<serde::de::IgnoredAny>(&bytes)
            .map_err(|e| AppError::MalformedUpstream(e.to_string()))?;

        debug!(%status, len = bytes.len(), "Upstream answered");
        Ok(bytes)
    }
}

fn classify(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout(err)
    } else {
        AppError::UpstreamUnavailable(err)
    }
}
