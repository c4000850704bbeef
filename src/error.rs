// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::ErrorEnvelope;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid results data: {0}")]
    InvalidResultsLink(String),

    /// The backend answered with a non-success status.
    #[error("Upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    #[error("Upstream timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::MalformedPayload(_)
            | AppError::InvalidResultsLink(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::UpstreamUnavailable(_)
            | AppError::Timeout(_)
            | AppError::MalformedUpstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for outcome metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::MalformedPayload(_) => "malformed_payload",
            AppError::InvalidResultsLink(_) => "invalid_results_link",
            AppError::Upstream { .. } => "upstream_error",
            AppError::UpstreamUnavailable(_) => "unavailable",
            AppError::Timeout(_) => "timeout",
            AppError::MalformedUpstream(_) => "malformed_upstream",
        }
    }

    /// Message shown to the caller. Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::MalformedPayload(_) => "Invalid request body".to_string(),
            AppError::InvalidResultsLink(_) => "Invalid results data".to_string(),
            AppError::Upstream { message, .. } => message.clone(),
            AppError::UpstreamUnavailable(_)
            | AppError::Timeout(_)
            | AppError::MalformedUpstream(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() && !matches!(self, AppError::Upstream { .. }) {
            error!(kind = self.kind(), "{}", self);
        } else {
            warn!(kind = self.kind(), %status, "{}", self);
        }

        (status, Json(ErrorEnvelope::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_error_envelope() {
        let response = AppError::Validation("Message is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.error, "Message is required");
    }

    #[test]
    fn upstream_status_is_relayed() {
        let err = AppError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: "model overloaded".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.public_message(), "model overloaded");
    }

    #[test]
    fn internal_causes_are_hidden() {
        let err = AppError::MalformedUpstream("expected value at line 1".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
    }
}
