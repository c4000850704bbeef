// src/routes/proxy.rs
//! The one proxy pattern every `/api` intake route follows: validate the
//! payload, forward it to the backend, relay the backend's answer.

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

pub trait ProxyPayload: Serialize + DeserializeOwned + Send + Sync {
    /// Label for metrics.
    const ENDPOINT: &'static str;
    /// Path on the backend, e.g. `/chatbot`.
    const UPSTREAM_PATH: &'static str;

    /// Shape the backend is expected to answer with. Only checked for
    /// logging; the body is relayed as is.
    type Reply: DeserializeOwned;

    fn validate(&self) -> Result<(), AppError>;
}

/// The body is decoded as JSON whatever its content type, so a missing field
/// always reaches `validate`.
pub async fn forward<T: ProxyPayload>(state: &AppState, payload: Bytes) -> Response {
    let span = info_span!(
        "proxy",
        request_id = %Uuid::new_v4(),
        upstream = T::UPSTREAM_PATH
    );

    async move {
        let result = relay::<T>(state, payload).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        state.metrics.record(T::ENDPOINT, outcome).await;
        result.into_response()
    }
    .instrument(span)
    .await
}

async fn relay<T: ProxyPayload>(state: &AppState, payload: Bytes) -> Result<Response, AppError> {
    let request: T =
        serde_json::from_slice(&payload).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
    request.validate()?;

    let body = state.backend.forward(T::UPSTREAM_PATH, &request).await?;

    if let Err(e) = serde_json::from_slice::<T::Reply>(&body) {
        warn!(error = %e, "Upstream reply has an unexpected shape, relaying as is");
    }

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// True when the field is missing or holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
