use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::{services::metrics_manager::MetricsData, state::SharedState};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}

/// Admin routes stay closed unless a key is configured.
pub async fn auth_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = state
        .config
        .admin_key
        .as_deref()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    match req.headers().get(ADMIN_KEY_HEADER) {
        Some(val) if keys_match(val.as_bytes(), expected.as_bytes()) => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Compares without short-circuiting on the first differing byte.
fn keys_match(given: &[u8], expected: &[u8]) -> bool {
    given.len() == expected.len()
        && given
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
