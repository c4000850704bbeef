use axum::{body::Bytes, extract::State, response::Response};

use crate::{
    error::AppError,
    message::{RecommendationRequest, RecommendationResponse},
    routes::proxy::{ProxyPayload, forward, is_blank},
    state::SharedState,
};

impl ProxyPayload for RecommendationRequest {
    const ENDPOINT: &'static str = "recommendation";
    const UPSTREAM_PATH: &'static str = "/recommendation";
    type Reply = RecommendationResponse;

    fn validate(&self) -> Result<(), AppError> {
        if is_blank(self.location.as_deref())
            || self.monthly_consumption.is_none()
            || self.budget.is_none()
        {
            return Err(AppError::Validation(
                "Location, monthly consumption and budget are required".to_string(),
            ));
        }
        Ok(())
    }
}

pub async fn recommendation_handler(
    State(state): State<SharedState>,
    payload: Bytes,
) -> Response {
    forward::<RecommendationRequest>(&state, payload).await
}
