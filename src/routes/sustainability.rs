use axum::{body::Bytes, extract::State, response::Response};

use crate::{
    error::AppError,
    message::{SustainabilityRequest, SustainabilityResponse},
    routes::proxy::{ProxyPayload, forward, is_blank},
    state::SharedState,
};

impl ProxyPayload for SustainabilityRequest {
    const ENDPOINT: &'static str = "sustainability";
    const UPSTREAM_PATH: &'static str = "/sustainability";
    type Reply = SustainabilityResponse;

    fn validate(&self) -> Result<(), AppError> {
        if is_blank(self.product_link.as_deref()) {
            return Err(AppError::Validation("Product link is required".to_string()));
        }
        Ok(())
    }
}

pub async fn sustainability_handler(
    State(state): State<SharedState>,
    payload: Bytes,
) -> Response {
    forward::<SustainabilityRequest>(&state, payload).await
}
