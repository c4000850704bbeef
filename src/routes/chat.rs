use axum::{body::Bytes, extract::State, response::Response};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    routes::proxy::{ProxyPayload, forward, is_blank},
    state::SharedState,
};

impl ProxyPayload for ChatRequest {
    const ENDPOINT: &'static str = "chatbot";
    const UPSTREAM_PATH: &'static str = "/chatbot";
    type Reply = ChatResponse;

    fn validate(&self) -> Result<(), AppError> {
        if is_blank(self.message.as_deref()) {
            return Err(AppError::Validation("Message is required".to_string()));
        }
        Ok(())
    }
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Bytes,
) -> Response {
    forward::<ChatRequest>(&state, payload).await
}
