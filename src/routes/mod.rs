// src/routes/mod.rs
pub mod admin;
pub mod chat;
pub mod proxy;
pub mod recommendation;
pub mod results;
pub mod sustainability;

use crate::state::SharedState;
use admin::{auth_middleware, get_metrics_handler};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use chat::chat_handler;
use recommendation::recommendation_handler;
use results::results_handler;
use sustainability::sustainability_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let api_routes = Router::new()
        .route("/chatbot", post(chat_handler))
        .route("/sustainability", post(sustainability_handler))
        .route("/recommendation", post(recommendation_handler))
        .route("/results", get(results_handler));

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
