#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use axum::routing::{MethodRouter, post};
use axum::{Json, Router};
use clean_energy_navigator::config::Config;
use clean_energy_navigator::routes::create_router;
use clean_energy_navigator::state::AppState;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

pub const ADMIN_KEY: &str = "test-admin-key";

/// Counts and keeps every body the fake backend receives.
#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.bodies.lock().unwrap().last().cloned()
    }
}

/// A backend route answering every POST with a fixed status and raw body.
pub fn canned(recorder: &Recorder, status: StatusCode, body: &'static str) -> MethodRouter {
    let recorder = recorder.clone();
    post(move |Json(payload): Json<Value>| {
        let recorder = recorder.clone();
        async move {
            recorder.hits.fetch_add(1, Ordering::SeqCst);
            recorder.bodies.lock().unwrap().push(payload);
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    })
}

pub async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        port: 0,
        backend_url: format!("http://{addr}"),
        upstream_timeout: Duration::from_secs(5),
        static_dir: "public".to_string(),
        admin_key: Some(ADMIN_KEY.to_string()),
    }
}

pub fn app_with(config: Config) -> Router {
    let state = Arc::new(AppState::new(config).unwrap());
    create_router(state)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

/// Posts a body with no content-type header.
pub async fn post_untyped(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

pub async fn get(app: Router, uri: &str, admin_key: Option<&str>) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(key) = admin_key {
        builder = builder.header("x-admin-key", key);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

pub fn error_of(bytes: &[u8]) -> String {
    let value: Value = serde_json::from_slice(bytes).unwrap();
    value["error"].as_str().unwrap().to_string()
}
