// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::backend::BackendClient;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        Ok(Self {
            backend: BackendClient::new(&config)?,
            metrics: MetricsManager::new(),
            config,
        })
    }
}
