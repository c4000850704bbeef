use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    /// Calls received per endpoint.
    pub requests: HashMap<String, u64>,
    /// Outcome counts per endpoint, keyed by outcome kind (`ok`, `timeout`, ...).
    pub outcomes: HashMap<String, HashMap<String, u64>>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record(&self, endpoint: &str, outcome: &str) {
        let mut data = self.inner.write().await;
        *data.requests.entry(endpoint.to_string()).or_insert(0) += 1;
        *data
            .outcomes
            .entry(endpoint.to_string())
            .or_default()
            .entry(outcome.to_string())
            .or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
