// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilityRequest {
    #[serde(rename = "productLink", default)]
    pub product_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilityResponse {
    pub score: Option<f64>,
    #[serde(default)]
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofSuitability {
    #[default]
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loan {
    Yes,
    #[default]
    No,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    #[default]
    MaxSaving,
    MaxEnv,
}

/// Form intake. Omitted selections fall back to the form's initial values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub monthly_consumption: Option<i64>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub roof_suitability: RoofSuitability,
    #[serde(default)]
    pub loan: Loan,
    #[serde(default)]
    pub preferences: Preference,
}

/// Display strings only. Numbers and booleans from the backend are
/// rendered to text on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(deserialize_with = "display_string")]
    pub recommended_source: String,
    #[serde(deserialize_with = "display_string")]
    pub break_even_point: String,
    #[serde(deserialize_with = "display_string")]
    pub total_savings: String,
    #[serde(deserialize_with = "display_string")]
    pub local_suppliers: String,
    #[serde(deserialize_with = "display_string")]
    pub reason_for_recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a display string, found {other}"
        ))),
    }
}
