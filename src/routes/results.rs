use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    message::RecommendationResponse,
    services::results_link::parse_results_data,
};

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub data: Option<String>,
}

/// Validates the state a results page link carries and hands it back typed.
pub async fn results_handler(
    query: Result<Query<ResultsQuery>, QueryRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidResultsLink(e.body_text()))?;
    let data = query
        .data
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::InvalidResultsLink("missing data parameter".to_string()))?;

    Ok(Json(parse_results_data(&data)?))
}
