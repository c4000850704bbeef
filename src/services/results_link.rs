//! Codec for the results page link.
//!
//! The form page carries the backend's recommendation to the results page as
//! `/results?data=<percent-encoded JSON>`. Field names must stay stable so
//! that shared or bookmarked links keep working.

use crate::{error::AppError, message::RecommendationResponse};

pub const RESULTS_PATH: &str = "/results";
pub const DATA_PARAM: &str = "data";

/// Percent-encodes the recommendation for use as the `data` parameter.
pub fn encode_results_param(data: &RecommendationResponse) -> Result<String, AppError> {
    let json = serde_json::to_string(data)
        .map_err(|e| AppError::InvalidResultsLink(e.to_string()))?;
    Ok(urlencoding::encode(&json).into_owned())
}

pub fn results_link(data: &RecommendationResponse) -> Result<String, AppError> {
    Ok(format!(
        "{RESULTS_PATH}?{DATA_PARAM}={}",
        encode_results_param(data)?
    ))
}

/// Checks the shape of an already query-decoded `data` value.
pub fn parse_results_data(json: &str) -> Result<RecommendationResponse, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::InvalidResultsLink(e.to_string()))
}
