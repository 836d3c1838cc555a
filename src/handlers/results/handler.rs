//! Result computation handler implementations

use axum::Json;
use validator::Validate;

use crate::{error::AppResult, services::ResultService};

use super::{
    request::{ComputeResultRequest, ValidateFmcRequest},
    response::{ComputedResultResponse, FmcValidationResponse},
};

/// Compute single and average from raw attempts
pub async fn compute_result(
    Json(payload): Json<ComputeResultRequest>,
) -> AppResult<Json<ComputedResultResponse>> {
    payload.validate()?;

    let computed = ResultService::compute(
        &payload.format,
        &payload.solves,
        payload.scrambles.as_deref(),
    )?;

    Ok(Json(computed))
}

/// Check that a solution solves a scramble using face turns only
pub async fn validate_fmc(
    Json(payload): Json<ValidateFmcRequest>,
) -> AppResult<Json<FmcValidationResponse>> {
    payload.validate()?;

    Ok(Json(ResultService::validate_fmc(
        &payload.scramble,
        &payload.solution,
    )))
}
