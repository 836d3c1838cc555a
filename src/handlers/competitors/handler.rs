//! Competitor handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::AppResult, services::ResultService, state::AppState};

use super::response::PersonalBestsResponse;

/// Best single and average per event, tagged with records still held
pub async fn personal_bests(
    State(state): State<AppState>,
    Path(competitor_id): Path<Uuid>,
) -> AppResult<Json<PersonalBestsResponse>> {
    let bests = ResultService::personal_bests(state.store(), &competitor_id).await?;
    Ok(Json(bests))
}
