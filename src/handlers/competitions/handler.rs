//! Competition handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::{RankingsService, ResultService},
    state::AppState,
};

use super::{
    request::SaveSolvesRequest,
    response::{CompetitionResultsResponse, SavedResultResponse},
};

/// Results of one event in one competition
pub async fn competition_results(
    State(state): State<AppState>,
    Path((competition_id, event_id)): Path<(Uuid, String)>,
) -> AppResult<Json<CompetitionResultsResponse>> {
    let results =
        RankingsService::competition_results(state.store(), &competition_id, &event_id).await?;

    Ok(Json(results))
}

/// Save a competitor's attempts while the competition is open
pub async fn save_solves(
    State(state): State<AppState>,
    Path((competition_id, event_id)): Path<(Uuid, String)>,
    Json(payload): Json<SaveSolvesRequest>,
) -> AppResult<Json<SavedResultResponse>> {
    payload.validate()?;

    let saved = ResultService::save_solves(
        state.store(),
        &competition_id,
        &event_id,
        &payload.competitor_id,
        &payload.solves,
    )
    .await?;

    Ok(Json(saved))
}
