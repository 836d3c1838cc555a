//! Rankings handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    constants::ranking_types,
    engine::RankingKind,
    error::AppResult,
    services::{RankingsQueryParams, RankingsService},
    state::AppState,
};

use super::{
    request::RankingsQuery,
    response::{EventResponse, RankingsResponse},
};

/// All events with their formats
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<EventResponse>>> {
    let events = RankingsService::events(state.store()).await?;
    Ok(Json(events))
}

/// Leaderboard of one event, optionally scoped to a country or continent
pub async fn event_rankings(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<RankingsQuery>,
) -> AppResult<Json<RankingsResponse>> {
    query.validate()?;

    let kind: RankingKind = query
        .ranking_type
        .as_deref()
        .unwrap_or(ranking_types::SINGLE)
        .parse()?;

    let params = RankingsQueryParams {
        kind,
        country_id: query.country,
        continent_id: query.continent,
        page: query.page.unwrap_or(1),
        per_page: state.config().rankings.page_size(query.per_page),
    };

    let rankings = RankingsService::event_rankings(state.store(), &event_id, params).await?;

    Ok(Json(rankings))
}
