//! Competition response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::rankings::RankingsEntryResponse;

/// Leaderboard of one event within one competition
#[derive(Debug, Serialize)]
pub struct CompetitionResultsResponse {
    pub competition_id: Uuid,
    pub event_id: String,
    pub ranking_type: String,
    pub entries: Vec<RankingsEntryResponse>,
}

/// A saved result with its computed single and average
#[derive(Debug, Serialize)]
pub struct SavedResultResponse {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub event_id: String,
    pub competitor_id: Uuid,
    pub solves: Vec<String>,
    pub status: String,
    pub single: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<String>,
    pub updated_at: DateTime<Utc>,
}
