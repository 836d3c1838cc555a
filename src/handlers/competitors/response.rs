//! Competitor response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::engine::RecordTag;

/// Best value of one kind, with where it was set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestResult {
    pub result: String,
    pub competition_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordTag>,
}

/// Personal bests in one event
#[derive(Debug, Serialize)]
pub struct EventBests {
    pub event_id: String,
    pub event_name: String,
    pub single: Option<BestResult>,
    pub average: Option<BestResult>,
}

/// Personal bests across every event a competitor has results in
#[derive(Debug, Serialize)]
pub struct PersonalBestsResponse {
    pub competitor_id: Uuid,
    pub events: Vec<EventBests>,
}
