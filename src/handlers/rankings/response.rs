//! Rankings response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::engine::{RankingsEntry, RecordTag};
use crate::models::Event;

/// Event reference data
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub format: String,
    pub is_fmc: bool,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            is_fmc: event.is_fmc(),
            id: event.id,
            name: event.name,
            format: event.format,
        }
    }
}

/// One leaderboard line
#[derive(Debug, Clone, Serialize)]
pub struct RankingsEntryResponse {
    pub place: String,
    pub competitor_id: Uuid,
    pub competitor_name: String,
    pub country_id: String,
    pub continent_id: String,
    pub competition_id: Uuid,
    pub event_id: String,
    pub result: String,
    pub times: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordTag>,
}

impl From<RankingsEntry> for RankingsEntryResponse {
    fn from(entry: RankingsEntry) -> Self {
        Self {
            place: entry.place,
            competitor_id: entry.competitor_id,
            competitor_name: entry.competitor_name,
            country_id: entry.country_id,
            continent_id: entry.continent_id,
            competition_id: entry.competition_id,
            event_id: entry.event_id,
            result: entry.result,
            times: entry.times,
            record: entry.record,
        }
    }
}

/// Paginated rankings of one event
#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub event_id: String,
    pub ranking_type: String,
    pub entries: Vec<RankingsEntryResponse>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
}
