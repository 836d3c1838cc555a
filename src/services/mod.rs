//! Business logic services

pub mod rankings_service;
pub mod result_service;

use std::collections::HashMap;

pub use rankings_service::{RankingsQueryParams, RankingsService};
pub use result_service::ResultService;

use crate::{
    db::ResultStore,
    engine::{EngineError, EventScoring},
    error::AppResult,
    models::Event,
};

/// Load an event and the scoring rules for its results. Scrambles are only
/// fetched for FMC.
pub(crate) async fn event_scoring<S>(store: &S, event_id: &str) -> AppResult<(Event, EventScoring)>
where
    S: ResultStore + ?Sized,
{
    let event = store
        .event(event_id)
        .await?
        .ok_or_else(|| EngineError::UnknownEvent(event_id.to_string()))?;

    let scrambles = if event.is_fmc() {
        store.scrambles(event_id).await?
    } else {
        HashMap::new()
    };

    let scoring = EventScoring::from_event(&event, scrambles)?;
    Ok((event, scoring))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::models::{Competition, Event, ResultEntry};

    pub fn event(id: &str, format: &str) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            icon_code: id.to_string(),
            format: format.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn open_competition(id: Uuid) -> Competition {
        let now = Utc::now();
        Competition {
            id,
            name: "Weekly".to_string(),
            start_time: now - Duration::days(1),
            end_time: now + Duration::days(6),
            created_at: now,
        }
    }

    pub struct Row<'a> {
        pub competitor_id: Uuid,
        pub name: &'a str,
        pub country: &'a str,
        pub continent: &'a str,
    }

    pub fn result(
        who: &Row<'_>,
        event_id: &str,
        competition_id: Uuid,
        solves: &[&str],
        status: &str,
    ) -> ResultEntry {
        ResultEntry {
            id: Uuid::new_v4(),
            competition_id,
            event_id: event_id.to_string(),
            competitor_id: who.competitor_id,
            competitor_name: who.name.to_string(),
            country_id: who.country.to_string(),
            continent_id: who.continent.to_string(),
            solves: solves.iter().map(|s| s.to_string()).collect(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
