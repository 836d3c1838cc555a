//! Event repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Event};

/// Repository for event reference data
pub struct EventRepository;

impl EventRepository {
    /// Find event by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// List all events
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(r#"SELECT * FROM events ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(events)
    }
}
