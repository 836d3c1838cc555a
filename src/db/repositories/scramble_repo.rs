//! Scramble repository

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::CompetitionScrambles};

/// Repository for competition scrambles
pub struct ScrambleRepository;

impl ScrambleRepository {
    /// Scrambles of one event across every competition, keyed by competition
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: &str,
    ) -> AppResult<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query_as::<_, CompetitionScrambles>(
            r#"
            SELECT competition_id, event_id, scrambles
            FROM competition_scrambles
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.competition_id, row.scrambles))
            .collect())
    }
}
