//! Result repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ResultEntry, ResultStatus},
};

/// Columns of a result joined with its competitor
const RESULT_COLUMNS: &str = r#"
    r.id, r.competition_id, r.event_id, r.competitor_id,
    c.name AS competitor_name, c.country_id, c.continent_id,
    r.solves, r.status, r.created_at, r.updated_at
"#;

/// Optional narrowing of an event's results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilter {
    pub competition_id: Option<Uuid>,
    pub country_id: Option<String>,
    pub continent_id: Option<String>,
}

impl ResultFilter {
    pub fn competition(competition_id: Uuid) -> Self {
        Self {
            competition_id: Some(competition_id),
            ..Self::default()
        }
    }
}

/// Repository for result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Results of one event, optionally narrowed to a competition or region
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: &str,
        filter: &ResultFilter,
    ) -> AppResult<Vec<ResultEntry>> {
        let query = format!(
            r#"
            SELECT {RESULT_COLUMNS}
            FROM results r
            JOIN competitors c ON c.id = r.competitor_id
            WHERE r.event_id = $1
              AND ($2::uuid IS NULL OR r.competition_id = $2)
              AND ($3::text IS NULL OR c.country_id = $3)
              AND ($4::text IS NULL OR c.continent_id = $4)
            ORDER BY r.created_at
            "#
        );

        let results = sqlx::query_as::<_, ResultEntry>(&query)
            .bind(event_id)
            .bind(filter.competition_id)
            .bind(filter.country_id.as_deref())
            .bind(filter.continent_id.as_deref())
            .fetch_all(pool)
            .await?;

        Ok(results)
    }

    /// Every result of one competitor
    pub async fn find_by_competitor(
        pool: &PgPool,
        competitor_id: &Uuid,
    ) -> AppResult<Vec<ResultEntry>> {
        let query = format!(
            r#"
            SELECT {RESULT_COLUMNS}
            FROM results r
            JOIN competitors c ON c.id = r.competitor_id
            WHERE r.competitor_id = $1
            ORDER BY r.event_id, r.created_at
            "#
        );

        let results = sqlx::query_as::<_, ResultEntry>(&query)
            .bind(competitor_id)
            .fetch_all(pool)
            .await?;

        Ok(results)
    }

    /// Insert or replace a competitor's solves for one event of a competition
    pub async fn upsert_solves(
        pool: &PgPool,
        competition_id: &Uuid,
        event_id: &str,
        competitor_id: &Uuid,
        solves: &[String],
        status: ResultStatus,
    ) -> AppResult<ResultEntry> {
        let query = format!(
            r#"
            WITH saved AS (
                INSERT INTO results (competition_id, event_id, competitor_id, solves, status)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (competition_id, event_id, competitor_id)
                DO UPDATE SET solves = EXCLUDED.solves, status = EXCLUDED.status, updated_at = NOW()
                RETURNING *
            )
            SELECT {RESULT_COLUMNS}
            FROM saved r
            JOIN competitors c ON c.id = r.competitor_id
            "#
        );

        let result = sqlx::query_as::<_, ResultEntry>(&query)
            .bind(competition_id)
            .bind(event_id)
            .bind(competitor_id)
            .bind(solves)
            .bind(status.as_str())
            .fetch_one(pool)
            .await?;

        Ok(result)
    }
}
