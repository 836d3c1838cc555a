//! Competition repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Competition};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competition)
    }
}
