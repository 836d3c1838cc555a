//! Data access used by the services
//!
//! Services depend on [`ResultStore`] instead of a pool so they can be
//! exercised against mocks.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Competition, Event, ResultEntry, ResultStatus},
};

use super::repositories::{
    CompetitionRepository, EventRepository, ResultFilter, ResultRepository, ScrambleRepository,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn event(&self, event_id: &str) -> AppResult<Option<Event>>;

    async fn events(&self) -> AppResult<Vec<Event>>;

    async fn competition(&self, competition_id: &Uuid) -> AppResult<Option<Competition>>;

    /// Scrambles of an event keyed by competition
    async fn scrambles(&self, event_id: &str) -> AppResult<HashMap<Uuid, Vec<String>>>;

    async fn results_for_event(
        &self,
        event_id: &str,
        filter: &ResultFilter,
    ) -> AppResult<Vec<ResultEntry>>;

    async fn results_for_competitor(&self, competitor_id: &Uuid) -> AppResult<Vec<ResultEntry>>;

    async fn save_solves(
        &self,
        competition_id: &Uuid,
        event_id: &str,
        competitor_id: &Uuid,
        solves: &[String],
        status: ResultStatus,
    ) -> AppResult<ResultEntry>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn event(&self, event_id: &str) -> AppResult<Option<Event>> {
        EventRepository::find_by_id(&self.pool, event_id).await
    }

    async fn events(&self) -> AppResult<Vec<Event>> {
        EventRepository::list(&self.pool).await
    }

    async fn competition(&self, competition_id: &Uuid) -> AppResult<Option<Competition>> {
        CompetitionRepository::find_by_id(&self.pool, competition_id).await
    }

    async fn scrambles(&self, event_id: &str) -> AppResult<HashMap<Uuid, Vec<String>>> {
        ScrambleRepository::find_by_event(&self.pool, event_id).await
    }

    async fn results_for_event(
        &self,
        event_id: &str,
        filter: &ResultFilter,
    ) -> AppResult<Vec<ResultEntry>> {
        ResultRepository::find_by_event(&self.pool, event_id, filter).await
    }

    async fn results_for_competitor(&self, competitor_id: &Uuid) -> AppResult<Vec<ResultEntry>> {
        ResultRepository::find_by_competitor(&self.pool, competitor_id).await
    }

    async fn save_solves(
        &self,
        competition_id: &Uuid,
        event_id: &str,
        competitor_id: &Uuid,
        solves: &[String],
        status: ResultStatus,
    ) -> AppResult<ResultEntry> {
        ResultRepository::upsert_solves(
            &self.pool,
            competition_id,
            event_id,
            competitor_id,
            solves,
            status,
        )
        .await
    }
}
