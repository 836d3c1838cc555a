//! Competition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Competition database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Competition {
    /// Results may be saved only while the competition window is open
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_time && now < self.end_time
    }

    /// Check against the current time
    pub fn is_open(&self) -> bool {
        self.is_open_at(Utc::now())
    }
}

/// Scrambles used for one event of one competition, in attempt order
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CompetitionScrambles {
    pub competition_id: Uuid,
    pub event_id: String,
    pub scrambles: Vec<String>,
}
