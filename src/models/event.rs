//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::FMC_ICON_CODE;

/// Event reference data
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub icon_code: String,
    /// Format code such as "ao5"
    pub format: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether results of this event are FMC solutions rather than times
    pub fn is_fmc(&self) -> bool {
        self.icon_code == FMC_ICON_CODE
    }
}
