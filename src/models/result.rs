//! Result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::result_statuses;

/// One competitor's attempts at one event in one competition, joined with
/// the competitor's name and region
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub event_id: String,
    pub competitor_id: Uuid,
    pub competitor_name: String,
    pub country_id: String,
    pub continent_id: String,
    /// Raw solve text, at most five slots; unused slots are empty
    pub solves: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResultEntry {
    /// Parsed status. Unknown values are treated as pending.
    pub fn status(&self) -> ResultStatus {
        ResultStatus::from_str(&self.status).unwrap_or(ResultStatus::Pending)
    }

    /// Only visible results take part in rankings
    pub fn is_visible(&self) -> bool {
        self.status() == ResultStatus::Visible
    }
}

/// Result review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Visible,
    Pending,
    Approved,
    Denied,
}

impl ResultStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => result_statuses::VISIBLE,
            Self::Pending => result_statuses::PENDING,
            Self::Approved => result_statuses::APPROVED,
            Self::Denied => result_statuses::DENIED,
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            result_statuses::VISIBLE => Some(Self::Visible),
            result_statuses::PENDING => Some(Self::Pending),
            result_statuses::APPROVED => Some(Self::Approved),
            result_statuses::DENIED => Some(Self::Denied),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
