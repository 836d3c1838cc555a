//! Rankings request DTOs

use serde::Deserialize;
use validator::Validate;

/// Query string of the rankings endpoint
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RankingsQuery {
    /// "single" (default) or "average"
    #[serde(rename = "type")]
    pub ranking_type: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub country: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub continent: Option<String>,

    #[validate(range(min = 1))]
    pub page: Option<u32>,

    pub per_page: Option<u32>,
}
