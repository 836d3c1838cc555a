//! Result computation response DTOs

use serde::Serialize;

/// Computed values for submitted attempts
#[derive(Debug, Serialize)]
pub struct ComputedResultResponse {
    pub format: String,
    pub single: String,
    /// Absent for formats without an average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<String>,
    pub times: Vec<String>,
}

/// Outcome of an FMC check
#[derive(Debug, Serialize)]
pub struct FmcValidationResponse {
    pub valid: bool,
    /// Move count, or "DNF"
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_count: Option<u64>,
}
