//! Result computation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_ALGORITHM_LENGTH, MAX_FORMAT_CODE_LENGTH, MAX_SUBMITTED_SOLVES};
use crate::handlers::competitions::request::validate_solve_text;

/// Compute a single and average for raw attempts
#[derive(Debug, Deserialize, Validate)]
pub struct ComputeResultRequest {
    /// Format code such as "ao5", "mo3" or "bo1"
    #[validate(length(min = 1, max = MAX_FORMAT_CODE_LENGTH))]
    pub format: String,

    #[validate(length(max = MAX_SUBMITTED_SOLVES), custom(function = "validate_solve_text"))]
    pub solves: Vec<String>,

    /// When present, solves are FMC solutions checked against these scrambles
    #[validate(length(max = MAX_SUBMITTED_SOLVES))]
    pub scrambles: Option<Vec<String>>,
}

/// Check one FMC solution
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateFmcRequest {
    #[validate(length(min = 1, max = MAX_ALGORITHM_LENGTH))]
    pub scramble: String,

    #[validate(length(max = MAX_ALGORITHM_LENGTH))]
    pub solution: String,
}
