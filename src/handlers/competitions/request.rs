//! Competition request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::constants::{MAX_SOLVE_TEXT_LENGTH, MAX_SUBMITTED_SOLVES};

/// Submit or replace a competitor's attempts
#[derive(Debug, Deserialize, Validate)]
pub struct SaveSolvesRequest {
    pub competitor_id: Uuid,

    /// Raw attempt text: clock times, "DNF", "DNS", or FMC solutions
    #[validate(length(max = MAX_SUBMITTED_SOLVES), custom(function = "validate_solve_text"))]
    pub solves: Vec<String>,
}

pub(crate) fn validate_solve_text(solves: &[String]) -> Result<(), ValidationError> {
    if solves.iter().any(|solve| solve.len() as u64 > MAX_SOLVE_TEXT_LENGTH) {
        return Err(ValidationError::new("solve_too_long"));
    }
    Ok(())
}
