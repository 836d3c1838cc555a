//! Competition formats
//!
//! A format code such as `"ao5"` ends in the number of attempts it is built
//! from; that count also picks how the attempts are aggregated.

use std::fmt;
use std::str::FromStr;

use super::EngineError;

/// How attempts are combined into an average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Best-of-N: only a single is defined
    BestOnly,
    /// Mean of every attempt
    Mean,
    /// Drop the best and worst attempt, mean of the rest
    TrimmedMean,
}

/// A parsed format code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    code: String,
    attempts: usize,
    aggregation: Aggregation,
}

impl Format {
    /// The code this format was parsed from
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of attempts a result in this format is made of
    pub fn attempt_count(&self) -> usize {
        self.attempts
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Whether an average ranking exists for this format
    pub fn has_average(&self) -> bool {
        self.aggregation != Aggregation::BestOnly
    }
}

impl FromStr for Format {
    type Err = EngineError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let attempts = code
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| EngineError::MissingAttemptCount(code.to_string()))?
            as usize;

        let aggregation = match attempts {
            1 => Aggregation::BestOnly,
            3 => Aggregation::Mean,
            5 => Aggregation::TrimmedMean,
            _ => return Err(EngineError::UnknownFormat(code.to_string())),
        };

        Ok(Self {
            code: code.to_string(),
            attempts,
            aggregation,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
