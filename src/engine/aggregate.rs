//! Singles and averages
//!
//! A result row holds raw attempt text. [`EventScoring`] knows how to read
//! that text for one event (clock times, or FMC solutions checked on a
//! virtual cube) and how the event's format combines attempts.

use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::{DNF_TEXT, DNS_TEXT, VERY_SLOW_MS};
use crate::models::{Event, ResultEntry};

use super::cube::{format_moves, validate_fmc};
use super::duration::SolveTime;
use super::format::{Aggregation, Format};
use super::EngineError;

/// How attempt text is read for an event
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Attempts are clock times
    Timed,
    /// Attempts are FMC solutions, checked against the scrambles of the
    /// competition they were submitted in
    FewestMoves {
        scrambles: HashMap<Uuid, Vec<String>>,
    },
}

/// Everything needed to score results of one event
#[derive(Debug, Clone)]
pub struct EventScoring {
    pub event_id: String,
    pub format: Format,
    pub kind: EventKind,
}

impl EventScoring {
    /// Scoring for a timed event
    pub fn timed(event_id: impl Into<String>, format: Format) -> Self {
        Self {
            event_id: event_id.into(),
            format,
            kind: EventKind::Timed,
        }
    }

    /// Scoring for the FMC event
    pub fn fewest_moves(
        event_id: impl Into<String>,
        format: Format,
        scrambles: HashMap<Uuid, Vec<String>>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            format,
            kind: EventKind::FewestMoves { scrambles },
        }
    }

    /// Build scoring from event reference data. Scrambles are only kept for FMC.
    pub fn from_event(
        event: &Event,
        scrambles: HashMap<Uuid, Vec<String>>,
    ) -> Result<Self, EngineError> {
        let format: Format = event.format.parse()?;
        if event.is_fmc() {
            Ok(Self::fewest_moves(&event.id, format, scrambles))
        } else {
            Ok(Self::timed(&event.id, format))
        }
    }

    pub fn is_fmc(&self) -> bool {
        matches!(self.kind, EventKind::FewestMoves { .. })
    }

    /// Parse the attempts of a row that count under this event's format
    pub fn attempts(&self, entry: &ResultEntry) -> Result<Vec<SolveTime>, EngineError> {
        self.attempts_of(entry.competition_id, &entry.solves)
    }

    /// Parse raw attempt text submitted in `competition_id`. Slots past the
    /// end of `solves` read as empty.
    pub fn attempts_of(
        &self,
        competition_id: Uuid,
        solves: &[String],
    ) -> Result<Vec<SolveTime>, EngineError> {
        (0..self.format.attempt_count())
            .map(|index| {
                let text = solves.get(index).map(String::as_str).unwrap_or("");
                self.attempt(competition_id, index, text.trim())
            })
            .collect()
    }

    fn attempt(
        &self,
        competition_id: Uuid,
        index: usize,
        text: &str,
    ) -> Result<SolveTime, EngineError> {
        let scrambles = match &self.kind {
            EventKind::Timed => return Ok(SolveTime::parse(text)),
            EventKind::FewestMoves { scrambles } => scrambles,
        };

        match text {
            "" | DNS_TEXT => Ok(SolveTime::Dns),
            DNF_TEXT => Ok(SolveTime::Dnf),
            solution => {
                let scramble = scrambles
                    .get(&competition_id)
                    .and_then(|list| list.get(index))
                    .ok_or(EngineError::MissingScrambles(competition_id))?;
                Ok(validate_fmc(scramble, solution))
            }
        }
    }

    /// Render a value the way this event displays results
    pub fn format_value(&self, value: SolveTime) -> String {
        if self.is_fmc() {
            format_moves(value)
        } else {
            value.to_string()
        }
    }
}

/// Best attempt of a row
pub fn single(entry: &ResultEntry, scoring: &EventScoring) -> Result<SolveTime, EngineError> {
    Ok(best_of(&scoring.attempts(entry)?))
}

/// Average (or mean) of a row; `None` when the format defines no average
pub fn average(
    entry: &ResultEntry,
    scoring: &EventScoring,
) -> Result<Option<SolveTime>, EngineError> {
    let attempts = scoring.attempts(entry)?;
    Ok(average_of(&attempts, scoring.format.aggregation()))
}

/// Smallest value; DNS for an empty slice
pub fn best_of(values: &[SolveTime]) -> SolveTime {
    values.iter().min().copied().unwrap_or(SolveTime::Dns)
}

/// Combine attempts according to a format's aggregation rule
pub fn average_of(values: &[SolveTime], aggregation: Aggregation) -> Option<SolveTime> {
    match aggregation {
        Aggregation::BestOnly => None,
        Aggregation::Mean => Some(plain_mean(values)),
        Aggregation::TrimmedMean => {
            if values.len() < 3 {
                return Some(mean_of(values, values));
            }
            let mut sorted = values.to_vec();
            sorted.sort();
            Some(mean_of(&sorted[1..sorted.len() - 1], values))
        }
    }
}

/// Positions of the best and worst attempt, the two dropped by a trimmed mean
pub fn trimmed_positions(values: &[SolveTime]) -> Option<(usize, usize)> {
    if values.len() < 3 {
        return None;
    }
    let best = (0..values.len()).min_by_key(|&i| values[i])?;
    let worst = (0..values.len())
        .filter(|&i| i != best)
        .max_by_key(|&i| values[i])?;
    Some((best, worst))
}

/// Mean of every attempt. Two or more unfinished attempts make it DNF (DNS
/// when none was started). A single unfinished or too-slow attempt leaves a
/// finite value that still cannot be ranked.
fn plain_mean(values: &[SolveTime]) -> SolveTime {
    let unfinished = values.iter().filter(|value| value.value().is_none()).count();
    if values.is_empty() || unfinished >= 2 {
        return mean_of(&[], values);
    }
    if values.iter().any(|value| !value.is_rankable()) {
        return SolveTime::Finite(VERY_SLOW_MS);
    }
    mean_of(values, values)
}

/// Truncating mean of `counted`. Any unrankable counted value makes the mean
/// DNF, or DNS when no attempt in `all` was started.
fn mean_of(counted: &[SolveTime], all: &[SolveTime]) -> SolveTime {
    if counted.is_empty() || counted.iter().any(|value| !value.is_rankable()) {
        return if all.iter().any(SolveTime::is_started) {
            SolveTime::Dnf
        } else {
            SolveTime::Dns
        };
    }

    let sum: u64 = counted.iter().filter_map(SolveTime::value).sum();
    SolveTime::Finite(sum / counted.len() as u64)
}
