//! Record classification
//!
//! Best-known values are passed in explicitly by the caller for every
//! request; nothing here is cached between calls.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::ResultEntry;

use super::aggregate::{average_of, best_of, EventScoring};
use super::duration::SolveTime;
use super::rankings::{RankingKind, RankingsEntry};
use super::EngineError;

/// Record tier, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordTag {
    #[serde(rename = "WR")]
    World,
    #[serde(rename = "CR")]
    Continental,
    #[serde(rename = "NR")]
    National,
    #[serde(rename = "PB")]
    Personal,
}

impl RecordTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::World => "WR",
            Self::Continental => "CR",
            Self::National => "NR",
            Self::Personal => "PB",
        }
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-known values for one event and ranking kind
#[derive(Debug, Clone, Default)]
pub struct ReferenceBests {
    world: Option<SolveTime>,
    continental: HashMap<String, SolveTime>,
    national: HashMap<String, SolveTime>,
    /// Every rankable value of each competitor with the time it was recorded
    personal: HashMap<Uuid, Vec<(DateTime<Utc>, SolveTime)>>,
}

impl ReferenceBests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect bests from historical rows. Hidden rows and unrankable values are ignored.
    pub fn from_history(
        rows: &[ResultEntry],
        scoring: &EventScoring,
        kind: RankingKind,
    ) -> Result<Self, EngineError> {
        let mut bests = Self::new();
        for row in rows.iter().filter(|row| row.is_visible()) {
            let attempts = scoring.attempts(row)?;
            let value = match kind {
                RankingKind::Single => Some(best_of(&attempts)),
                RankingKind::Average => average_of(&attempts, scoring.format.aggregation()),
            };
            if let Some(value) = value {
                bests.observe(
                    row.competitor_id,
                    &row.continent_id,
                    &row.country_id,
                    value,
                    row.created_at,
                );
            }
        }
        Ok(bests)
    }

    /// Fold one result into every scope it belongs to
    pub fn observe(
        &mut self,
        competitor_id: Uuid,
        continent_id: &str,
        country_id: &str,
        value: SolveTime,
        recorded_at: DateTime<Utc>,
    ) {
        if !value.is_rankable() {
            return;
        }
        keep_best(&mut self.world, value);
        keep_best_in(&mut self.continental, continent_id.to_string(), value);
        keep_best_in(&mut self.national, country_id.to_string(), value);
        self.personal
            .entry(competitor_id)
            .or_default()
            .push((recorded_at, value));
    }

    pub fn world(&self) -> Option<SolveTime> {
        self.world
    }

    pub fn continental(&self, continent_id: &str) -> Option<SolveTime> {
        self.continental.get(continent_id).copied()
    }

    pub fn national(&self, country_id: &str) -> Option<SolveTime> {
        self.national.get(country_id).copied()
    }

    pub fn personal(&self, competitor_id: &Uuid) -> Option<SolveTime> {
        self.personal
            .get(competitor_id)?
            .iter()
            .map(|(_, value)| *value)
            .min()
    }

    /// Competitor's best among results recorded strictly before `before`
    pub fn personal_before(
        &self,
        competitor_id: &Uuid,
        before: DateTime<Utc>,
    ) -> Option<SolveTime> {
        self.personal
            .get(competitor_id)?
            .iter()
            .filter(|(recorded_at, _)| *recorded_at < before)
            .map(|(_, value)| *value)
            .min()
    }

    /// Highest tier whose best-known value this result matches or beats.
    /// WR, CR and NR compare against current bests; PB compares against the
    /// competitor's results recorded before this one, so a first result is
    /// left unmarked.
    pub fn classify(
        &self,
        value: SolveTime,
        competitor_id: &Uuid,
        continent_id: &str,
        country_id: &str,
        recorded_at: DateTime<Utc>,
    ) -> Option<RecordTag> {
        if !value.is_rankable() {
            return None;
        }
        let holds = |best: Option<SolveTime>| best.is_some_and(|best| value <= best);

        if holds(self.world) {
            Some(RecordTag::World)
        } else if holds(self.continental(continent_id)) {
            Some(RecordTag::Continental)
        } else if holds(self.national(country_id)) {
            Some(RecordTag::National)
        } else if holds(self.personal_before(competitor_id, recorded_at)) {
            Some(RecordTag::Personal)
        } else {
            None
        }
    }

    /// Tag every entry of a leaderboard
    pub fn classify_entries(&self, entries: &mut [RankingsEntry]) {
        for entry in entries {
            entry.record = self.classify(
                entry.value,
                &entry.competitor_id,
                &entry.continent_id,
                &entry.country_id,
                entry.recorded_at,
            );
        }
    }
}

fn keep_best(slot: &mut Option<SolveTime>, value: SolveTime) {
    if slot.is_none_or(|best| value < best) {
        *slot = Some(value);
    }
}

fn keep_best_in<K: std::hash::Hash + Eq>(map: &mut HashMap<K, SolveTime>, key: K, value: SolveTime) {
    map.entry(key)
        .and_modify(|best| {
            if value < *best {
                *best = value;
            }
        })
        .or_insert(value);
}
