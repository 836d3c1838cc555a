//! Leaderboard assembly
//!
//! Rows go through the same steps for every leaderboard: keep visible,
//! rankable results; project them to entries; keep one entry per
//! competitor; sort; number the places.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::ranking_types;
use crate::models::ResultEntry;

use super::aggregate::{average_of, trimmed_positions, EventScoring};
use super::duration::SolveTime;
use super::format::Aggregation;
use super::records::RecordTag;
use super::EngineError;

/// Which value a leaderboard ranks by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKind {
    Single,
    Average,
}

impl RankingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => ranking_types::SINGLE,
            Self::Average => ranking_types::AVERAGE,
        }
    }
}

impl FromStr for RankingKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ranking_types::SINGLE => Ok(Self::Single),
            ranking_types::AVERAGE => Ok(Self::Average),
            other => Err(EngineError::UnknownRankingKind(other.to_string())),
        }
    }
}

/// One line of a leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct RankingsEntry {
    pub place: String,
    pub competitor_id: Uuid,
    pub competitor_name: String,
    pub country_id: String,
    pub continent_id: String,
    pub competition_id: Uuid,
    pub event_id: String,
    /// Value the entry is ranked by
    pub value: SolveTime,
    /// `value` formatted for display
    pub result: String,
    /// Formatted attempts; for trimmed means the dropped ones are in parentheses
    pub times: Vec<String>,
    /// When the underlying result was first recorded
    pub recorded_at: DateTime<Utc>,
    pub record: Option<RecordTag>,
}

/// Build a sorted, placed leaderboard for one event.
///
/// Single leaderboards project every rankable attempt and then keep each
/// competitor's best, so every competitor appears at most once in both kinds.
pub fn build_rankings(
    rows: &[ResultEntry],
    scoring: &EventScoring,
    kind: RankingKind,
) -> Result<Vec<RankingsEntry>, EngineError> {
    let mut entries = Vec::new();

    for row in rows.iter().filter(|row| row.is_visible()) {
        let attempts = scoring.attempts(row)?;

        match kind {
            RankingKind::Single => {
                let times: Vec<String> = attempts
                    .iter()
                    .map(|value| scoring.format_value(*value))
                    .collect();
                for value in attempts.iter().filter(|value| value.is_rankable()) {
                    entries.push(project(row, scoring, *value, times.clone()));
                }
            }
            RankingKind::Average => {
                let Some(value) = average_of(&attempts, scoring.format.aggregation()) else {
                    continue;
                };
                if value.is_rankable() {
                    let times = annotate_times(&attempts, scoring);
                    entries.push(project(row, scoring, value, times));
                }
            }
        }
    }

    let mut entries = merge_non_unique(entries);
    sort_entries(&mut entries);
    assign_places(&mut entries);
    Ok(entries)
}

/// Keep only the best entry of each competitor, in first-seen order
pub fn merge_non_unique(entries: Vec<RankingsEntry>) -> Vec<RankingsEntry> {
    let mut merged: Vec<RankingsEntry> = Vec::with_capacity(entries.len());
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for entry in entries {
        match positions.get(&entry.competitor_id) {
            Some(&index) => {
                if entry.value < merged[index].value {
                    merged[index] = entry;
                }
            }
            None => {
                positions.insert(entry.competitor_id, merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}

/// Ascending by value, then by competitor name
pub fn sort_entries(entries: &mut [RankingsEntry]) {
    entries.sort_by(|a, b| {
        a.value
            .cmp(&b.value)
            .then_with(|| a.competitor_name.cmp(&b.competitor_name))
    });
}

/// Number sorted entries "1.", "2.", ...; equal values share the place of
/// the first entry with that value
pub fn assign_places(entries: &mut [RankingsEntry]) {
    let mut rank = 0;
    let mut previous: Option<SolveTime> = None;

    for (index, entry) in entries.iter_mut().enumerate() {
        if previous != Some(entry.value) {
            rank = index + 1;
            previous = Some(entry.value);
        }
        entry.place = format!("{}.", rank);
    }
}

/// Format attempts, wrapping the dropped best and worst of a trimmed mean
pub fn annotate_times(attempts: &[SolveTime], scoring: &EventScoring) -> Vec<String> {
    let trimmed = match scoring.format.aggregation() {
        Aggregation::TrimmedMean => trimmed_positions(attempts),
        _ => None,
    };

    attempts
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let text = scoring.format_value(*value);
            match trimmed {
                Some((best, worst)) if index == best || index == worst => format!("({})", text),
                _ => text,
            }
        })
        .collect()
}

fn project(
    row: &ResultEntry,
    scoring: &EventScoring,
    value: SolveTime,
    times: Vec<String>,
) -> RankingsEntry {
    RankingsEntry {
        place: String::new(),
        competitor_id: row.competitor_id,
        competitor_name: row.competitor_name.clone(),
        country_id: row.country_id.clone(),
        continent_id: row.continent_id.clone(),
        competition_id: row.competition_id,
        event_id: row.event_id.clone(),
        value,
        result: scoring.format_value(value),
        times,
        recorded_at: row.created_at,
        record: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, competitor_id: Uuid, solves: &[&str], status: &str) -> ResultEntry {
        ResultEntry {
            id: Uuid::new_v4(),
            competition_id: Uuid::nil(),
            event_id: "333".to_string(),
            competitor_id,
            competitor_name: name.to_string(),
            country_id: "PL".to_string(),
            continent_id: "EU".to_string(),
            solves: solves.iter().map(|s| s.to_string()).collect(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn entry(name: &str, competitor_id: Uuid, value: SolveTime) -> RankingsEntry {
        RankingsEntry {
            place: String::new(),
            competitor_id,
            competitor_name: name.to_string(),
            country_id: "PL".to_string(),
            continent_id: "EU".to_string(),
            competition_id: Uuid::nil(),
            event_id: "333".to_string(),
            value,
            result: value.to_string(),
            times: Vec::new(),
            recorded_at: Utc::now(),
            record: None,
        }
    }

    fn ao5() -> EventScoring {
        EventScoring::timed("333", "ao5".parse().unwrap())
    }

    #[test]
    fn test_merge_keeps_best() {
        let ada = Uuid::new_v4();
        let merged = merge_non_unique(vec![
            entry("Ada", ada, SolveTime::parse("12.34")),
            entry("Ada", ada, SolveTime::parse("11.02")),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].result, "11.02");
    }

    #[test]
    fn test_ties_share_place() {
        let mut entries = vec![
            entry("Cy", Uuid::new_v4(), SolveTime::Finite(9_000)),
            entry("Bo", Uuid::new_v4(), SolveTime::Finite(8_000)),
            entry("Al", Uuid::new_v4(), SolveTime::Finite(9_000)),
            entry("Di", Uuid::new_v4(), SolveTime::Finite(10_000)),
        ];
        sort_entries(&mut entries);
        assign_places(&mut entries);

        let table: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.competitor_name.as_str(), e.place.as_str()))
            .collect();
        assert_eq!(table, vec![("Bo", "1."), ("Al", "2."), ("Cy", "2."), ("Di", "4.")]);
    }

    #[test]
    fn test_average_rankings() {
        let rows = vec![
            row("Ada", Uuid::new_v4(), &["12.55", "10.14", "8.81", "DNF", "14.43"], "visible"),
            row("Bo", Uuid::new_v4(), &["9.00", "9.50", "10.00", "10.50", "11.00"], "visible"),
            row("Cy", Uuid::new_v4(), &["9.00", "DNF", "10.00", "DNF", "11.00"], "visible"),
            row("Di", Uuid::new_v4(), &["5.00", "5.00", "5.00", "5.00", "5.00"], "pending"),
        ];
        let rankings = build_rankings(&rows, &ao5(), RankingKind::Average).unwrap();

        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].competitor_name, "Bo");
        assert_eq!(rankings[0].result, "10.00");
        assert_eq!(rankings[0].place, "1.");
        assert_eq!(rankings[1].competitor_name, "Ada");
        assert_eq!(rankings[1].result, "12.37");
        assert_eq!(
            rankings[1].times,
            vec!["12.55", "10.14", "(8.81)", "(DNF)", "14.43"]
        );
    }

    #[test]
    fn test_mean_times_not_trimmed() {
        let scoring = EventScoring::timed("666", "mo3".parse().unwrap());
        let rows = vec![row("Ada", Uuid::new_v4(), &["1:10.00", "1:20.00", "1:30.00"], "visible")];
        let rankings = build_rankings(&rows, &scoring, RankingKind::Average).unwrap();
        assert_eq!(rankings[0].result, "1:20.00");
        assert_eq!(rankings[0].times, vec!["1:10.00", "1:20.00", "1:30.00"]);
    }

    #[test]
    fn test_single_rankings_one_per_competitor() {
        let ada = Uuid::new_v4();
        let rows = vec![
            row("Ada", ada, &["12.34", "DNF", "13.00", "oops", "14.00"], "visible"),
            row("Ada", ada, &["11.02", "DNS", "DNS", "DNS", "DNS"], "visible"),
            row("Bo", Uuid::new_v4(), &["DNF", "DNF", "DNF", "DNF", "DNF"], "visible"),
            row("Cy", Uuid::new_v4(), &["11.02", "DNF", "DNF", "DNF", "DNF"], "visible"),
        ];
        let rankings = build_rankings(&rows, &ao5(), RankingKind::Single).unwrap();

        let table: Vec<(&str, &str, &str)> = rankings
            .iter()
            .map(|e| (e.place.as_str(), e.competitor_name.as_str(), e.result.as_str()))
            .collect();
        assert_eq!(table, vec![("1.", "Ada", "11.02"), ("1.", "Cy", "11.02")]);
    }

    #[test]
    fn test_average_of_best_of_one_is_empty() {
        let scoring = EventScoring::timed("444bf", "bo1".parse().unwrap());
        let rows = vec![row("Ada", Uuid::new_v4(), &["3:00.00"], "visible")];
        assert!(build_rankings(&rows, &scoring, RankingKind::Average).unwrap().is_empty());
        assert_eq!(build_rankings(&rows, &scoring, RankingKind::Single).unwrap().len(), 1);
    }

    #[test]
    fn test_too_slow_is_filtered() {
        let rows = vec![row("Ada", Uuid::new_v4(), &["9999:00:00:00.00"], "visible")];
        let scoring = EventScoring::timed("333", "bo1".parse().unwrap());
        assert!(build_rankings(&rows, &scoring, RankingKind::Single).unwrap().is_empty());
    }

    #[test]
    fn test_ranking_kind_parse() {
        assert_eq!("single".parse::<RankingKind>(), Ok(RankingKind::Single));
        assert_eq!("average".parse::<RankingKind>(), Ok(RankingKind::Average));
        assert!("mean".parse::<RankingKind>().is_err());
    }
}
