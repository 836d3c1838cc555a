//! Result service

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    constants::{DNS_TEXT, FMC_ICON_CODE, MAX_ATTEMPTS},
    db::{repositories::ResultFilter, ResultStore},
    engine::{
        aggregate::{average_of, best_of},
        annotate_times, build_rankings,
        cube::format_moves,
        validate_fmc, EventScoring, Format, RankingKind, ReferenceBests,
    },
    error::{AppError, AppResult},
    handlers::{
        competitions::response::SavedResultResponse,
        competitors::response::{BestResult, EventBests, PersonalBestsResponse},
        results::response::{ComputedResultResponse, FmcValidationResponse},
    },
    models::{ResultEntry, ResultStatus},
};

use super::event_scoring;

/// Result service for computing and saving attempts
pub struct ResultService;

impl ResultService {
    /// Single and average of raw attempts under a format. With scrambles the
    /// attempts are read as FMC solutions, matched to scrambles by position.
    pub fn compute(
        format: &str,
        solves: &[String],
        scrambles: Option<&[String]>,
    ) -> AppResult<ComputedResultResponse> {
        let format: Format = format.parse()?;
        let scoring = match scrambles {
            Some(scrambles) => EventScoring::fewest_moves(
                FMC_ICON_CODE,
                format,
                HashMap::from([(Uuid::nil(), scrambles.to_vec())]),
            ),
            None => EventScoring::timed(String::new(), format),
        };

        let attempts = scoring.attempts_of(Uuid::nil(), solves)?;
        let single = best_of(&attempts);
        let average = average_of(&attempts, scoring.format.aggregation());

        Ok(ComputedResultResponse {
            format: scoring.format.to_string(),
            single: scoring.format_value(single),
            average: average.map(|value| scoring.format_value(value)),
            times: annotate_times(&attempts, &scoring),
        })
    }

    /// Check one FMC solution against its scramble
    pub fn validate_fmc(scramble: &str, solution: &str) -> FmcValidationResponse {
        let value = validate_fmc(scramble, solution);

        FmcValidationResponse {
            valid: value.is_rankable(),
            result: format_moves(value),
            move_count: value.value(),
        }
    }

    /// Best single and average per event for one competitor
    pub async fn personal_bests<S>(
        store: &S,
        competitor_id: &Uuid,
    ) -> AppResult<PersonalBestsResponse>
    where
        S: ResultStore + ?Sized,
    {
        let rows = store.results_for_competitor(competitor_id).await?;

        let mut event_ids: Vec<&str> = rows.iter().map(|row| row.event_id.as_str()).collect();
        event_ids.sort_unstable();
        event_ids.dedup();

        let mut events = Vec::with_capacity(event_ids.len());
        for event_id in event_ids {
            let (event, scoring) = event_scoring(store, event_id).await?;
            let own: Vec<ResultEntry> = rows
                .iter()
                .filter(|row| row.event_id == event_id)
                .cloned()
                .collect();
            let history = store
                .results_for_event(event_id, &ResultFilter::default())
                .await?;

            let single = Self::best_result(&own, &history, &scoring, RankingKind::Single)?;
            let average = if scoring.format.has_average() {
                Self::best_result(&own, &history, &scoring, RankingKind::Average)?
            } else {
                None
            };

            if single.is_some() || average.is_some() {
                events.push(EventBests {
                    event_id: event.id,
                    event_name: event.name,
                    single,
                    average,
                });
            }
        }

        Ok(PersonalBestsResponse {
            competitor_id: *competitor_id,
            events,
        })
    }

    /// Save a competitor's attempts for one event of an open competition.
    /// Attempts are scored before they are stored, so FMC solutions without
    /// scrambles on file are rejected. Saved rows are visible and ranked
    /// straight away.
    pub async fn save_solves<S>(
        store: &S,
        competition_id: &Uuid,
        event_id: &str,
        competitor_id: &Uuid,
        solves: &[String],
    ) -> AppResult<SavedResultResponse>
    where
        S: ResultStore + ?Sized,
    {
        let competition = store
            .competition(competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if !competition.is_open() {
            return Err(AppError::Conflict(
                "Competition is not accepting results".to_string(),
            ));
        }

        let (_, scoring) = event_scoring(store, event_id).await?;
        let solves = normalize_solves(solves);
        let attempts = scoring.attempts_of(competition.id, &solves)?;

        let saved = store
            .save_solves(
                &competition.id,
                event_id,
                competitor_id,
                &solves,
                ResultStatus::Visible,
            )
            .await?;

        tracing::info!(
            competition_id = %competition.id,
            event_id,
            competitor_id = %competitor_id,
            "Saved solves"
        );

        Ok(SavedResultResponse {
            id: saved.id,
            competition_id: saved.competition_id,
            event_id: saved.event_id,
            competitor_id: saved.competitor_id,
            solves: saved.solves,
            status: saved.status,
            single: scoring.format_value(best_of(&attempts)),
            average: average_of(&attempts, scoring.format.aggregation())
                .map(|value| scoring.format_value(value)),
            updated_at: saved.updated_at,
        })
    }

    fn best_result(
        own: &[ResultEntry],
        history: &[ResultEntry],
        scoring: &EventScoring,
        kind: RankingKind,
    ) -> AppResult<Option<BestResult>> {
        let mut entries = build_rankings(own, scoring, kind)?;
        ReferenceBests::from_history(history, scoring, kind)?.classify_entries(&mut entries);

        Ok(entries.into_iter().next().map(|entry| BestResult {
            result: entry.result,
            competition_id: entry.competition_id,
            record: entry.record,
        }))
    }
}

/// Trim attempt text, turn empty slots into DNS and pad to a full row
pub fn normalize_solves(solves: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = solves
        .iter()
        .take(MAX_ATTEMPTS)
        .map(|solve| match solve.trim() {
            "" => DNS_TEXT.to_string(),
            text => text.to_string(),
        })
        .collect();
    normalized.resize(MAX_ATTEMPTS, DNS_TEXT.to_string());
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VERY_SLOW_MS;
    use crate::db::store::MockResultStore;
    use crate::engine::RecordTag;
    use crate::services::fixtures::{event, open_competition, result, Row};
    use crate::services::RankingsService;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_compute_ao5() {
        let solves = strings(&["12.55", "10.14", "8.81", "DNF", "14.43"]);
        let computed = ResultService::compute("ao5", &solves, None).unwrap();

        assert_eq!(computed.single, "8.81");
        assert_eq!(computed.average.as_deref(), Some("12.37"));
        assert_eq!(computed.times, vec!["12.55", "10.14", "(8.81)", "(DNF)", "14.43"]);
    }

    #[test]
    fn test_compute_bo1_has_no_average() {
        let computed = ResultService::compute("bo1", &strings(&["1:05.20"]), None).unwrap();
        assert_eq!(computed.single, "1:05.20");
        assert_eq!(computed.average, None);
    }

    #[test]
    fn test_compute_fmc() {
        let scrambles = strings(&["R U", "F2 D", "L"]);
        let solves = strings(&["U' R'", "D' F2", "DNF"]);
        let computed = ResultService::compute("mo3", &solves, Some(&scrambles)).unwrap();

        assert_eq!(computed.single, "2");
        // One DNF leaves an unrankable mean rather than a DNF
        let unrankable = VERY_SLOW_MS.to_string();
        assert_eq!(computed.average.as_deref(), Some(unrankable.as_str()));

        let solves = strings(&["U' R'", "DNF", "DNS"]);
        let computed = ResultService::compute("mo3", &solves, Some(&scrambles)).unwrap();
        assert_eq!(computed.average.as_deref(), Some("DNF"));
    }

    #[test]
    fn test_compute_rejects_unknown_format() {
        let err = ResultService::compute("avg", &[], None).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));

        let err = ResultService::compute("ao7", &[], None).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[test]
    fn test_validate_fmc() {
        let ok = ResultService::validate_fmc("R U R' U'", "U R U' R'");
        assert!(ok.valid);
        assert_eq!(ok.move_count, Some(4));
        assert_eq!(ok.result, "4");

        let rejected = ResultService::validate_fmc("F'", "y' R y");
        assert!(!rejected.valid);
        assert_eq!(rejected.move_count, None);
        assert_eq!(rejected.result, "DNF");
    }

    #[test]
    fn test_normalize_solves() {
        assert_eq!(
            normalize_solves(&strings(&[" 10.00 ", "", "DNF"])),
            vec!["10.00", "DNS", "DNF", "DNS", "DNS"]
        );
        assert_eq!(normalize_solves(&[]).len(), MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_save_solves_normalizes_and_scores() {
        let competition_id = Uuid::from_u128(7);
        let competitor_id = Uuid::from_u128(8);

        let mut store = MockResultStore::new();
        store
            .expect_competition()
            .returning(|id| Ok(Some(open_competition(*id))));
        store.expect_event().returning(|id| Ok(Some(event(id, "ao5"))));
        store
            .expect_save_solves()
            .withf(|_, event_id, _, solves, status| {
                event_id == "333"
                    && solves == ["10.00", "11.00", "12.00", "DNS", "DNS"]
                    && *status == ResultStatus::Visible
            })
            .times(1)
            .returning(|competition_id, event_id, competitor_id, solves, status| {
                let who = Row {
                    competitor_id: *competitor_id,
                    name: "Ada",
                    country: "PL",
                    continent: "EU",
                };
                let solves: Vec<&str> = solves.iter().map(String::as_str).collect();
                Ok(result(&who, event_id, *competition_id, &solves, status.as_str()))
            });

        let saved = ResultService::save_solves(
            &store,
            &competition_id,
            "333",
            &competitor_id,
            &strings(&["10.00", "11.00", "12.00", ""]),
        )
        .await
        .unwrap();

        assert_eq!(saved.single, "10.00");
        assert_eq!(saved.average.as_deref(), Some("DNF"));
        assert_eq!(saved.solves.len(), MAX_ATTEMPTS);
        assert_eq!(saved.status, "visible");
    }

    #[tokio::test]
    async fn test_saved_result_appears_in_competition_results() {
        let competition_id = Uuid::from_u128(7);
        let competitor_id = Uuid::from_u128(8);
        let saved_rows: Arc<Mutex<Vec<ResultEntry>>> = Arc::default();

        let mut store = MockResultStore::new();
        store
            .expect_competition()
            .returning(|id| Ok(Some(open_competition(*id))));
        store.expect_event().returning(|id| Ok(Some(event(id, "ao5"))));
        let sink = Arc::clone(&saved_rows);
        store.expect_save_solves().times(1).returning(
            move |competition_id, event_id, competitor_id, solves, status| {
                let who = Row {
                    competitor_id: *competitor_id,
                    name: "Ada",
                    country: "PL",
                    continent: "EU",
                };
                let solves: Vec<&str> = solves.iter().map(String::as_str).collect();
                let row = result(&who, event_id, *competition_id, &solves, status.as_str());
                sink.lock().unwrap().push(row.clone());
                Ok(row)
            },
        );
        let source = Arc::clone(&saved_rows);
        store
            .expect_results_for_event()
            .returning(move |_, _| Ok(source.lock().unwrap().clone()));

        ResultService::save_solves(
            &store,
            &competition_id,
            "333",
            &competitor_id,
            &strings(&["10.00", "11.00", "12.00", "13.00", "14.00"]),
        )
        .await
        .unwrap();

        let results = RankingsService::competition_results(&store, &competition_id, "333")
            .await
            .unwrap();

        assert_eq!(results.entries.len(), 1);
        assert_eq!(results.entries[0].competitor_id, competitor_id);
        assert_eq!(results.entries[0].place, "1.");
        assert_eq!(results.entries[0].result, "12.00");
    }

    #[tokio::test]
    async fn test_save_solves_closed_competition() {
        let mut store = MockResultStore::new();
        store.expect_competition().returning(|id| {
            let mut competition = open_competition(*id);
            competition.end_time = Utc::now() - Duration::hours(1);
            Ok(Some(competition))
        });
        store.expect_save_solves().never();

        let err = ResultService::save_solves(
            &store,
            &Uuid::new_v4(),
            "333",
            &Uuid::new_v4(),
            &strings(&["10.00"]),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_save_fmc_without_scrambles_is_rejected() {
        let mut store = MockResultStore::new();
        store
            .expect_competition()
            .returning(|id| Ok(Some(open_competition(*id))));
        store
            .expect_event()
            .returning(|id| Ok(Some(event(id, "mo3"))));
        store.expect_scrambles().returning(|_| Ok(HashMap::new()));
        store.expect_save_solves().never();

        let err = ResultService::save_solves(
            &store,
            &Uuid::new_v4(),
            FMC_ICON_CODE,
            &Uuid::new_v4(),
            &strings(&["R U R'"]),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[tokio::test]
    async fn test_personal_bests() {
        let competition_id = Uuid::from_u128(100);
        let ada = Row {
            competitor_id: Uuid::from_u128(1),
            name: "Ada",
            country: "PL",
            continent: "EU",
        };
        let bo = Row {
            competitor_id: Uuid::from_u128(2),
            name: "Bo",
            country: "US",
            continent: "NA",
        };

        let own = vec![
            result(&ada, "333", competition_id, &["10.00", "11.00", "12.00", "13.00", "14.00"], "visible"),
            result(&ada, "333bf", competition_id, &["DNF"], "visible"),
        ];
        let mut history = own.clone();
        history.push(result(&bo, "333", competition_id, &["9.00", "9.50", "20.00", "20.00", "20.00"], "visible"));

        let mut store = MockResultStore::new();
        store
            .expect_results_for_competitor()
            .returning(move |_| Ok(own.clone()));
        store.expect_event().returning(|id| {
            let format = if id == "333bf" { "bo1" } else { "ao5" };
            Ok(Some(event(id, format)))
        });
        store
            .expect_results_for_event()
            .returning(move |event_id, _| {
                Ok(history
                    .iter()
                    .filter(|row| row.event_id == event_id)
                    .cloned()
                    .collect())
            });

        let bests = ResultService::personal_bests(&store, &ada.competitor_id)
            .await
            .unwrap();

        // 333bf has only a DNF, so it is left out
        assert_eq!(bests.events.len(), 1);
        let cube = &bests.events[0];
        assert_eq!(cube.event_id, "333");

        let single = cube.single.as_ref().unwrap();
        assert_eq!(single.result, "10.00");
        assert_eq!(single.record, Some(RecordTag::Continental));

        let average = cube.average.as_ref().unwrap();
        assert_eq!(average.result, "12.00");
        assert_eq!(average.record, Some(RecordTag::World));
    }
}
