//! Rankings service

use uuid::Uuid;

use crate::{
    db::{repositories::ResultFilter, ResultStore},
    engine::{build_rankings, RankingKind, ReferenceBests},
    error::{AppError, AppResult},
    handlers::{
        competitions::response::CompetitionResultsResponse,
        rankings::response::{EventResponse, RankingsEntryResponse, RankingsResponse},
    },
};

use super::event_scoring;

/// Parameters of an event leaderboard request
#[derive(Debug, Clone)]
pub struct RankingsQueryParams {
    pub kind: RankingKind,
    pub country_id: Option<String>,
    pub continent_id: Option<String>,
    /// 1-based
    pub page: u32,
    pub per_page: u32,
}

/// Rankings service for leaderboards
pub struct RankingsService;

impl RankingsService {
    /// Every event, in id order
    pub async fn events<S>(store: &S) -> AppResult<Vec<EventResponse>>
    where
        S: ResultStore + ?Sized,
    {
        let events = store.events().await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Leaderboard of one event. Record tags are computed against the whole
    /// event history even when the leaderboard is scoped to a region.
    pub async fn event_rankings<S>(
        store: &S,
        event_id: &str,
        params: RankingsQueryParams,
    ) -> AppResult<RankingsResponse>
    where
        S: ResultStore + ?Sized,
    {
        let (_, scoring) = event_scoring(store, event_id).await?;

        let history = store
            .results_for_event(event_id, &ResultFilter::default())
            .await?;

        let filter = ResultFilter {
            competition_id: None,
            country_id: params.country_id,
            continent_id: params.continent_id,
        };
        let regional;
        let rows = if filter == ResultFilter::default() {
            &history
        } else {
            regional = store.results_for_event(event_id, &filter).await?;
            &regional
        };

        let mut entries = build_rankings(rows, &scoring, params.kind)?;
        ReferenceBests::from_history(&history, &scoring, params.kind)?
            .classify_entries(&mut entries);

        let total = entries.len();
        let page = params.page.max(1);
        let skip = (page as usize - 1).saturating_mul(params.per_page as usize);

        tracing::debug!(
            event_id,
            kind = params.kind.as_str(),
            total,
            page,
            "Built event rankings"
        );

        Ok(RankingsResponse {
            event_id: event_id.to_string(),
            ranking_type: params.kind.as_str().to_string(),
            entries: entries
                .into_iter()
                .skip(skip)
                .take(params.per_page as usize)
                .map(RankingsEntryResponse::from)
                .collect(),
            total,
            page,
            per_page: params.per_page,
        })
    }

    /// Leaderboard of one event within one competition. Ranked by average
    /// when the format has one, by single otherwise.
    pub async fn competition_results<S>(
        store: &S,
        competition_id: &Uuid,
        event_id: &str,
    ) -> AppResult<CompetitionResultsResponse>
    where
        S: ResultStore + ?Sized,
    {
        let competition = store
            .competition(competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let (_, scoring) = event_scoring(store, event_id).await?;
        let kind = if scoring.format.has_average() {
            RankingKind::Average
        } else {
            RankingKind::Single
        };

        let rows = store
            .results_for_event(event_id, &ResultFilter::competition(competition.id))
            .await?;
        let history = store
            .results_for_event(event_id, &ResultFilter::default())
            .await?;

        let mut entries = build_rankings(&rows, &scoring, kind)?;
        ReferenceBests::from_history(&history, &scoring, kind)?.classify_entries(&mut entries);

        Ok(CompetitionResultsResponse {
            competition_id: competition.id,
            event_id: event_id.to_string(),
            ranking_type: kind.as_str().to_string(),
            entries: entries.into_iter().map(RankingsEntryResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MockResultStore;
    use crate::engine::RecordTag;
    use crate::services::fixtures::{event, open_competition, result, Row};
    use crate::models::ResultEntry;

    const ADA: Row<'static> = Row {
        competitor_id: Uuid::from_u128(1),
        name: "Ada",
        country: "PL",
        continent: "EU",
    };
    const BO: Row<'static> = Row {
        competitor_id: Uuid::from_u128(2),
        name: "Bo",
        country: "US",
        continent: "NA",
    };
    const CY: Row<'static> = Row {
        competitor_id: Uuid::from_u128(3),
        name: "Cy",
        country: "PL",
        continent: "EU",
    };

    fn history() -> Vec<ResultEntry> {
        let competition = Uuid::from_u128(100);
        vec![
            result(&ADA, "333", competition, &["10.00", "11.00", "12.00", "13.00", "14.00"], "visible"),
            result(&BO, "333", competition, &["9.00", "DNF", "DNF", "10.00", "11.00"], "visible"),
            result(&CY, "333", competition, &["8.00", "8.50", "9.00", "9.50", "10.00"], "pending"),
        ]
    }

    fn params(kind: RankingKind) -> RankingsQueryParams {
        RankingsQueryParams {
            kind,
            country_id: None,
            continent_id: None,
            page: 1,
            per_page: 50,
        }
    }

    fn store_with_history() -> MockResultStore {
        let mut store = MockResultStore::new();
        store
            .expect_event()
            .returning(|id| Ok(Some(event(id, "ao5"))));
        store
            .expect_results_for_event()
            .withf(|_, filter| *filter == ResultFilter::default())
            .returning(|_, _| Ok(history()));
        store
    }

    #[tokio::test]
    async fn test_single_rankings_skip_hidden_rows() {
        let store = store_with_history();

        let rankings = RankingsService::event_rankings(&store, "333", params(RankingKind::Single))
            .await
            .unwrap();

        assert_eq!(rankings.total, 2);
        assert_eq!(rankings.entries[0].competitor_name, "Bo");
        assert_eq!(rankings.entries[0].result, "9.00");
        assert_eq!(rankings.entries[0].record, Some(RecordTag::World));
        assert_eq!(rankings.entries[1].competitor_name, "Ada");
        assert_eq!(rankings.entries[1].place, "2.");
        assert_eq!(rankings.entries[1].record, Some(RecordTag::Continental));
    }

    #[tokio::test]
    async fn test_average_rankings_drop_dnf_averages() {
        let store = store_with_history();

        let rankings = RankingsService::event_rankings(&store, "333", params(RankingKind::Average))
            .await
            .unwrap();

        assert_eq!(rankings.ranking_type, "average");
        assert_eq!(rankings.total, 1);
        assert_eq!(rankings.entries[0].result, "12.00");
        assert_eq!(
            rankings.entries[0].times,
            vec!["(10.00)", "11.00", "12.00", "13.00", "(14.00)"]
        );
    }

    #[tokio::test]
    async fn test_regional_rankings_keep_world_tags() {
        let mut store = store_with_history();
        store
            .expect_results_for_event()
            .withf(|_, filter| filter.country_id.as_deref() == Some("PL"))
            .returning(|_, _| {
                Ok(history()
                    .into_iter()
                    .filter(|row| row.country_id == "PL")
                    .collect())
            });

        let mut query = params(RankingKind::Single);
        query.country_id = Some("PL".to_string());
        let rankings = RankingsService::event_rankings(&store, "333", query).await.unwrap();

        assert_eq!(rankings.total, 1);
        assert_eq!(rankings.entries[0].competitor_name, "Ada");
        assert_eq!(rankings.entries[0].place, "1.");
        // Bo still holds the world record
        assert_eq!(rankings.entries[0].record, Some(RecordTag::Continental));
    }

    #[tokio::test]
    async fn test_pagination() {
        let store = store_with_history();

        let mut query = params(RankingKind::Single);
        query.page = 2;
        query.per_page = 1;
        let rankings = RankingsService::event_rankings(&store, "333", query).await.unwrap();

        assert_eq!(rankings.total, 2);
        assert_eq!(rankings.entries.len(), 1);
        assert_eq!(rankings.entries[0].competitor_name, "Ada");
    }

    #[tokio::test]
    async fn test_events_flag_fmc() {
        let mut store = MockResultStore::new();
        store
            .expect_events()
            .returning(|| Ok(vec![event("333", "ao5"), event("333fm", "mo3")]));

        let events = RankingsService::events(&store).await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(!events[0].is_fmc);
        assert!(events[1].is_fmc);
    }

    #[tokio::test]
    async fn test_unknown_event() {
        let mut store = MockResultStore::new();
        store.expect_event().returning(|_| Ok(None));

        let err = RankingsService::event_rankings(&store, "777", params(RankingKind::Single))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_competition_results_use_average_when_available() {
        let competition_id = Uuid::from_u128(100);
        let mut store = store_with_history();
        store
            .expect_competition()
            .returning(|id| Ok(Some(open_competition(*id))));
        store
            .expect_results_for_event()
            .withf(move |_, filter| filter.competition_id == Some(competition_id))
            .returning(|_, _| Ok(history()));

        let results = RankingsService::competition_results(&store, &competition_id, "333")
            .await
            .unwrap();

        assert_eq!(results.ranking_type, "average");
        assert_eq!(results.entries.len(), 1);
        assert_eq!(results.entries[0].record, Some(RecordTag::World));
    }

    #[tokio::test]
    async fn test_competition_results_unknown_competition() {
        let mut store = MockResultStore::new();
        store.expect_competition().returning(|_| Ok(None));

        let err = RankingsService::competition_results(&store, &Uuid::new_v4(), "333")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
