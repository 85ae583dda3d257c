use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::leaderboard::repository::LeaderboardRepository;
use models::{
    dto::{LeaderboardEntryDto, NewScoreDto},
    leaderboard_entry, player,
};

/// Leaderboard listings are truncated to this many rows when the caller
/// does not ask for a limit.
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Business rules for leaderboard entries: one entry per existing player,
/// zero-initialized on creation, monotonic high score via score posting.
pub struct LeaderboardService<R: LeaderboardRepository> {
    repo: Arc<R>,
}

impl<R: LeaderboardRepository> LeaderboardService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Entries joined with their player, ordered by total score descending.
    /// A non-positive limit yields an empty listing.
    pub async fn list_top(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<(leaderboard_entry::Model, Option<player::Model>)>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).max(0) as u64;
        self.repo.top(limit).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<leaderboard_entry::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("leaderboard entry"))
    }

    /// Create an entry for an existing player without one. Games and score
    /// values supplied in the payload are ignored; a fresh entry starts at
    /// zero.
    pub async fn create(
        &self,
        data: &LeaderboardEntryDto,
    ) -> Result<leaderboard_entry::Model, ServiceError> {
        if !self.repo.player_exists(data.player_id).await? {
            return Err(ServiceError::bad_request("player does not exist"));
        }
        if self.repo.player_has_entry(data.player_id).await? {
            return Err(ServiceError::bad_request("player already has an entry"));
        }
        let created = self.repo.insert(data.player_id).await?;
        info!(id = created.id, player_id = created.player_id, "leaderboard_entry_created");
        Ok(created)
    }

    /// Full replace of player id, games-played and total score.
    ///
    /// Reassigning the entry to a different player is rejected unless the
    /// new player exists and no entry references that player id.
    pub async fn update(&self, id: i64, data: &LeaderboardEntryDto) -> Result<(), ServiceError> {
        if data.id != id {
            return Err(ServiceError::bad_request("path id does not match payload id"));
        }
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("leaderboard entry"))?;
        if current.player_id != data.player_id
            && (!self.repo.player_exists(data.player_id).await?
                || self.repo.player_has_entry(data.player_id).await?)
        {
            return Err(ServiceError::bad_request("cannot move entry to that player"));
        }
        self.repo
            .update(current, data.player_id, data.games_played, data.total_score)
            .await
    }

    /// Record a finished game: games-played always increments, the total
    /// score only moves up when the posted score beats the stored one.
    pub async fn post_score(&self, score: &NewScoreDto) -> Result<(), ServiceError> {
        let current = self
            .repo
            .find_by_player(score.player_id)
            .await?
            .ok_or_else(|| ServiceError::bad_request("no entry for that player"))?;
        let games_played = current.games_played + 1;
        let total_score = if score.total_score > current.total_score {
            score.total_score
        } else {
            current.total_score
        };
        self.repo.record_score(current, games_played, total_score).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("leaderboard entry"))?;
        self.repo.delete(current).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::repository::SeaOrmLeaderboardRepository;
    use crate::test_support::seeded_db;
    use sea_orm::EntityTrait;

    async fn service() -> Result<LeaderboardService<SeaOrmLeaderboardRepository>, anyhow::Error> {
        let db = seeded_db().await?;
        Ok(LeaderboardService::new(Arc::new(SeaOrmLeaderboardRepository { db })))
    }

    fn entry_payload(id: i64, player_id: i64, games: i64, score: i64) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            id,
            player_id,
            games_played: games,
            total_score: score,
        }
    }

    #[tokio::test]
    async fn top_defaults_to_ten_rows_ordered_by_score() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let top = svc.list_top(None).await?;
        assert_eq!(top.len(), 10);
        let scores: Vec<i64> = top.iter().map(|(e, _)| e.total_score).collect();
        assert_eq!(scores, vec![1000, 900, 800, 700, 600, 500, 400, 300, 200, 100]);
        Ok(())
    }

    #[tokio::test]
    async fn top_truncates_to_limit_and_joins_player() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let top = svc.list_top(Some(5)).await?;
        let ids: Vec<i64> = top.iter().map(|(e, _)| e.id).collect();
        assert_eq!(ids, vec![10, 9, 8, 7, 6]);
        let first_owner = top[0].1.as_ref().unwrap();
        assert_eq!(first_owner.first_name, "Pete");

        // A limit past the row count returns everything there is
        assert_eq!(svc.list_top(Some(50)).await?.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn non_positive_limit_yields_empty_listing() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(svc.list_top(Some(0)).await?.is_empty());
        assert!(svc.list_top(Some(-3)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_reports_not_found_when_absent() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert_eq!(svc.get_by_id(3).await?.total_score, 300);
        assert!(matches!(svc.get_by_id(100).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_starts_at_zero_and_ignores_supplied_stats() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        // Player 11 is seeded without an entry
        let created = svc.create(&entry_payload(0, 11, 99, 9999)).await?;
        assert_eq!(created.player_id, 11);
        assert_eq!(created.games_played, 0);
        assert_eq!(created.total_score, 0);
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_an_existing_player_without_entry() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let missing = svc.create(&entry_payload(0, 100, 0, 0)).await;
        assert!(matches!(missing, Err(ServiceError::BadRequest(_))));

        let taken = svc.create(&entry_payload(0, 1, 0, 0)).await;
        assert!(matches!(taken, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_requires_matching_ids() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc.update(1, &entry_payload(2, 1, 1, 100)).await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_entry_reports_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc.update(100, &entry_payload(100, 1, 1, 100)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_stats_for_same_player() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.update(1, &entry_payload(1, 1, 5, 550)).await?;
        let updated = svc.get_by_id(1).await?;
        assert_eq!(updated.games_played, 5);
        assert_eq!(updated.total_score, 550);
        Ok(())
    }

    // Pins the literal reassignment rule: the move is rejected when the new
    // player is missing or any entry already carries that player id.
    #[tokio::test]
    async fn reassignment_is_allowed_only_to_a_free_existing_player() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        // Player 11 exists and owns no entry: allowed
        svc.update(1, &entry_payload(1, 11, 1, 100)).await?;
        assert_eq!(svc.get_by_id(1).await?.player_id, 11);

        // Player 10 already owns entry 10: rejected
        let taken = svc.update(2, &entry_payload(2, 10, 2, 200)).await;
        assert!(matches!(taken, Err(ServiceError::BadRequest(_))));

        // Player 999 does not exist: rejected
        let missing = svc.update(2, &entry_payload(2, 999, 2, 200)).await;
        assert!(matches!(missing, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn posting_a_low_score_only_bumps_games_played() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        // Entry 1: games_played = 1, total_score = 100
        svc.post_score(&NewScoreDto { player_id: 1, total_score: 50 }).await?;
        let entry = svc.get_by_id(1).await?;
        assert_eq!(entry.games_played, 2);
        assert_eq!(entry.total_score, 100);
        Ok(())
    }

    #[tokio::test]
    async fn posting_a_high_score_updates_the_total() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.post_score(&NewScoreDto { player_id: 1, total_score: 150 }).await?;
        let entry = svc.get_by_id(1).await?;
        assert_eq!(entry.games_played, 2);
        assert_eq!(entry.total_score, 150);

        // Equal score is not "strictly greater"
        svc.post_score(&NewScoreDto { player_id: 1, total_score: 150 }).await?;
        let entry = svc.get_by_id(1).await?;
        assert_eq!(entry.games_played, 3);
        assert_eq!(entry.total_score, 150);
        Ok(())
    }

    #[tokio::test]
    async fn posting_for_a_player_without_entry_is_rejected() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc.post_score(&NewScoreDto { player_id: 11, total_score: 10 }).await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_entry() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.delete(10).await?;
        assert!(matches!(svc.get_by_id(10).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(100).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn stale_write_after_row_deletion_reports_not_found() -> Result<(), anyhow::Error> {
        let db = seeded_db().await?;
        let repo = SeaOrmLeaderboardRepository { db: db.clone() };
        let stale = repo.find_by_id(10).await?.unwrap();

        models::leaderboard_entry::Entity::delete_by_id(10).exec(&db).await?;

        let result = repo.update(stale, 10, 11, 1100).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
