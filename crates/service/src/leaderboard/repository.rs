use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::ServiceError;
use models::{leaderboard_entry, player};

/// Store access needed by the leaderboard service.
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Entries joined with their owning player, highest total score first,
    /// truncated to `limit` rows.
    async fn top(
        &self,
        limit: u64,
    ) -> Result<Vec<(leaderboard_entry::Model, Option<player::Model>)>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<leaderboard_entry::Model>, ServiceError>;
    async fn find_by_player(
        &self,
        player_id: i64,
    ) -> Result<Option<leaderboard_entry::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn player_exists(&self, player_id: i64) -> Result<bool, ServiceError>;
    async fn player_has_entry(&self, player_id: i64) -> Result<bool, ServiceError>;
    /// Insert a fresh entry for the player, zero games and zero score.
    async fn insert(&self, player_id: i64) -> Result<leaderboard_entry::Model, ServiceError>;
    /// Full replace of player id, games-played and total score. A write
    /// that hits a concurrently deleted row reports NotFound; any other
    /// conditional-write conflict is fatal.
    async fn update(
        &self,
        current: leaderboard_entry::Model,
        player_id: i64,
        games_played: i64,
        total_score: i64,
    ) -> Result<(), ServiceError>;
    /// Persist a score posting. No recheck on this path; any write failure
    /// is fatal.
    async fn record_score(
        &self,
        current: leaderboard_entry::Model,
        games_played: i64,
        total_score: i64,
    ) -> Result<(), ServiceError>;
    async fn delete(&self, current: leaderboard_entry::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmLeaderboardRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl LeaderboardRepository for SeaOrmLeaderboardRepository {
    async fn top(
        &self,
        limit: u64,
    ) -> Result<Vec<(leaderboard_entry::Model, Option<player::Model>)>, ServiceError> {
        leaderboard_entry::Entity::find()
            .find_also_related(player::Entity)
            .order_by_desc(leaderboard_entry::Column::TotalScore)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<leaderboard_entry::Model>, ServiceError> {
        leaderboard_entry::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_player(
        &self,
        player_id: i64,
    ) -> Result<Option<leaderboard_entry::Model>, ServiceError> {
        leaderboard_entry::Entity::find()
            .filter(leaderboard_entry::Column::PlayerId.eq(player_id))
            .one(&self.db)
            .await
            .map_err(db_err)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        let count = leaderboard_entry::Entity::find()
            .filter(leaderboard_entry::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn player_exists(&self, player_id: i64) -> Result<bool, ServiceError> {
        let count = player::Entity::find()
            .filter(player::Column::Id.eq(player_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn player_has_entry(&self, player_id: i64) -> Result<bool, ServiceError> {
        let count = leaderboard_entry::Entity::find()
            .filter(leaderboard_entry::Column::PlayerId.eq(player_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, player_id: i64) -> Result<leaderboard_entry::Model, ServiceError> {
        let am = leaderboard_entry::ActiveModel {
            player_id: Set(player_id),
            games_played: Set(0),
            total_score: Set(0),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn update(
        &self,
        current: leaderboard_entry::Model,
        player_id: i64,
        games_played: i64,
        total_score: i64,
    ) -> Result<(), ServiceError> {
        let id = current.id;
        let mut am: leaderboard_entry::ActiveModel = current.into();
        am.player_id = Set(player_id);
        am.games_played = Set(games_played);
        am.total_score = Set(total_score);
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            // The row may have been deleted under us; re-check before
            // deciding between NotFound and a fatal conflict.
            Err(DbErr::RecordNotUpdated) => {
                if self.exists(id).await? {
                    Err(ServiceError::Db("conflicting update on leaderboard entry row".into()))
                } else {
                    Err(ServiceError::not_found("leaderboard entry"))
                }
            }
            Err(err) => Err(db_err(err)),
        }
    }

    async fn record_score(
        &self,
        current: leaderboard_entry::Model,
        games_played: i64,
        total_score: i64,
    ) -> Result<(), ServiceError> {
        let mut am: leaderboard_entry::ActiveModel = current.into();
        am.games_played = Set(games_played);
        am.total_score = Set(total_score);
        am.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, current: leaderboard_entry::Model) -> Result<(), ServiceError> {
        current.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

fn db_err(err: DbErr) -> ServiceError {
    ServiceError::Db(err.to_string())
}
