use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::errors::ServiceError;
use models::player;

/// Store access needed by the players service. Any storage engine able to
/// answer these queries can back it.
#[async_trait]
pub trait PlayersRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<player::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Vec<player::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<player::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn email_exists(&self, email: &str) -> Result<bool, ServiceError>;
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<player::Model, ServiceError>;
    /// Overwrite the name and email fields of an existing row. A write that
    /// hits a concurrently deleted row reports NotFound; any other
    /// conditional-write conflict is fatal.
    async fn update(
        &self,
        current: player::Model,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), ServiceError>;
    async fn delete(&self, current: player::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPlayersRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PlayersRepository for SeaOrmPlayersRepository {
    async fn find_all(&self) -> Result<Vec<player::Model>, ServiceError> {
        player::Entity::find().all(&self.db).await.map_err(db_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<player::Model>, ServiceError> {
        player::Entity::find()
            .filter(player::Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<player::Model>, ServiceError> {
        player::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        let count = player::Entity::find()
            .filter(player::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, ServiceError> {
        let count = player::Entity::find()
            .filter(player::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<player::Model, ServiceError> {
        let am = player::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn update(
        &self,
        current: player::Model,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), ServiceError> {
        let id = current.id;
        let mut am: player::ActiveModel = current.into();
        am.first_name = Set(first_name.to_string());
        am.last_name = Set(last_name.to_string());
        am.email = Set(email.to_string());
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            // The row may have been deleted under us; re-check before
            // deciding between NotFound and a fatal conflict.
            Err(DbErr::RecordNotUpdated) => {
                if self.exists(id).await? {
                    Err(ServiceError::Db("conflicting update on player row".into()))
                } else {
                    Err(ServiceError::not_found("player"))
                }
            }
            Err(err) => Err(db_err(err)),
        }
    }

    async fn delete(&self, current: player::Model) -> Result<(), ServiceError> {
        current.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

fn db_err(err: DbErr) -> ServiceError {
    ServiceError::Db(err.to_string())
}
