use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::players::repository::PlayersRepository;
use models::{dto::PlayerDto, player};

/// Business rules for player CRUD. Payload validation and email uniqueness
/// policy live here; the repository only answers queries.
pub struct PlayersService<R: PlayersRepository> {
    repo: Arc<R>,
}

impl<R: PlayersRepository> PlayersService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All players, in the store's natural order.
    pub async fn list_all(&self) -> Result<Vec<player::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Players whose email exactly equals the argument.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<player::Model>, ServiceError> {
        self.repo.find_by_email(email).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<player::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player"))
    }

    /// Create a new player. The id is assigned by the store.
    pub async fn create(&self, data: &PlayerDto) -> Result<player::Model, ServiceError> {
        data.validate()?;
        if self.repo.email_exists(&data.email).await? {
            return Err(ServiceError::bad_request("email already in use"));
        }
        let created = self
            .repo
            .insert(&data.first_name, &data.last_name, &data.email)
            .await?;
        info!(id = created.id, "player_created");
        Ok(created)
    }

    /// Full replace of name and email fields.
    pub async fn update(&self, id: i64, data: &PlayerDto) -> Result<(), ServiceError> {
        if data.id != id {
            return Err(ServiceError::bad_request("path id does not match payload id"));
        }
        data.validate()?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player"))?;
        if current.email != data.email && self.repo.email_exists(&data.email).await? {
            return Err(ServiceError::bad_request("email already in use"));
        }
        self.repo
            .update(current, &data.first_name, &data.last_name, &data.email)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player"))?;
        self.repo.delete(current).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::repository::SeaOrmPlayersRepository;
    use crate::test_support::seeded_db;
    use sea_orm::EntityTrait;

    async fn service() -> Result<PlayersService<SeaOrmPlayersRepository>, anyhow::Error> {
        let db = seeded_db().await?;
        Ok(PlayersService::new(Arc::new(SeaOrmPlayersRepository { db })))
    }

    fn payload(id: i64, first: &str, last: &str, email: &str) -> PlayerDto {
        PlayerDto {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn lists_all_seeded_players() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let players = svc.list_all().await?;
        assert_eq!(players.len(), 11);
        Ok(())
    }

    #[tokio::test]
    async fn lists_by_exact_email() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let found = svc.list_by_email("adam.smith@email.co.uk").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Adam");

        let none = svc.list_by_email("nobody@email.co.uk").await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn created_player_gets_id_and_round_trips() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let created = svc
            .create(&payload(0, "Joe", "Bloggs", "joe.bloggs@email.co.uk"))
            .await?;
        assert!(created.id > 11);

        let fetched = svc.get_by_id(created.id).await?;
        assert_eq!(fetched.first_name, "Joe");
        assert_eq!(fetched.last_name, "Bloggs");
        assert_eq!(fetched.email, "joe.bloggs@email.co.uk");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc
            .create(&payload(0, "Other", "Richard", "richard.parkin@email.co.uk"))
            .await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn email_uniqueness_is_case_sensitive() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let created = svc
            .create(&payload(0, "Shouty", "Richard", "RICHARD.PARKIN@email.co.uk"))
            .await?;
        assert!(created.id > 11);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payloads_are_rejected() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        for dto in [
            payload(0, "", "Bloggs", "joe@email.co.uk"),
            payload(0, "Joe", "", "joe@email.co.uk"),
            payload(0, "Joe", "Bloggs", "not-an-email"),
            payload(0, "Joe", "Bloggs", "joe@nodot"),
            payload(0, "Joe", "Bloggs", "joe bloggs@email.co.uk"),
        ] {
            let result = svc.create(&dto).await;
            assert!(matches!(result, Err(ServiceError::BadRequest(_))), "{:?}", dto);
        }
        Ok(())
    }

    #[tokio::test]
    async fn missing_player_reads_report_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(matches!(svc.get_by_id(100).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(100).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_player_is_gone() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.delete(11).await?;
        assert!(matches!(svc.get_by_id(11).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_requires_matching_ids() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc
            .update(1, &payload(2, "Richard", "Parkin", "richard.parkin@email.co.uk"))
            .await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.update(2, &payload(2, "Adina", "Smythe", "adina.smythe@email.co.uk"))
            .await?;
        let updated = svc.get_by_id(2).await?;
        assert_eq!(updated.first_name, "Adina");
        assert_eq!(updated.last_name, "Smythe");
        assert_eq!(updated.email, "adina.smythe@email.co.uk");
        Ok(())
    }

    #[tokio::test]
    async fn update_keeping_own_email_is_allowed() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.update(2, &payload(2, "Adam", "Smithe", "adam.smith@email.co.uk"))
            .await?;
        let updated = svc.get_by_id(2).await?;
        assert_eq!(updated.last_name, "Smithe");
        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_email_is_rejected() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc
            .update(2, &payload(2, "Adam", "Smith", "richard.parkin@email.co.uk"))
            .await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_player_reports_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let result = svc
            .update(100, &payload(100, "Ghost", "Player", "ghost@email.co.uk"))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn stale_write_after_row_deletion_reports_not_found() -> Result<(), anyhow::Error> {
        let db = seeded_db().await?;
        let repo = SeaOrmPlayersRepository { db: db.clone() };
        let stale = repo.find_by_id(11).await?.unwrap();

        // Row disappears between the read and the write
        models::player::Entity::delete_by_id(11).exec(&db).await?;

        let result = repo
            .update(stale, "Barry", "Scott", "barry.scott@email.co.uk")
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
