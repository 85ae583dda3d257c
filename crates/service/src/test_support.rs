#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

/// Fresh in-memory SQLite store, migrated and therefore carrying the seed
/// roster (11 players, entries for players 1-10).
pub async fn seeded_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
