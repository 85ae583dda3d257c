//! Migrator registering entity-specific migrations in dependency order.
//! Seed data follows the tables it fills; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_player;
mod m20240101_000002_create_leaderboard_entry;
mod m20240101_000003_seed_data;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_player::Migration),
            Box::new(m20240101_000002_create_leaderboard_entry::Migration),
            Box::new(m20240101_000003_seed_data::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
