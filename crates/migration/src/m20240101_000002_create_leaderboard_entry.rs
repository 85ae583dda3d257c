//! Create `leaderboard_entry` table with FK to `player`.
//!
//! Deleting a player cascades to its entry; at most one entry may exist per
//! player (unique index applied in the index migration).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaderboardEntry::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(LeaderboardEntry::PlayerId).not_null())
                    .col(big_integer(LeaderboardEntry::GamesPlayed).not_null())
                    .col(big_integer(LeaderboardEntry::TotalScore).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_entry_player")
                            .from(LeaderboardEntry::Table, LeaderboardEntry::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaderboardEntry { Table, Id, PlayerId, GamesPlayed, TotalScore }

#[derive(DeriveIden)]
enum Player { Table, Id }
