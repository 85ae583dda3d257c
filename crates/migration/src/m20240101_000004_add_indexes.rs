use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // LeaderboardEntry: at most one entry per player
        manager
            .create_index(
                Index::create()
                    .name("uniq_leaderboard_entry_player")
                    .table(LeaderboardEntry::Table)
                    .col(LeaderboardEntry::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // LeaderboardEntry: leaderboard listing orders by total_score desc
        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_entry_total_score")
                    .table(LeaderboardEntry::Table)
                    .col(LeaderboardEntry::TotalScore)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_leaderboard_entry_player")
                    .table(LeaderboardEntry::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_leaderboard_entry_total_score")
                    .table(LeaderboardEntry::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum LeaderboardEntry { Table, PlayerId, TotalScore }
