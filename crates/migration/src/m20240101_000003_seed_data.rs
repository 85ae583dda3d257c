//! Seed the store with its initial roster: 11 players and one leaderboard
//! entry for each of players 1-10 (entry N has games_played = N and
//! total_score = 100 * N).
//!
//! Rows are inserted with explicit ids, so on Postgres the identity
//! sequences are advanced afterwards; SQLite tracks explicit rowids on its
//! own.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

const PLAYERS: [(i64, &str, &str, &str); 11] = [
    (1, "Richard", "Parkin", "richard.parkin@email.co.uk"),
    (2, "Adam", "Smith", "adam.smith@email.co.uk"),
    (3, "Jonathan", "Rhodes", "jonathan.rhodes@email.co.uk"),
    (4, "Sylvia", "Sansom", "sylvia.sansom@email.co.uk"),
    (5, "Alex", "Westby", "alex.westby@email.co.uk"),
    (6, "Matthew", "Hull", "richardparkin@email.co.uk"),
    (7, "David", "Jones", "david.jones@email.co.uk"),
    (8, "Jimmy", "Rigley", "jimmy.rigley@email.co.uk"),
    (9, "Judge", "Judy", "judge.judy@email.co.uk"),
    (10, "Pete", "Castle", "pete.castle@email.co.uk"),
    (11, "Barry", "Scott", "barry.scott@email.co.uk"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut players = Query::insert()
            .into_table(Player::Table)
            .columns([Player::Id, Player::FirstName, Player::LastName, Player::Email])
            .to_owned();
        for (id, first, last, email) in PLAYERS {
            players.values_panic([id.into(), first.into(), last.into(), email.into()]);
        }
        manager.exec_stmt(players).await?;

        let mut entries = Query::insert()
            .into_table(LeaderboardEntry::Table)
            .columns([
                LeaderboardEntry::Id,
                LeaderboardEntry::PlayerId,
                LeaderboardEntry::GamesPlayed,
                LeaderboardEntry::TotalScore,
            ])
            .to_owned();
        for n in 1..=10i64 {
            entries.values_panic([n.into(), n.into(), n.into(), (100 * n).into()]);
        }
        manager.exec_stmt(entries).await?;

        if manager.get_database_backend() == DbBackend::Postgres {
            let conn = manager.get_connection();
            conn.execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('player', 'id'), (SELECT MAX(id) FROM player))",
            )
            .await?;
            conn.execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('leaderboard_entry', 'id'), (SELECT MAX(id) FROM leaderboard_entry))",
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(LeaderboardEntry::Table)
                    .cond_where(Expr::col(LeaderboardEntry::Id).lte(10))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Player::Table)
                    .cond_where(Expr::col(Player::Id).lte(11))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Player { Table, Id, FirstName, LastName, Email }

#[derive(DeriveIden)]
enum LeaderboardEntry { Table, Id, PlayerId, GamesPlayed, TotalScore }
