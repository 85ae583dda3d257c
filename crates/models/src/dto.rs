//! Wire records exchanged over the HTTP surface. Conversions to and from
//! the entity models are pure; nothing here touches the store.
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{leaderboard_entry, player};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl PlayerDto {
    /// A player payload is valid iff both names are non-empty and the email
    /// is of the form `local@domain.tld`.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.first_name.is_empty() {
            return Err(ModelError::Validation("first name required".into()));
        }
        if self.last_name.is_empty() {
            return Err(ModelError::Validation("last name required".into()));
        }
        if !email_valid(&self.email) {
            return Err(ModelError::Validation("invalid email".into()));
        }
        Ok(())
    }
}

impl From<player::Model> for PlayerDto {
    fn from(m: player::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    #[serde(default)]
    pub id: i64,
    pub player_id: i64,
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub total_score: i64,
}

impl From<leaderboard_entry::Model> for LeaderboardEntryDto {
    fn from(m: leaderboard_entry::Model) -> Self {
        Self {
            id: m.id,
            player_id: m.player_id,
            games_played: m.games_played,
            total_score: m.total_score,
        }
    }
}

/// Entry record joined with the owning player's name, as shown on the
/// leaderboard listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryWithPlayerDto {
    pub id: i64,
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub games_played: i64,
    pub total_score: i64,
}

impl LeaderboardEntryWithPlayerDto {
    pub fn new(entry: leaderboard_entry::Model, owner: player::Model) -> Self {
        Self {
            id: entry.id,
            player_id: entry.player_id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            games_played: entry.games_played,
            total_score: entry.total_score,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScoreDto {
    pub player_id: i64,
    pub total_score: i64,
}

/// Mirrors `^[^@\s]+@[^@\s]+\.[^@\s]+$`: a non-empty local part, a single
/// `@`, and a domain containing a dot with non-empty pieces on both sides.
fn email_valid(email: &str) -> bool {
    fn part_ok(part: &str) -> bool {
        !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace())
    }
    match email.split_once('@') {
        Some((local, domain)) => match domain.rsplit_once('.') {
            Some((head, tail)) => part_ok(local) && part_ok(head) && part_ok(tail),
            None => false,
        },
        None => false,
    }
}
