use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    LeaderboardEntry,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::LeaderboardEntry => {
                Entity::has_many(crate::leaderboard_entry::Entity).into()
            }
        }
    }
}

impl Related<crate::leaderboard_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaderboardEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
