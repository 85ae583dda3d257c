use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leaderboard_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub player_id: i64,
    pub games_played: i64,
    pub total_score: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Player,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Player => Entity::belongs_to(crate::player::Entity)
                .from(Column::PlayerId)
                .to(crate::player::Column::Id)
                .into(),
        }
    }
}

impl Related<crate::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
