use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
#[schema(as = PlayerRecord, rename_all = "camelCase")]
pub struct PlayerRecordDoc {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(ToSchema)]
#[schema(as = LeaderboardEntryRecord, rename_all = "camelCase")]
pub struct LeaderboardEntryRecordDoc {
    pub id: Option<i64>,
    pub player_id: i64,
    pub games_played: Option<i64>,
    pub total_score: Option<i64>,
}

#[derive(ToSchema)]
#[schema(as = NewScore, rename_all = "camelCase")]
pub struct NewScoreDoc {
    pub player_id: i64,
    pub total_score: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::players::list,
        crate::routes::players::get,
        crate::routes::players::create,
        crate::routes::players::update,
        crate::routes::players::delete,
        crate::routes::leaderboard::list_top,
        crate::routes::leaderboard::get,
        crate::routes::leaderboard::create,
        crate::routes::leaderboard::update,
        crate::routes::leaderboard::post_score,
        crate::routes::leaderboard::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PlayerRecordDoc,
            LeaderboardEntryRecordDoc,
            NewScoreDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "players"),
        (name = "leaderboard")
    )
)]
pub struct ApiDoc;
