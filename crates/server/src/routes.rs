use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::leaderboard::{LeaderboardService, SeaOrmLeaderboardRepository};
use service::players::{PlayersService, SeaOrmPlayersRepository};

pub mod leaderboard;
pub mod players;

/// Shared handler state: the two services wired to their SeaORM
/// repositories over the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<PlayersService<SeaOrmPlayersRepository>>,
    pub leaderboard: Arc<LeaderboardService<SeaOrmLeaderboardRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let players = Arc::new(PlayersService::new(Arc::new(SeaOrmPlayersRepository {
            db: db.clone(),
        })));
        let leaderboard = Arc::new(LeaderboardService::new(Arc::new(
            SeaOrmLeaderboardRepository { db },
        )));
        Self { players, leaderboard }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, players, leaderboard, docs.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/Players", get(players::list).post(players::create))
        .route(
            "/api/Players/:id",
            get(players::get).put(players::update).delete(players::delete),
        )
        .route(
            "/api/Leaderboard",
            get(leaderboard::list_top).post(leaderboard::create),
        )
        .route("/api/Leaderboard/scores", post(leaderboard::post_score))
        .route(
            "/api/Leaderboard/:id",
            get(leaderboard::get)
                .put(leaderboard::update)
                .delete(leaderboard::delete),
        )
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
