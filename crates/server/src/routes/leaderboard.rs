use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;
use models::dto::{LeaderboardEntryDto, LeaderboardEntryWithPlayerDto, NewScoreDto};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Number of rows to return, defaults to 10
    pub limit: Option<i64>,
}

#[utoipa::path(
    get, path = "/api/Leaderboard", tag = "leaderboard",
    params(ListQuery),
    responses((status = 200, description = "Entries with player names, highest score first"))
)]
pub async fn list_top(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<LeaderboardEntryWithPlayerDto>>, ApiError> {
    let rows = state.leaderboard.list_top(q.limit).await?;
    let records = rows
        .into_iter()
        .filter_map(|(entry, owner)| {
            owner.map(|owner| LeaderboardEntryWithPlayerDto::new(entry, owner))
        })
        .collect();
    Ok(Json(records))
}

#[utoipa::path(
    get, path = "/api/Leaderboard/{id}", tag = "leaderboard",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry record"),
        (status = 404, description = "No such entry")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LeaderboardEntryDto>, ApiError> {
    let entry = state.leaderboard.get_by_id(id).await?;
    Ok(Json(LeaderboardEntryDto::from(entry)))
}

#[utoipa::path(
    post, path = "/api/Leaderboard", tag = "leaderboard",
    request_body = crate::openapi::LeaderboardEntryRecordDoc,
    responses(
        (status = 201, description = "Created, Location header set"),
        (status = 400, description = "Player missing or already has an entry")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<LeaderboardEntryDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<LeaderboardEntryDto>), ApiError> {
    let created = state.leaderboard.create(&input).await?;
    info!(id = created.id, player_id = created.player_id, "created leaderboard entry");
    let location = format!("/api/Leaderboard/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LeaderboardEntryDto::from(created)),
    ))
}

#[utoipa::path(
    put, path = "/api/Leaderboard/{id}", tag = "leaderboard",
    params(("id" = i64, Path, description = "Entry id")),
    request_body = crate::openapi::LeaderboardEntryRecordDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or invalid player reassignment"),
        (status = 404, description = "No such entry")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<LeaderboardEntryDto>,
) -> Result<StatusCode, ApiError> {
    state.leaderboard.update(id, &input).await?;
    info!(id, "updated leaderboard entry");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/api/Leaderboard/scores", tag = "leaderboard",
    request_body = crate::openapi::NewScoreDoc,
    responses(
        (status = 204, description = "Score recorded"),
        (status = 400, description = "No entry for that player")
    )
)]
pub async fn post_score(
    State(state): State<AppState>,
    Json(input): Json<NewScoreDto>,
) -> Result<StatusCode, ApiError> {
    state.leaderboard.post_score(&input).await?;
    info!(player_id = input.player_id, score = input.total_score, "recorded score");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/Leaderboard/{id}", tag = "leaderboard",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such entry")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.leaderboard.delete(id).await?;
    info!(id, "deleted leaderboard entry");
    Ok(StatusCode::NO_CONTENT)
}
