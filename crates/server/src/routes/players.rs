use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;
use models::dto::PlayerDto;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Exact email address to look up instead of listing everyone
    pub email: Option<String>,
}

#[utoipa::path(
    get, path = "/api/Players", tag = "players",
    params(ListQuery),
    responses((status = 200, description = "List of player records"))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<PlayerDto>>, ApiError> {
    let players = match q.email {
        Some(email) => state.players.list_by_email(&email).await?,
        None => state.players.list_all().await?,
    };
    Ok(Json(players.into_iter().map(PlayerDto::from).collect()))
}

#[utoipa::path(
    get, path = "/api/Players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player record"),
        (status = 404, description = "No such player")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerDto>, ApiError> {
    let player = state.players.get_by_id(id).await?;
    Ok(Json(PlayerDto::from(player)))
}

#[utoipa::path(
    post, path = "/api/Players", tag = "players",
    request_body = crate::openapi::PlayerRecordDoc,
    responses(
        (status = 201, description = "Created, Location header set"),
        (status = 400, description = "Invalid payload or email already in use")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PlayerDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<PlayerDto>), ApiError> {
    let created = state.players.create(&input).await?;
    info!(id = created.id, "created player");
    let location = format!("/api/Players/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PlayerDto::from(created)),
    ))
}

#[utoipa::path(
    put, path = "/api/Players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    request_body = crate::openapi::PlayerRecordDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid payload, id mismatch or email already in use"),
        (status = 404, description = "No such player")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<PlayerDto>,
) -> Result<StatusCode, ApiError> {
    state.players.update(id, &input).await?;
    info!(id, "updated player");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/Players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such player")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.players.delete(id).await?;
    info!(id, "deleted player");
    Ok(StatusCode::NO_CONTENT)
}
