//! Game CRUD handlers: create, list, read, update, delete.

use crate::config::MissingRowPolicy;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewGame;
use crate::response::{created, ok};
use crate::service::GameService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Applies the missing-row policy after an update or delete touched `affected` rows.
fn check_affected(policy: MissingRowPolicy, id: i64, affected: u64) -> Result<(), AppError> {
    if affected > 0 {
        return Ok(());
    }
    match policy {
        MissingRowPolicy::Ignore => {
            tracing::debug!(id, "no row matched; ignoring");
            Ok(())
        }
        MissingRowPolicy::NotFound => Err(AppError::NotFound("not found".into())),
    }
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewGame>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::create(&state.pool, body).await?;
    tracing::info!(id = game.id, "game created");
    Ok(created(game))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::list(&state.pool).await?;
    Ok(ok(games))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let game = GameService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("not found".into()))?;
    Ok(ok(game))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<NewGame>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let affected = GameService::update(&state.pool, id, &body).await?;
    check_affected(state.settings.missing_row, id, affected)?;
    Ok(ok(body.with_id(id)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let affected = GameService::delete(&state.pool, id).await?;
    check_affected(state.settings.missing_row, id, affected)?;
    Ok(StatusCode::NO_CONTENT)
}
